// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily uptime reconstruction from cumulative reward counters.

use crate::models::{DailyUptimeRecord, RawEarningsRecord};
use crate::time_utils::minutes_to_hours;

/// Convert cumulative earnings readings into per-day increments.
///
/// Records are stably sorted by date; records sharing a date are kept and
/// each is diffed against the running baseline. A reading below the previous
/// one yields a zero delta and still becomes the new baseline, so a single
/// bad reading cannot inflate the following days.
pub fn calculate_daily_uptime(records: &[RawEarningsRecord]) -> Vec<DailyUptimeRecord> {
    let mut sorted: Vec<&RawEarningsRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));

    let mut prev_base = 0u64;
    let mut prev_total = 0u64;
    let mut prev_referral = 0u64;

    sorted
        .into_iter()
        .map(|record| {
            let daily_base = record.base_reward.saturating_sub(prev_base);
            let daily_total = record.total_reward.saturating_sub(prev_total);
            let daily_referral = record.referral_reward.saturating_sub(prev_referral);

            prev_base = record.base_reward;
            prev_total = record.total_reward;
            prev_referral = record.referral_reward;

            DailyUptimeRecord {
                date: record.date.clone(),
                daily_base_minutes: daily_base,
                daily_total_minutes: daily_total,
                daily_referral_minutes: daily_referral,
                daily_base_hours: minutes_to_hours(daily_base),
                daily_total_hours: minutes_to_hours(daily_total),
                daily_referral_hours: minutes_to_hours(daily_referral),
                cumulative_base_minutes: record.base_reward,
                cumulative_total_minutes: record.total_reward,
                cumulative_referral_minutes: record.referral_reward,
            }
        })
        .collect()
}
