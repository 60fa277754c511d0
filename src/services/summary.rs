// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Summary document construction from an overview snapshot.

use crate::models::uptime::SUMMARY_TYPE;
use crate::models::{AccountIdentity, OverviewSnapshot, SummaryDocument, TimeBreakdown};
use crate::time_utils::{minutes_to_days, minutes_to_hours, MINUTES_PER_DAY, MINUTES_PER_HOUR};

/// Split a minute count into whole days, hours and minutes (floored).
pub fn time_breakdown(total_minutes: u64) -> TimeBreakdown {
    let days = total_minutes / MINUTES_PER_DAY;
    let hours = (total_minutes % MINUTES_PER_DAY) / MINUTES_PER_HOUR;
    let minutes = total_minutes % MINUTES_PER_HOUR;

    TimeBreakdown {
        days,
        hours,
        minutes,
        total_formatted: format!("{} days, {} hours, {} minutes", days, hours, minutes),
    }
}

/// Build the account summary.
///
/// Returns `None` without an overview: the stored summary is left untouched
/// rather than overwritten with zeros.
pub fn build_summary(
    account: &AccountIdentity,
    overview: Option<&OverviewSnapshot>,
    days_tracked: usize,
    timestamp: &str,
) -> Option<SummaryDocument> {
    let overview = overview?;
    let alltime_total = overview.all_time_total_reward;

    Some(SummaryDocument {
        doc_type: SUMMARY_TYPE.to_string(),
        user_id: account.user_id.clone(),
        account_name: account.name.clone(),
        pubkey: account.pubkey.clone(),
        timestamp: timestamp.to_string(),
        today_base_minutes: overview.today_base_reward,
        today_total_minutes: overview.today_total_reward,
        today_referral_minutes: overview.today_referrals_reward,
        alltime_base_minutes: overview.all_time_base_reward,
        alltime_total_minutes: alltime_total,
        alltime_referral_minutes: overview.all_time_referrals_reward,
        today_total_hours: minutes_to_hours(overview.today_total_reward),
        alltime_total_hours: minutes_to_hours(alltime_total),
        alltime_total_days: minutes_to_days(alltime_total),
        total_days_tracked: days_tracked as u64,
        participation_time_breakdown: time_breakdown(alltime_total),
    })
}
