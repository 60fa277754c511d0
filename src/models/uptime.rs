// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Uptime documents stored in Firestore.
//!
//! All documents share one collection and are told apart by their `type`
//! field: one `summary` per account and one `daily_uptime` per account/day.

use serde::{Deserialize, Serialize};

use crate::models::AccountIdentity;

pub const SUMMARY_TYPE: &str = "summary";
pub const DAILY_UPTIME_TYPE: &str = "daily_uptime";

/// One day's increment, derived from two consecutive cumulative readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyUptimeRecord {
    pub date: String,
    pub daily_base_minutes: u64,
    pub daily_total_minutes: u64,
    pub daily_referral_minutes: u64,
    pub daily_base_hours: f64,
    pub daily_total_hours: f64,
    pub daily_referral_hours: f64,
    pub cumulative_base_minutes: u64,
    pub cumulative_total_minutes: u64,
    pub cumulative_referral_minutes: u64,
}

/// Whole days, hours and minutes of participation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBreakdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    /// "D days, H hours, M minutes"
    pub total_formatted: String,
}

/// Latest totals for one account.
///
/// Keyed by (`type`, `user_id`); replaced wholesale on every successful cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryDocument {
    #[serde(rename = "type")]
    pub doc_type: String,
    pub user_id: String,
    pub account_name: String,
    pub pubkey: String,
    /// When this document was written (RFC3339)
    pub timestamp: String,

    pub today_base_minutes: u64,
    pub today_total_minutes: u64,
    pub today_referral_minutes: u64,
    pub alltime_base_minutes: u64,
    pub alltime_total_minutes: u64,
    pub alltime_referral_minutes: u64,

    pub today_total_hours: f64,
    pub alltime_total_hours: f64,
    pub alltime_total_days: f64,
    /// Number of daily records derived in the same cycle
    pub total_days_tracked: u64,

    pub participation_time_breakdown: TimeBreakdown,
}

/// One day of uptime for one account.
///
/// Keyed by (`type`, `user_id`, `date`); never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyDocument {
    #[serde(rename = "type")]
    pub doc_type: String,
    pub user_id: String,
    pub account_name: String,
    pub pubkey: String,
    pub timestamp: String,

    pub date: String,
    pub daily_base_minutes: u64,
    pub daily_total_minutes: u64,
    pub daily_referral_minutes: u64,
    pub daily_base_hours: f64,
    pub daily_total_hours: f64,
    pub daily_referral_hours: f64,
    pub cumulative_base_minutes: u64,
    pub cumulative_total_minutes: u64,
    pub cumulative_referral_minutes: u64,
}

impl DailyDocument {
    pub fn from_record(account: &AccountIdentity, record: &DailyUptimeRecord, timestamp: &str) -> Self {
        Self {
            doc_type: DAILY_UPTIME_TYPE.to_string(),
            user_id: account.user_id.clone(),
            account_name: account.name.clone(),
            pubkey: account.pubkey.clone(),
            timestamp: timestamp.to_string(),
            date: record.date.clone(),
            daily_base_minutes: record.daily_base_minutes,
            daily_total_minutes: record.daily_total_minutes,
            daily_referral_minutes: record.daily_referral_minutes,
            daily_base_hours: record.daily_base_hours,
            daily_total_hours: record.daily_total_hours,
            daily_referral_hours: record.daily_referral_hours,
            cumulative_base_minutes: record.cumulative_base_minutes,
            cumulative_total_minutes: record.cumulative_total_minutes,
            cumulative_referral_minutes: record.cumulative_referral_minutes,
        }
    }
}
