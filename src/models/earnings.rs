// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Wire models returned by the Bless indexer API.

use serde::{Deserialize, Serialize};

/// One cumulative reading from the earnings history endpoint.
///
/// Reward values are minutes accrued since account creation. Missing fields
/// default to zero (or an empty date).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEarningsRecord {
    /// Calendar day ("YYYY-MM-DD")
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub base_reward: u64,
    #[serde(default)]
    pub total_reward: u64,
    #[serde(default)]
    pub referral_reward: u64,
}

/// Point-in-time counters from the overview endpoint.
///
/// Authoritative for current totals; preferred over values derived from the
/// earnings history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewSnapshot {
    #[serde(default)]
    pub today_base_reward: u64,
    #[serde(default)]
    pub today_total_reward: u64,
    #[serde(default)]
    pub today_referrals_reward: u64,
    #[serde(default)]
    pub all_time_base_reward: u64,
    #[serde(default)]
    pub all_time_total_reward: u64,
    #[serde(default)]
    pub all_time_referrals_reward: u64,
}
