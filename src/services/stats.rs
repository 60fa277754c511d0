// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Aggregate uptime report across all stored summaries.

use std::collections::HashMap;

use crate::db::UptimeStore;
use crate::error::Result;
use crate::models::SummaryDocument;
use crate::time_utils::{MINUTES_PER_DAY, MINUTES_PER_HOUR};

/// Per-account line of the report.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountStats {
    pub account_name: String,
    pub user_id: String,
    pub today_total_minutes: u64,
    pub alltime_total_minutes: u64,
    pub total_formatted: String,
    pub last_updated: String,
}

/// Totals across accounts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UptimeStats {
    pub accounts: Vec<AccountStats>,
    pub total_today_minutes: u64,
    pub total_alltime_minutes: u64,
}

impl UptimeStats {
    /// Aggregate summaries, keeping the newest one per user.
    pub fn from_summaries(summaries: &[SummaryDocument]) -> Self {
        let mut latest: HashMap<&str, &SummaryDocument> = HashMap::new();
        for summary in summaries {
            latest
                .entry(summary.user_id.as_str())
                .and_modify(|current| {
                    // RFC3339 UTC timestamps compare correctly as strings.
                    if summary.timestamp > current.timestamp {
                        *current = summary;
                    }
                })
                .or_insert(summary);
        }

        let mut accounts: Vec<AccountStats> = latest
            .into_values()
            .map(|s| AccountStats {
                account_name: s.account_name.clone(),
                user_id: s.user_id.clone(),
                today_total_minutes: s.today_total_minutes,
                alltime_total_minutes: s.alltime_total_minutes,
                total_formatted: s.participation_time_breakdown.total_formatted.clone(),
                last_updated: s.timestamp.clone(),
            })
            .collect();
        accounts.sort_by(|a, b| a.account_name.cmp(&b.account_name));

        let total_today_minutes = accounts.iter().map(|a| a.today_total_minutes).sum();
        let total_alltime_minutes = accounts.iter().map(|a| a.alltime_total_minutes).sum();

        Self {
            accounts,
            total_today_minutes,
            total_alltime_minutes,
        }
    }

    /// Load all summaries from the store and aggregate them.
    pub async fn load(store: &dyn UptimeStore) -> Result<Self> {
        let summaries = store.list_summaries().await?;
        Ok(Self::from_summaries(&summaries))
    }

    /// Emit the report as structured log lines.
    pub fn log_report(&self) {
        if self.accounts.is_empty() {
            tracing::info!("Uptime stats: no data available");
            return;
        }

        for account in &self.accounts {
            tracing::info!(
                account = %account.account_name,
                today = %format_hours_minutes(account.today_total_minutes),
                total = %account.total_formatted,
                last_updated = %account.last_updated,
                "Account uptime"
            );
        }

        tracing::info!(
            accounts = self.accounts.len(),
            today = %format_hours_minutes(self.total_today_minutes),
            alltime_hours = self.total_alltime_minutes / MINUTES_PER_HOUR,
            alltime_days = %format!("{:.1}", self.total_alltime_minutes as f64 / MINUTES_PER_DAY as f64),
            "Uptime summary"
        );
    }
}

/// "Hh Mm"
pub fn format_hours_minutes(minutes: u64) -> String {
    format!("{}h {}m", minutes / MINUTES_PER_HOUR, minutes % MINUTES_PER_HOUR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::uptime::SUMMARY_TYPE;
    use crate::services::summary::time_breakdown;

    fn summary(user_id: &str, name: &str, today: u64, alltime: u64, ts: &str) -> SummaryDocument {
        SummaryDocument {
            doc_type: SUMMARY_TYPE.to_string(),
            user_id: user_id.to_string(),
            account_name: name.to_string(),
            pubkey: "pk".to_string(),
            timestamp: ts.to_string(),
            today_base_minutes: today,
            today_total_minutes: today,
            today_referral_minutes: 0,
            alltime_base_minutes: alltime,
            alltime_total_minutes: alltime,
            alltime_referral_minutes: 0,
            today_total_hours: 0.0,
            alltime_total_hours: 0.0,
            alltime_total_days: 0.0,
            total_days_tracked: 0,
            participation_time_breakdown: time_breakdown(alltime),
        }
    }

    #[test]
    fn test_totals_across_accounts() {
        let stats = UptimeStats::from_summaries(&[
            summary("u1", "B", 30, 1000, "2025-01-01T00:00:00Z"),
            summary("u2", "A", 45, 2000, "2025-01-01T00:00:00Z"),
        ]);

        assert_eq!(stats.accounts.len(), 2);
        assert_eq!(stats.accounts[0].account_name, "A");
        assert_eq!(stats.total_today_minutes, 75);
        assert_eq!(stats.total_alltime_minutes, 3000);
    }

    #[test]
    fn test_newest_summary_wins_per_user() {
        let stats = UptimeStats::from_summaries(&[
            summary("u1", "Node", 10, 100, "2025-01-01T00:00:00Z"),
            summary("u1", "Node", 20, 200, "2025-01-02T00:00:00Z"),
            summary("u1", "Node", 15, 150, "2025-01-01T12:00:00Z"),
        ]);

        assert_eq!(stats.accounts.len(), 1);
        assert_eq!(stats.total_alltime_minutes, 200);
        assert_eq!(stats.accounts[0].last_updated, "2025-01-02T00:00:00Z");
    }

    #[test]
    fn test_format_hours_minutes() {
        assert_eq!(format_hours_minutes(125), "2h 5m");
        assert_eq!(format_hours_minutes(0), "0h 0m");
    }
}
