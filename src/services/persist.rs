// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persistence of one account's fetched data.
//!
//! Recomputes the full daily history on every run and re-upserts every day,
//! so late corrections from the API overwrite earlier values.

use crate::db::{UpsertOutcome, UptimeStore};
use crate::error::Result;
use crate::models::{AccountIdentity, DailyDocument, OverviewSnapshot, RawEarningsRecord};
use crate::services::delta::calculate_daily_uptime;
use crate::services::summary::build_summary;

/// What a save wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistReport {
    /// Outcome of the summary upsert; `None` when no overview was available
    pub summary: Option<UpsertOutcome>,
    pub daily_created: usize,
    pub daily_updated: usize,
}

impl PersistReport {
    pub fn daily_written(&self) -> usize {
        self.daily_created + self.daily_updated
    }
}

/// Derive and store the summary and daily documents for one account.
///
/// Either input may be missing. A storage failure aborts the save and is
/// returned to the caller.
pub async fn save_account_data(
    store: &dyn UptimeStore,
    account: &AccountIdentity,
    overview: Option<&OverviewSnapshot>,
    earnings: Option<&[RawEarningsRecord]>,
    timestamp: &str,
) -> Result<PersistReport> {
    let mut report = PersistReport::default();

    if overview.is_none() && earnings.is_none() {
        tracing::warn!(account = %account.name, "No data to save");
        return Ok(report);
    }

    let daily_records = earnings.map(calculate_daily_uptime).unwrap_or_default();

    if let Some(summary) = build_summary(account, overview, daily_records.len(), timestamp) {
        let outcome = store.upsert_summary(&account.user_id, &summary).await?;
        let breakdown = &summary.participation_time_breakdown;
        tracing::info!(
            account = %account.name,
            outcome = ?outcome,
            alltime_total_minutes = summary.alltime_total_minutes,
            days = breakdown.days,
            hours = breakdown.hours,
            minutes = breakdown.minutes,
            "Saved overview summary"
        );
        report.summary = Some(outcome);
    }

    for record in &daily_records {
        let doc = DailyDocument::from_record(account, record, timestamp);
        match store
            .upsert_daily(&account.user_id, &record.date, &doc)
            .await?
        {
            UpsertOutcome::Created => report.daily_created += 1,
            UpsertOutcome::Updated => report.daily_updated += 1,
        }
    }

    if !daily_records.is_empty() {
        tracing::info!(
            account = %account.name,
            new = report.daily_created,
            updated = report.daily_updated,
            "Saved daily uptime"
        );
    }

    Ok(report)
}
