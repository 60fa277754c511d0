// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! One tracking cycle: every configured account, in order, one at a time.

use std::sync::Arc;

use crate::models::AccountConfig;
use crate::services::pacing::{PacingWindow, Sleeper};
use crate::services::processor::{AccountOutcome, AccountProcessor};

/// Tally of account outcomes for one cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
    pub storage_failed: usize,
}

impl CycleReport {
    fn record(&mut self, outcome: &AccountOutcome) {
        self.total += 1;
        match outcome {
            AccountOutcome::Succeeded { .. } => self.succeeded += 1,
            AccountOutcome::Failed { .. } => self.failed += 1,
            AccountOutcome::Skipped { .. } => self.skipped += 1,
            AccountOutcome::StorageFailed { .. } => self.storage_failed += 1,
        }
    }

    /// True when accounts were configured but none succeeded.
    pub fn all_failed(&self) -> bool {
        self.total > 0 && self.succeeded == 0
    }
}

pub struct CycleRunner {
    processor: AccountProcessor,
    sleeper: Arc<dyn Sleeper>,
    pacing: PacingWindow,
}

impl CycleRunner {
    pub fn new(processor: AccountProcessor, sleeper: Arc<dyn Sleeper>, pacing: PacingWindow) -> Self {
        Self {
            processor,
            sleeper,
            pacing,
        }
    }

    /// Process every account, pausing a random interval between accounts.
    ///
    /// A failing account never stops the cycle.
    pub async fn run_cycle(&self, accounts: &[AccountConfig]) -> CycleReport {
        let mut report = CycleReport::default();

        if accounts.is_empty() {
            tracing::warn!("No accounts loaded, nothing to track this cycle");
            return report;
        }

        tracing::info!(accounts = accounts.len(), "Starting uptime tracking cycle");

        for (i, account) in accounts.iter().enumerate() {
            if i > 0 {
                let delay = self.pacing.sample();
                tracing::info!(
                    delay_secs = delay.as_secs_f64(),
                    "Waiting before next account"
                );
                self.sleeper.sleep(delay).await;
            }

            let outcome = self.processor.process(account).await;
            tracing::debug!(account = %account.display_name(), outcome = ?outcome, "Account finished");
            report.record(&outcome);
        }

        if report.all_failed() {
            tracing::error!(
                total = report.total,
                failed = report.failed,
                skipped = report.skipped,
                storage_failed = report.storage_failed,
                "Uptime tracking cycle completed with no successful accounts"
            );
        } else {
            tracing::info!(
                total = report.total,
                succeeded = report.succeeded,
                failed = report.failed,
                skipped = report.skipped,
                storage_failed = report.storage_failed,
                "Uptime tracking cycle completed"
            );
        }

        report
    }
}
