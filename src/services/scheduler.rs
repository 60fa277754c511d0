// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fixed-period cycle scheduling.
//!
//! Cycles run inline on the scheduler task, so a cycle that outlasts the
//! period delays the next one instead of overlapping it; the ticks missed
//! meanwhile are skipped, not queued.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;

use crate::db::UptimeStore;
use crate::models::AccountConfig;
use crate::services::cycle::CycleRunner;
use crate::services::stats::UptimeStats;

pub struct Scheduler {
    runner: CycleRunner,
    store: Arc<dyn UptimeStore>,
    period: Duration,
}

impl Scheduler {
    pub fn new(runner: CycleRunner, store: Arc<dyn UptimeStore>, period: Duration) -> Self {
        Self {
            runner,
            store,
            period: period.max(Duration::from_millis(1)),
        }
    }

    /// Run a cycle immediately, then once per period, until `shutdown`
    /// resolves. An in-flight cycle is dropped on shutdown.
    ///
    /// Returns the number of completed cycles.
    pub async fn run_until<F>(&self, accounts: &[AccountConfig], shutdown: F) -> usize
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        let mut interval = tokio::time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        tracing::info!(
            period_secs = self.period.as_secs(),
            accounts = accounts.len(),
            "Scheduler started"
        );

        let mut completed = 0;
        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    tracing::info!("Shutdown requested, stopping scheduler");
                    break;
                }
                _ = interval.tick() => {}
            }

            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    tracing::warn!("Shutdown requested during cycle, aborting in-flight account");
                    break;
                }
                _ = self.runner.run_cycle(accounts) => {
                    completed += 1;
                }
            }

            self.report_stats().await;
        }

        tracing::info!(cycles = completed, "Scheduler stopped");
        completed
    }

    async fn report_stats(&self) {
        match UptimeStats::load(self.store.as_ref()).await {
            Ok(stats) => stats.log_report(),
            Err(e) => tracing::error!(kind = e.kind(), error = %e, "Failed to load uptime stats"),
        }
    }
}
