// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bless uptime tracker
//!
//! Polls the Bless indexer for a set of accounts, rebuilds per-day uptime
//! from cumulative reward counters, and upserts summary and daily documents
//! into Firestore.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;

use std::sync::Arc;

use config::Config;
use db::UptimeStore;
use services::{
    AccountProcessor, CycleRunner, EarningsSource, PacingWindow, RetryPolicy, Scheduler, Sleeper,
};

/// Wire the processing pipeline from startup configuration.
pub fn build_scheduler(
    config: &Config,
    source: Arc<dyn EarningsSource>,
    store: Arc<dyn UptimeStore>,
    sleeper: Arc<dyn Sleeper>,
) -> Scheduler {
    let processor = AccountProcessor::new(
        source,
        store.clone(),
        sleeper.clone(),
        RetryPolicy::from_config(config),
    );
    let runner = CycleRunner::new(
        processor,
        sleeper,
        PacingWindow::new(config.pacing_min, config.pacing_max),
    );
    Scheduler::new(runner, store, config.cycle_interval)
}
