// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod accounts;
pub mod bless;
pub mod cycle;
pub mod delta;
pub mod pacing;
pub mod persist;
pub mod processor;
pub mod scheduler;
pub mod stats;
pub mod summary;

pub use accounts::load_accounts;
pub use bless::{BlessClient, EarningsSource};
pub use cycle::{CycleReport, CycleRunner};
pub use delta::calculate_daily_uptime;
pub use pacing::{PacingWindow, Sleeper, TokioSleeper};
pub use persist::{save_account_data, PersistReport};
pub use processor::{AccountOutcome, AccountProcessor, RetryPolicy};
pub use scheduler::Scheduler;
pub use stats::UptimeStats;
pub use summary::{build_summary, time_breakdown};
