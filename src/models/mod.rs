// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod account;
pub mod earnings;
pub mod uptime;

pub use account::{AccountConfig, AccountIdentity};
pub use earnings::{OverviewSnapshot, RawEarningsRecord};
pub use uptime::{DailyDocument, DailyUptimeRecord, SummaryDocument, TimeBreakdown};
