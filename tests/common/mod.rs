// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use bless_uptime_tracker::db::FirestoreDb;
use bless_uptime_tracker::error::AppError;
use bless_uptime_tracker::models::{
    AccountConfig, AccountIdentity, OverviewSnapshot, RawEarningsRecord,
};
use bless_uptime_tracker::services::{EarningsSource, Sleeper};
use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a mock database connection (offline, every call fails).
#[allow(dead_code)]
pub fn test_db_offline() -> FirestoreDb {
    FirestoreDb::new_mock()
}

#[allow(dead_code)]
pub fn account(name: &str, user_id: &str) -> AccountConfig {
    AccountConfig {
        name: Some(name.to_string()),
        jwt_token: Some(format!("token-{}", user_id)),
        user_id: Some(user_id.to_string()),
        pubkey: Some(format!("pk-{}", user_id)),
    }
}

#[allow(dead_code)]
pub fn identity(name: &str, user_id: &str) -> AccountIdentity {
    account(name, user_id)
        .validate()
        .expect("test account should be valid")
}

#[allow(dead_code)]
pub fn earnings(date: &str, base: u64, total: u64, referral: u64) -> RawEarningsRecord {
    RawEarningsRecord {
        date: date.to_string(),
        base_reward: base,
        total_reward: total,
        referral_reward: referral,
    }
}

#[allow(dead_code)]
pub fn overview(today_total: u64, alltime_total: u64) -> OverviewSnapshot {
    OverviewSnapshot {
        today_base_reward: today_total,
        today_total_reward: today_total,
        today_referrals_reward: 0,
        all_time_base_reward: alltime_total,
        all_time_total_reward: alltime_total,
        all_time_referrals_reward: 0,
    }
}

/// Scripted earnings source.
///
/// Each read pops the next scripted result; once a script runs out the
/// fallback value is returned (or a transport error when there is none).
/// Users in `failing_users` always get a transport error.
#[allow(dead_code)]
#[derive(Default)]
pub struct FakeSource {
    overview_script: Mutex<VecDeque<Result<OverviewSnapshot, AppError>>>,
    earnings_script: Mutex<VecDeque<Result<Vec<RawEarningsRecord>, AppError>>>,
    fallback_overview: Option<OverviewSnapshot>,
    fallback_earnings: Option<Vec<RawEarningsRecord>>,
    failing_users: HashSet<String>,
    overview_calls: Mutex<Vec<String>>,
    earnings_calls: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source that always answers with the given data.
    pub fn healthy(overview: OverviewSnapshot, records: Vec<RawEarningsRecord>) -> Self {
        Self {
            fallback_overview: Some(overview),
            fallback_earnings: Some(records),
            ..Self::default()
        }
    }

    pub fn push_overview(self, result: Result<OverviewSnapshot, AppError>) -> Self {
        self.overview_script.lock().unwrap().push_back(result);
        self
    }

    pub fn push_earnings(self, result: Result<Vec<RawEarningsRecord>, AppError>) -> Self {
        self.earnings_script.lock().unwrap().push_back(result);
        self
    }

    pub fn failing_for(mut self, user_id: &str) -> Self {
        self.failing_users.insert(user_id.to_string());
        self
    }

    pub fn overview_calls(&self) -> Vec<String> {
        self.overview_calls.lock().unwrap().clone()
    }

    pub fn earnings_calls(&self) -> Vec<String> {
        self.earnings_calls.lock().unwrap().clone()
    }

    pub fn total_calls(&self) -> usize {
        self.overview_calls().len() + self.earnings_calls().len()
    }
}

#[allow(dead_code)]
fn no_data(source: &str) -> AppError {
    AppError::Transport(format!("no scripted {} response", source))
}

#[async_trait]
impl EarningsSource for FakeSource {
    async fn fetch_overview(
        &self,
        account: &AccountIdentity,
    ) -> Result<OverviewSnapshot, AppError> {
        self.overview_calls
            .lock()
            .unwrap()
            .push(account.user_id.clone());
        if self.failing_users.contains(&account.user_id) {
            return Err(no_data("overview"));
        }
        match self.overview_script.lock().unwrap().pop_front() {
            Some(result) => result,
            None => self.fallback_overview.clone().ok_or_else(|| no_data("overview")),
        }
    }

    async fn fetch_earnings(
        &self,
        account: &AccountIdentity,
    ) -> Result<Vec<RawEarningsRecord>, AppError> {
        self.earnings_calls
            .lock()
            .unwrap()
            .push(account.user_id.clone());
        if self.failing_users.contains(&account.user_id) {
            return Err(no_data("earnings"));
        }
        match self.earnings_script.lock().unwrap().pop_front() {
            Some(result) => result,
            None => self.fallback_earnings.clone().ok_or_else(|| no_data("earnings")),
        }
    }
}

/// Sleeper that returns immediately and remembers every requested delay.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingSleeper {
    sleeps: Mutex<Vec<Duration>>,
}

#[allow(dead_code)]
impl RecordingSleeper {
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}

/// Log lines captured from the thread-local subscriber installed by
/// `capture_logs`.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)]
impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    pub fn count(&self, message: &str) -> usize {
        self.contents().matches(message).count()
    }
}

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Route this thread's tracing events into a buffer until the guard drops.
///
/// Only valid on the current-thread runtime `#[tokio::test]` uses by default.
#[allow(dead_code)]
pub fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(move || writer.clone())
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}
