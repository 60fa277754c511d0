// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-account processing with bounded retries.
//!
//! Each attempt:
//! 1. Fetch the overview snapshot
//! 2. Fetch the earnings history
//! 3. If either read produced data, derive and store documents and stop
//!
//! An attempt where both reads fail is retried after a fixed delay, up to
//! the policy's attempt budget. Failures that another attempt cannot fix
//! end the account's cycle early.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::db::UptimeStore;
use crate::models::{AccountConfig, AccountIdentity, OverviewSnapshot, RawEarningsRecord};
use crate::services::bless::EarningsSource;
use crate::services::pacing::Sleeper;
use crate::services::persist::{save_account_data, PersistReport};
use crate::time_utils::format_utc_rfc3339;

/// Fixed-delay retry budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    /// Wait before every attempt after the first
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            delay: config.retry_delay,
        }
    }
}

/// Result of processing one account in one cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountOutcome {
    /// Required configuration missing; nothing was fetched
    Skipped { reason: String },
    /// Data fetched and stored
    Succeeded { attempts: u32, report: PersistReport },
    /// Every attempt returned no data
    Failed { attempts: u32 },
    /// Data fetched but the store rejected a write
    StorageFailed { attempts: u32, error: String },
}

pub struct AccountProcessor {
    source: Arc<dyn EarningsSource>,
    store: Arc<dyn UptimeStore>,
    sleeper: Arc<dyn Sleeper>,
    policy: RetryPolicy,
}

impl AccountProcessor {
    pub fn new(
        source: Arc<dyn EarningsSource>,
        store: Arc<dyn UptimeStore>,
        sleeper: Arc<dyn Sleeper>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            source,
            store,
            sleeper,
            policy,
        }
    }

    /// Process one account. Never returns an error: every failure is logged
    /// and reported through the outcome.
    pub async fn process(&self, account: &AccountConfig) -> AccountOutcome {
        let identity = match account.validate() {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!(
                    account = %account.display_name(),
                    kind = e.kind(),
                    error = %e,
                    "Skipping account with incomplete configuration"
                );
                return AccountOutcome::Skipped {
                    reason: e.to_string(),
                };
            }
        };

        let max_attempts = self.policy.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            if attempt > 1 {
                self.sleeper.sleep(self.policy.delay).await;
            }

            tracing::info!(
                account = %identity.name,
                attempt,
                max_attempts,
                "Processing account"
            );

            let (overview, earnings, retryable) = self.fetch(&identity, attempt).await;

            if overview.is_none() && earnings.is_none() {
                if !retryable {
                    tracing::error!(
                        account = %identity.name,
                        attempt,
                        "Both reads failed with non-retryable errors, giving up for this cycle"
                    );
                    return AccountOutcome::Failed { attempts: attempt };
                }
                if attempt < max_attempts {
                    tracing::info!(
                        account = %identity.name,
                        attempt,
                        retry_in_secs = self.policy.delay.as_secs(),
                        "No data from either source, retrying"
                    );
                } else {
                    tracing::error!(
                        account = %identity.name,
                        attempts = max_attempts,
                        "Failed to process account, giving up for this cycle"
                    );
                }
                continue;
            }

            let timestamp = format_utc_rfc3339(chrono::Utc::now());
            return match save_account_data(
                self.store.as_ref(),
                &identity,
                overview.as_ref(),
                earnings.as_deref(),
                &timestamp,
            )
            .await
            {
                Ok(report) => {
                    tracing::info!(
                        account = %identity.name,
                        attempt,
                        summary_saved = report.summary.is_some(),
                        daily_written = report.daily_written(),
                        "Successfully completed processing"
                    );
                    AccountOutcome::Succeeded {
                        attempts: attempt,
                        report,
                    }
                }
                Err(e) => {
                    tracing::error!(
                        account = %identity.name,
                        user_id = %identity.user_id,
                        attempt,
                        kind = e.kind(),
                        error = %e,
                        "Failed to save account data"
                    );
                    AccountOutcome::StorageFailed {
                        attempts: attempt,
                        error: e.to_string(),
                    }
                }
            };
        }

        AccountOutcome::Failed {
            attempts: max_attempts,
        }
    }

    /// Run both reads; a failed read becomes `None` after logging.
    ///
    /// The flag is false only when every failed read is non-retryable.
    async fn fetch(
        &self,
        identity: &AccountIdentity,
        attempt: u32,
    ) -> (Option<OverviewSnapshot>, Option<Vec<RawEarningsRecord>>, bool) {
        let mut retryable = false;

        let overview = match self.source.fetch_overview(identity).await {
            Ok(overview) => Some(overview),
            Err(e) => {
                log_fetch_error(identity, attempt, "overview", &e);
                retryable |= e.is_retryable();
                None
            }
        };

        let earnings = match self.source.fetch_earnings(identity).await {
            Ok(records) => Some(records),
            Err(e) => {
                log_fetch_error(identity, attempt, "earnings", &e);
                retryable |= e.is_retryable();
                None
            }
        };

        (overview, earnings, retryable)
    }
}

fn log_fetch_error(
    identity: &AccountIdentity,
    attempt: u32,
    source: &'static str,
    error: &crate::error::AppError,
) {
    if error.is_auth_error() {
        tracing::warn!(
            account = %identity.name,
            attempt,
            source,
            kind = error.kind(),
            error = %error,
            "Credential rejected, token may be expired"
        );
    } else {
        tracing::warn!(
            account = %identity.name,
            attempt,
            source,
            kind = error.kind(),
            error = %error,
            "Fetch failed"
        );
    }
}
