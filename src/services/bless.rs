// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bless indexer API client.
//!
//! Two independent reads per account:
//! - overview (today and all-time reward counters)
//! - earnings history (cumulative counters per day)

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::models::{AccountIdentity, OverviewSnapshot, RawEarningsRecord};

/// Longest response body excerpt carried in an error.
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Source of reward data for one account.
#[async_trait]
pub trait EarningsSource: Send + Sync {
    async fn fetch_overview(&self, account: &AccountIdentity)
        -> Result<OverviewSnapshot, AppError>;

    async fn fetch_earnings(
        &self,
        account: &AccountIdentity,
    ) -> Result<Vec<RawEarningsRecord>, AppError>;
}

/// Bless indexer API client.
#[derive(Clone)]
pub struct BlessClient {
    http: reqwest::Client,
    base_url: String,
}

impl BlessClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("bless-uptime-tracker/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("HTTP client error: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Generic GET request with JSON response.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<T, AppError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let status = response.status();
        tracing::debug!(url = %url, status = status.as_u16(), "Bless API response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_failure(status.as_u16(), &body));
        }

        // Read the body first so a decode failure can report what came back.
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| {
            AppError::MalformedResponse(format!(
                "JSON parse error: {} (body: {})",
                e,
                truncate(&body)
            ))
        })
    }
}

#[async_trait]
impl EarningsSource for BlessClient {
    async fn fetch_overview(
        &self,
        account: &AccountIdentity,
    ) -> Result<OverviewSnapshot, AppError> {
        self.get_json("/users/overview", &account.token).await
    }

    async fn fetch_earnings(
        &self,
        account: &AccountIdentity,
    ) -> Result<Vec<RawEarningsRecord>, AppError> {
        let records: Vec<RawEarningsRecord> =
            self.get_json("/users/earnings", &account.token).await?;
        tracing::debug!(
            account = %account.name,
            count = records.len(),
            "Fetched earnings records"
        );
        Ok(records)
    }
}

/// Map a non-success HTTP status to an error.
pub fn classify_failure(status: u16, body: &str) -> AppError {
    let body = truncate(body);
    match status {
        401 => AppError::Auth(format!("token rejected or expired: {}", body)),
        403 => AppError::AccessDenied(format!("request blocked: {}", body)),
        _ => AppError::UpstreamStatus { status, body },
    }
}

fn truncate(body: &str) -> String {
    body.chars().take(MAX_ERROR_BODY_CHARS).collect()
}
