// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types shared by the fetch, persistence and cycle layers.

/// Application error type.
///
/// Fetch failures (`Auth`, `AccessDenied`, `MalformedResponse`, `Transport`,
/// `UpstreamStatus`) are retried by the account processor. `Configuration`
/// errors are never retried. `Database` errors are logged and the cycle moves
/// on to the next account.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Upstream returned HTTP {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Configuration(_) => "configuration",
            AppError::Auth(_) => "auth",
            AppError::AccessDenied(_) => "access_denied",
            AppError::MalformedResponse(_) => "malformed_response",
            AppError::Transport(_) => "transport",
            AppError::UpstreamStatus { .. } => "upstream_status",
            AppError::Database(_) => "database",
            AppError::Internal(_) => "internal",
        }
    }

    /// Credential problems. Retried like transient errors, but logged apart
    /// since they usually need a new token.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, AppError::Auth(_) | AppError::AccessDenied(_))
    }

    /// Whether another fetch attempt may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::Auth(_)
                | AppError::AccessDenied(_)
                | AppError::MalformedResponse(_)
                | AppError::Transport(_)
                | AppError::UpstreamStatus { .. }
        )
    }
}

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, AppError>;
