// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use bless_uptime_tracker::error::AppError;

#[test]
fn test_fetch_errors_are_retryable() {
    let errors = [
        AppError::Auth("expired".to_string()),
        AppError::AccessDenied("blocked".to_string()),
        AppError::MalformedResponse("bad json".to_string()),
        AppError::Transport("timeout".to_string()),
        AppError::UpstreamStatus {
            status: 500,
            body: String::new(),
        },
    ];

    for err in errors {
        assert!(err.is_retryable(), "{err} should be retryable");
    }
}

#[test]
fn test_configuration_and_storage_errors_are_not_retryable() {
    assert!(!AppError::Configuration("missing pubkey".to_string()).is_retryable());
    assert!(!AppError::Database("offline".to_string()).is_retryable());
    assert!(!AppError::Internal(anyhow::anyhow!("boom")).is_retryable());
}

#[test]
fn test_auth_errors_are_distinguished() {
    assert!(AppError::Auth("expired".to_string()).is_auth_error());
    assert!(AppError::AccessDenied("blocked".to_string()).is_auth_error());
    assert!(!AppError::Transport("timeout".to_string()).is_auth_error());
}

#[test]
fn test_kind_labels() {
    assert_eq!(AppError::Configuration(String::new()).kind(), "configuration");
    assert_eq!(AppError::Database(String::new()).kind(), "database");
    assert_eq!(
        AppError::UpstreamStatus {
            status: 404,
            body: String::new()
        }
        .kind(),
        "upstream_status"
    );
}

#[test]
fn test_upstream_status_message() {
    let err = AppError::UpstreamStatus {
        status: 503,
        body: "maintenance".to_string(),
    };
    assert_eq!(err.to_string(), "Upstream returned HTTP 503: maintenance");
}
