// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Accounts file loading.
//!
//! The file is read once at startup:
//!
//! ```json
//! { "tokens": [ { "name": "...", "jwt_token": "...", "user_id": "...", "pubkey": "..." } ] }
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::AccountConfig;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AccountsFile {
    #[serde(default)]
    pub tokens: Vec<AccountConfig>,
}

/// Load the tracked accounts.
///
/// A missing file is replaced by a template for the operator to fill in and
/// yields an empty list.
pub fn load_accounts<P: AsRef<Path>>(path: P) -> Result<Vec<AccountConfig>, AppError> {
    let path = path.as_ref();

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::error!(path = %path.display(), "Accounts file not found, creating template");
            write_template(path)?;
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(AppError::Configuration(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )))
        }
    };

    let file: AccountsFile = serde_json::from_str(&contents).map_err(|e| {
        AppError::Configuration(format!("Failed to parse {}: {}", path.display(), e))
    })?;

    tracing::info!(path = %path.display(), count = file.tokens.len(), "Loaded accounts");
    Ok(file.tokens)
}

/// Write an example accounts file.
pub fn write_template(path: &Path) -> Result<(), AppError> {
    let template = AccountsFile {
        tokens: vec![AccountConfig {
            name: Some("Account 1".to_string()),
            jwt_token: Some("YOUR_JWT_TOKEN_HERE".to_string()),
            user_id: Some("YOUR_USER_ID_HERE".to_string()),
            pubkey: Some("YOUR_PUBKEY_HERE".to_string()),
        }],
    };

    let json = serde_json::to_string_pretty(&template)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("JSON error: {}", e)))?;
    fs::write(path, json).map_err(|e| {
        AppError::Configuration(format!("Failed to write template {}: {}", path.display(), e))
    })?;

    tracing::info!(path = %path.display(), "Created accounts template");
    Ok(())
}
