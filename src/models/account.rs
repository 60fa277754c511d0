//! Tracked account configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One entry of the accounts file, as written by the operator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Display name (used only for logging)
    #[serde(default)]
    pub name: Option<String>,
    /// Bearer token for the indexer API
    #[serde(default)]
    pub jwt_token: Option<String>,
    /// Bless user ID (document key)
    #[serde(default)]
    pub user_id: Option<String>,
    /// Node public key
    #[serde(default)]
    pub pubkey: Option<String>,
}

impl AccountConfig {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or("Unknown")
    }

    /// Check that the token, user ID and pubkey are all present.
    ///
    /// Blank strings count as missing.
    pub fn validate(&self) -> Result<AccountIdentity, AppError> {
        let token = present(&self.jwt_token);
        let user_id = present(&self.user_id);
        let pubkey = present(&self.pubkey);

        match (token, user_id, pubkey) {
            (Some(token), Some(user_id), Some(pubkey)) => Ok(AccountIdentity {
                name: self.display_name().to_string(),
                token: token.to_string(),
                user_id: user_id.to_string(),
                pubkey: pubkey.to_string(),
            }),
            (token, user_id, pubkey) => {
                let missing: Vec<&str> = [
                    ("jwt_token", token.is_none()),
                    ("user_id", user_id.is_none()),
                    ("pubkey", pubkey.is_none()),
                ]
                .into_iter()
                .filter_map(|(field, is_missing)| is_missing.then_some(field))
                .collect();

                Err(AppError::Configuration(format!(
                    "account '{}' is missing {}",
                    self.display_name(),
                    missing.join(", ")
                )))
            }
        }
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// A validated account, ready to be fetched and persisted.
#[derive(Clone)]
pub struct AccountIdentity {
    pub name: String,
    pub token: String,
    pub user_id: String,
    pub pubkey: String,
}

impl std::fmt::Debug for AccountIdentity {
    // Keep bearer tokens out of logs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountIdentity")
            .field("name", &self.name)
            .field("user_id", &self.user_id)
            .field("pubkey", &self.pubkey)
            .finish_non_exhaustive()
    }
}
