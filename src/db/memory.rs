// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process document store.
//!
//! Documents are kept as JSON values under the same IDs Firestore would use,
//! so replace-by-key behaves identically.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::db::{daily_doc_id, summary_doc_id, UpsertOutcome, UptimeStore};
use crate::error::AppError;
use crate::models::uptime::SUMMARY_TYPE;
use crate::models::{DailyDocument, SummaryDocument};

#[derive(Default)]
pub struct MemoryStore {
    docs: Mutex<BTreeMap<String, serde_json::Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents of any type.
    pub fn len(&self) -> usize {
        self.docs.lock().map(|docs| docs.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw stored value for a document ID.
    pub fn raw(&self, doc_id: &str) -> Option<serde_json::Value> {
        self.docs.lock().ok()?.get(doc_id).cloned()
    }

    fn put<T: Serialize>(&self, doc_id: String, doc: &T) -> Result<UpsertOutcome, AppError> {
        let value = serde_json::to_value(doc)
            .map_err(|e| AppError::Database(format!("Failed to encode {}: {}", doc_id, e)))?;
        let mut docs = self.lock()?;
        let existed = docs.insert(doc_id, value).is_some();
        Ok(UpsertOutcome::from_existed(existed))
    }

    fn get<T: DeserializeOwned>(&self, doc_id: &str) -> Result<Option<T>, AppError> {
        self.lock()?
            .get(doc_id)
            .map(|value| {
                serde_json::from_value(value.clone())
                    .map_err(|e| AppError::Database(format!("Failed to decode {}: {}", doc_id, e)))
            })
            .transpose()
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, serde_json::Value>>, AppError> {
        self.docs
            .lock()
            .map_err(|_| AppError::Database("memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl UptimeStore for MemoryStore {
    async fn upsert_summary(
        &self,
        user_id: &str,
        doc: &SummaryDocument,
    ) -> Result<UpsertOutcome, AppError> {
        self.put(summary_doc_id(user_id), doc)
    }

    async fn upsert_daily(
        &self,
        user_id: &str,
        date: &str,
        doc: &DailyDocument,
    ) -> Result<UpsertOutcome, AppError> {
        self.put(daily_doc_id(user_id, date), doc)
    }

    async fn get_summary(&self, user_id: &str) -> Result<Option<SummaryDocument>, AppError> {
        self.get(&summary_doc_id(user_id))
    }

    async fn get_daily(
        &self,
        user_id: &str,
        date: &str,
    ) -> Result<Option<DailyDocument>, AppError> {
        self.get(&daily_doc_id(user_id, date))
    }

    async fn list_summaries(&self) -> Result<Vec<SummaryDocument>, AppError> {
        self.lock()?
            .iter()
            .filter(|(_, value)| value.get("type").and_then(|t| t.as_str()) == Some(SUMMARY_TYPE))
            .map(|(doc_id, value)| {
                serde_json::from_value(value.clone())
                    .map_err(|e| AppError::Database(format!("Failed to decode {}: {}", doc_id, e)))
            })
            .collect()
    }
}
