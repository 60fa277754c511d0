// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Summary and daily uptime documents live in one collection. Their document
//! IDs are derived from the logical key, and Firestore guarantees ID
//! uniqueness within a collection, so a retried or repeated write can only
//! ever replace the document for its key.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::db::{collections, daily_doc_id, summary_doc_id, UpsertOutcome, UptimeStore};
use crate::error::AppError;
use crate::models::uptime::SUMMARY_TYPE;
use crate::models::{DailyDocument, SummaryDocument};

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // The emulator accepts any token, so skip loading real credentials.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a disconnected client (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    /// Check whether a document exists, without decoding its body.
    async fn exists(&self, doc_id: &str) -> Result<bool, AppError> {
        let doc = self
            .get_client()?
            .fluent()
            .select()
            .by_id_in(collections::UPTIME)
            .one(doc_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to read {}: {}", doc_id, e)))?;
        Ok(doc.is_some())
    }

    /// Write `doc` under `doc_id`, replacing every field of any existing
    /// document.
    async fn replace_document<T>(&self, doc_id: &str, doc: &T) -> Result<UpsertOutcome, AppError>
    where
        T: Serialize + DeserializeOwned + Sync + Send,
    {
        let existed = self.exists(doc_id).await?;

        // No update mask: Firestore overwrites the whole document.
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::UPTIME)
            .document_id(doc_id)
            .object(doc)
            .execute()
            .await
            .map_err(|e| AppError::Database(format!("Failed to write {}: {}", doc_id, e)))?;

        Ok(UpsertOutcome::from_existed(existed))
    }

    /// Close the underlying connection.
    pub fn close(self) {
        if self.client.is_some() {
            tracing::info!("Closing Firestore connection");
        }
    }
}

#[async_trait]
impl UptimeStore for FirestoreDb {
    async fn upsert_summary(
        &self,
        user_id: &str,
        doc: &SummaryDocument,
    ) -> Result<UpsertOutcome, AppError> {
        self.replace_document(&summary_doc_id(user_id), doc).await
    }

    async fn upsert_daily(
        &self,
        user_id: &str,
        date: &str,
        doc: &DailyDocument,
    ) -> Result<UpsertOutcome, AppError> {
        self.replace_document(&daily_doc_id(user_id, date), doc)
            .await
    }

    async fn get_summary(&self, user_id: &str) -> Result<Option<SummaryDocument>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::UPTIME)
            .obj()
            .one(&summary_doc_id(user_id))
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn get_daily(
        &self,
        user_id: &str,
        date: &str,
    ) -> Result<Option<DailyDocument>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::UPTIME)
            .obj()
            .one(&daily_doc_id(user_id, date))
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn list_summaries(&self) -> Result<Vec<SummaryDocument>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::UPTIME)
            .filter(|q| q.for_all([q.field("type").eq(SUMMARY_TYPE)]))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}
