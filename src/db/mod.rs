//! Database layer.
//!
//! `UptimeStore` is the persistence seam used by the account processor.
//! `FirestoreDb` is the production store and `MemoryStore` an in-process one
//! with the same replace-by-key semantics.

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::uptime::{DAILY_UPTIME_TYPE, SUMMARY_TYPE};
use crate::models::{DailyDocument, SummaryDocument};

/// Collection names as constants.
pub mod collections {
    /// Summary and daily uptime documents, told apart by `type`
    pub const UPTIME: &str = "bless_uptime_tracker";
}

/// Whether an upsert created the document or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

impl UpsertOutcome {
    pub fn from_existed(existed: bool) -> Self {
        if existed {
            UpsertOutcome::Updated
        } else {
            UpsertOutcome::Created
        }
    }
}

/// Idempotent document storage keyed by (type, user_id[, date]).
///
/// Every upsert replaces the whole stored document; there is no field-level
/// merge.
#[async_trait]
pub trait UptimeStore: Send + Sync {
    async fn upsert_summary(
        &self,
        user_id: &str,
        doc: &SummaryDocument,
    ) -> Result<UpsertOutcome, AppError>;

    async fn upsert_daily(
        &self,
        user_id: &str,
        date: &str,
        doc: &DailyDocument,
    ) -> Result<UpsertOutcome, AppError>;

    async fn get_summary(&self, user_id: &str) -> Result<Option<SummaryDocument>, AppError>;

    async fn get_daily(&self, user_id: &str, date: &str)
        -> Result<Option<DailyDocument>, AppError>;

    /// All summary documents, in no particular order.
    async fn list_summaries(&self) -> Result<Vec<SummaryDocument>, AppError>;
}

/// Document ID for an account summary.
pub fn summary_doc_id(user_id: &str) -> String {
    format!("{}_{}", SUMMARY_TYPE, encode_key_part(user_id))
}

/// Document ID for one account/day.
pub fn daily_doc_id(user_id: &str, date: &str) -> String {
    format!(
        "{}_{}_{}",
        DAILY_UPTIME_TYPE,
        encode_key_part(user_id),
        encode_key_part(date)
    )
}

/// Percent-encode one ID component, including the '_' separator that
/// `urlencoding` treats as unreserved.
fn encode_key_part(part: &str) -> String {
    urlencoding::encode(part).replace('_', "%5F")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doc_ids_are_deterministic() {
        assert_eq!(summary_doc_id("abc"), "summary_abc");
        assert_eq!(
            daily_doc_id("abc", "2025-01-02"),
            "daily_uptime_abc_2025-01-02"
        );
    }

    #[test]
    fn test_doc_ids_escape_separators() {
        assert_eq!(daily_doc_id("a/b", "d"), "daily_uptime_a%2Fb_d");
        assert_eq!(daily_doc_id("a_b", "c"), "daily_uptime_a%5Fb_c");
        assert_ne!(daily_doc_id("a_b", "c"), daily_doc_id("a", "b_c"));
        assert_ne!(summary_doc_id("a_b"), summary_doc_id("a%5Fb"));
    }
}
