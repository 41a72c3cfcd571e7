//! Persistence for survey responses.

use api::SubmissionRecord;
use async_trait::async_trait;
use thiserror::Error;

mod memory;
pub use memory::MemoryStore;

mod supabase;
pub use supabase::SupabaseStore;

/// Table holding one row per submitted survey.
pub const TABLE: &str = "survey_responses";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Request to store failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Store responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Insert failed")]
    InsertFailed,

    #[error("Invalid store configuration: {0}")]
    Config(String),
}

#[async_trait]
pub trait ResponseStore: Send + Sync {
    /// Persist a new row and return it as stored (with `id` and `created_at`).
    async fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, StoreError>;

    async fn all(&self) -> Result<Vec<SubmissionRecord>, StoreError>;

    async fn get(&self, id: i64) -> Result<Option<SubmissionRecord>, StoreError>;
}
