use api::SubmissionRecord;
use async_trait::async_trait;
use serde_json::{Map, Value};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tokio::sync::RwLock;

use super::{ResponseStore, StoreError};

#[derive(Debug, Default)]
struct Rows {
    next_id: i64,
    rows: Vec<SubmissionRecord>,
}

/// Process-local store used when no database is configured. Ids start at 1.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Rows>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}

#[async_trait]
impl ResponseStore for MemoryStore {
    async fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, StoreError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;

        let mut fields = Map::new();
        fields.insert("id".into(), Value::from(inner.next_id));
        fields.insert("created_at".into(), Value::from(now_rfc3339()));
        for (key, value) in record.into_inner() {
            if key != "id" && key != "created_at" {
                fields.insert(key, value);
            }
        }

        let stored = SubmissionRecord::new(fields);
        inner.rows.push(stored.clone());
        Ok(stored)
    }

    async fn all(&self) -> Result<Vec<SubmissionRecord>, StoreError> {
        Ok(self.inner.read().await.rows.clone())
    }

    async fn get(&self, id: i64) -> Result<Option<SubmissionRecord>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.iter().find(|row| row.id() == Some(id)).cloned())
    }
}
