use api::SubmissionRecord;
use async_trait::async_trait;
use reqwest::{header, Client, RequestBuilder, Response};

use super::{ResponseStore, StoreError, TABLE};
use crate::config::SupabaseConfig;

/// Supabase table access over its PostgREST interface.
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    http: Client,
    table_url: String,
    key: String,
}

impl SupabaseStore {
    pub fn new(config: &SupabaseConfig) -> Result<Self, StoreError> {
        let base = config.url.trim_end_matches('/');
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(StoreError::Config(format!("SUPABASE_URL must be an http(s) URL, got {base:?}")));
        }

        Ok(Self {
            http: Client::new(),
            table_url: format!("{base}/rest/v1/{TABLE}"),
            key: config.key.clone(),
        })
    }

    pub fn table_url(&self) -> &str {
        &self.table_url
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.key)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.key))
    }

    async fn rows(&self, request: RequestBuilder) -> Result<Vec<SubmissionRecord>, StoreError> {
        let response = self.authorized(request).send().await?;
        Ok(ensure_success(response).await?.json().await?)
    }
}

async fn ensure_success(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(StoreError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl ResponseStore for SupabaseStore {
    async fn insert(&self, record: SubmissionRecord) -> Result<SubmissionRecord, StoreError> {
        let request = self
            .http
            .post(&self.table_url)
            .header("Prefer", "return=representation")
            .json(&record);

        self.rows(request)
            .await?
            .into_iter()
            .next()
            .ok_or(StoreError::InsertFailed)
    }

    async fn all(&self) -> Result<Vec<SubmissionRecord>, StoreError> {
        let request = self.http.get(&self.table_url).query(&[("select", "*")]);
        self.rows(request).await
    }

    async fn get(&self, id: i64) -> Result<Option<SubmissionRecord>, StoreError> {
        let request = self
            .http
            .get(&self.table_url)
            .query(&[("select", "*".to_string()), ("id", format!("eq.{id}"))]);
        Ok(self.rows(request).await?.into_iter().next())
    }
}
