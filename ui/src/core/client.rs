//! HTTP transport for the survey endpoints.
//!
//! Every call is a single attempt. Failures are returned to the caller, which
//! surfaces them to the user; nothing here retries or times out.

use api::{endpoints, AdminData, ErrorBody, SubmissionRecord, SurveyResponse};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::platform;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response.
    #[error("{0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// A 2xx body could not be decoded.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Text shown in the blocking alert after a failed submission.
    pub fn submission_alert(&self) -> String {
        match self {
            ClientError::Network(reason) => format!("Network error: {reason}"),
            ClientError::Http { message, .. } => format!("Error: {message}"),
            ClientError::Decode(reason) => format!("Error: {reason}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(platform::api_base())
    }
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            base,
            http: reqwest::Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    pub fn export_url(&self) -> String {
        self.url(endpoints::ADMIN_EXPORT)
    }

    pub async fn submit_survey(&self, response: &SurveyResponse) -> Result<(), ClientError> {
        let reply = self
            .http
            .post(self.url(endpoints::SUBMIT_SURVEY))
            .json(response)
            .send()
            .await
            .map_err(|err| ClientError::Network(err.to_string()))?;

        ensure_success(reply).await.map(|_| ())
    }

    pub async fn admin_data(&self) -> Result<AdminData, ClientError> {
        self.get_json(endpoints::ADMIN_DATA).await
    }

    pub async fn admin_response(&self, id: i64) -> Result<SubmissionRecord, ClientError> {
        self.get_json(&endpoints::admin_response(id)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let reply = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|err| ClientError::Network(err.to_string()))?;

        ensure_success(reply)
            .await?
            .json::<T>()
            .await
            .map_err(|err| ClientError::Decode(err.to_string()))
    }
}

async fn ensure_success(reply: Response) -> Result<Response, ClientError> {
    let status = reply.status();
    if status.is_success() {
        return Ok(reply);
    }

    let body = reply.text().await.unwrap_or_default();
    Err(ClientError::Http {
        status: status.as_u16(),
        message: error_message(status, &body),
    })
}

/// Server-provided `error` text, falling back to the status reason.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|parsed| parsed.error)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
        })
}
