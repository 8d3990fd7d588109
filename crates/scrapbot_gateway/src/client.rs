use std::time::Duration;

use client_logging::client_debug;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use url::Url;

use crate::types::ErrorReply;
use crate::{AskReply, GatewayError, IngestReceipt};

/// Backend endpoint assumed when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub base_url: String,
    /// Connect timeout; `None` leaves the HTTP stack's default in place.
    pub connect_timeout: Option<Duration>,
    /// Whole-request timeout; `None` means none is enforced by the client.
    pub request_timeout: Option<Duration>,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

impl GatewaySettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Seam between the state machine's effects and the wire. Implemented by
/// [`HttpBackend`] in production and by test doubles elsewhere.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    async fn ingest(&self, url: &str, max_depth: u32) -> Result<IngestReceipt, GatewayError>;
    async fn ask(&self, question: &str) -> Result<AskReply, GatewayError>;
    async fn reset(&self) -> Result<(), GatewayError>;
}

/// Reqwest-backed gateway client. Issues exactly one request per call and
/// never retries.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    settings: GatewaySettings,
}

impl HttpBackend {
    pub fn new(settings: GatewaySettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| GatewayError::Transport(err.to_string()))
    }

    fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        Url::parse(&self.settings.base_url)
            .and_then(|base| base.join(path))
            .map_err(|err| GatewayError::InvalidBaseUrl(err.to_string()))
    }
}

#[async_trait::async_trait]
impl Backend for HttpBackend {
    async fn ingest(&self, url: &str, max_depth: u32) -> Result<IngestReceipt, GatewayError> {
        let client = self.build_client()?;
        let endpoint = self.endpoint("/ingest-url/")?;
        client_debug!("POST {} url={} max_depth={}", endpoint, url, max_depth);

        let depth = max_depth.to_string();
        let response = client
            .post(endpoint)
            .query(&[("url", url), ("max_depth", depth.as_str())])
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        decode_reply(response).await
    }

    async fn ask(&self, question: &str) -> Result<AskReply, GatewayError> {
        let client = self.build_client()?;
        let endpoint = self.endpoint("/ask-question/")?;
        client_debug!("POST {} question={:?}", endpoint, question);

        let response = client
            .post(endpoint)
            .query(&[("question", question)])
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        decode_reply(response).await
    }

    async fn reset(&self) -> Result<(), GatewayError> {
        let client = self.build_client()?;
        let endpoint = self.endpoint("/reset-embeddings/")?;
        client_debug!("DELETE {}", endpoint);

        let response = client
            .delete(endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        // Success body is arbitrary JSON and ignored.
        check_status(response).await.map(|_| ())
    }
}

/// Reads the body and either deserializes the success payload or normalizes
/// the failure into [`GatewayError::Backend`]. A success body that is not
/// valid JSON decodes to the payload's default (all fields absent).
async fn decode_reply<T>(response: reqwest::Response) -> Result<T, GatewayError>
where
    T: DeserializeOwned + Default,
{
    let body = check_status(response).await?;
    Ok(serde_json::from_str(&body).unwrap_or_default())
}

async fn check_status(response: reqwest::Response) -> Result<String, GatewayError> {
    let status = response.status();
    let body = response.text().await.map_err(map_reqwest_error)?;
    if status.is_success() {
        return Ok(body);
    }
    Err(GatewayError::Backend {
        status: status.as_u16(),
        detail: extract_detail(&body, status.as_u16()),
    })
}

/// Pulls `detail` out of a failure body, falling back to a phrase carrying
/// the numeric status when the body is missing, non-JSON, or detail-less.
fn extract_detail(body: &str, status: u16) -> String {
    serde_json::from_str::<ErrorReply>(body)
        .ok()
        .and_then(|reply| reply.detail)
        .filter(|detail| !detail.is_empty())
        .unwrap_or_else(|| format!("HTTP error (status {status})"))
}

fn map_reqwest_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        return GatewayError::Timeout;
    }
    GatewayError::Transport(err.to_string())
}
