use serde::Deserialize;

/// Success body of `POST /ingest-url/`. The backend sends extra fields
/// (`result` and friends); only the confirmation text matters here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IngestReceipt {
    #[serde(default)]
    pub message: Option<String>,
}

/// Success body of `POST /ask-question/`. The question echo is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AskReply {
    #[serde(default)]
    pub answer: Option<String>,
}

/// Failure body shared by all three endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorReply {
    #[serde(default)]
    pub(crate) detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The configured base endpoint could not be turned into a request URL.
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    /// The backend answered with a non-2xx status. `detail` is taken from
    /// the response body, or synthesized from the status code when the body
    /// is missing, non-JSON, or has no detail field.
    #[error("{detail}")]
    Backend { status: u16, detail: String },
    /// The request timed out before a response arrived.
    #[error("request timed out")]
    Timeout,
    /// The request never completed (DNS, connection refused, reset).
    #[error("{0}")]
    Transport(String),
}

/// One request for the gateway worker to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCommand {
    Ingest { url: String, max_depth: u32 },
    Ask { question: String },
    Reset,
}

/// Completion of a previously submitted command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayEvent {
    IngestFinished(Result<IngestReceipt, GatewayError>),
    AskFinished(Result<AskReply, GatewayError>),
    ResetFinished(Result<(), GatewayError>),
}
