/// Successful ingest payload as reported by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestOutcome {
    /// Backend-supplied confirmation text, when present.
    pub message: Option<String>,
}

/// Successful ask payload as reported by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskOutcome {
    /// Answer text from the backend; absent or empty means "no answer".
    pub answer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    UrlChanged(String),
    /// User edited the crawl depth input box.
    MaxDepthChanged(u32),
    /// User edited the question input box.
    QuestionChanged(String),
    /// User submitted the URL form for ingestion.
    IngestSubmitted,
    /// User submitted the question form.
    AskSubmitted,
    /// User clicked Reset Embeddings.
    ResetClicked,
    /// Gateway completion for an ingest request. The error carries the
    /// already-normalized failure text.
    IngestFinished(Result<IngestOutcome, String>),
    /// Gateway completion for an ask request.
    AskFinished(Result<AskOutcome, String>),
    /// Gateway completion for a reset request.
    ResetFinished(Result<(), String>),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
