use crate::view_model::{AppViewModel, Toast, ToastKind};

/// Crawl depth used when the user has not picked one.
pub const DEFAULT_MAX_DEPTH: u32 = 1;

/// Answer text displayed when the backend returns an empty or missing answer.
pub const NO_ANSWER_PLACEHOLDER: &str = "No answer found.";

/// The three backend operations the client can have in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Ingest,
    Ask,
    Reset,
}

impl Operation {
    /// Phase prefix prepended to failure text for this operation.
    pub fn failure_prefix(self) -> &'static str {
        match self {
            Operation::Ingest => "Ingestion failed",
            Operation::Ask => "Asking question failed",
            Operation::Reset => "Reset failed",
        }
    }
}

/// Full client state: input slots plus the transient per-operation slots.
///
/// Invariant: at most one operation is in flight at a time; submissions
/// while `in_flight` is set are no-ops in [`crate::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    url: String,
    max_depth: u32,
    question: String,
    answer: Option<String>,
    error: Option<String>,
    in_flight: Option<Operation>,
    toasts: Vec<Toast>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            question: String::new(),
            answer: None,
            error: None,
            in_flight: None,
            toasts: Vec::new(),
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State seeded with initial input values (e.g. from a config file).
    pub fn with_inputs(url: impl Into<String>, max_depth: u32, question: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_depth,
            question: question.into(),
            ..Self::default()
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            url: self.url.clone(),
            max_depth: self.max_depth,
            question: self.question.clone(),
            answer: self.answer.clone(),
            error: self.error.clone(),
            in_flight: self.in_flight,
            loading: self.in_flight.is_some(),
            dirty: self.dirty,
        }
    }

    /// Drains the pending toast queue in arrival order.
    pub fn take_toasts(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }

    /// Returns whether a render is due, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub(crate) fn question(&self) -> &str {
        &self.question
    }

    pub(crate) fn in_flight(&self) -> Option<Operation> {
        self.in_flight
    }

    pub(crate) fn set_url(&mut self, url: String) {
        self.url = url;
        self.dirty = true;
    }

    pub(crate) fn set_max_depth(&mut self, max_depth: u32) {
        self.max_depth = max_depth;
        self.dirty = true;
    }

    pub(crate) fn set_question(&mut self, question: String) {
        self.question = question;
        self.dirty = true;
    }

    /// Marks an operation as started: clears the error slot and the
    /// displayed answer, then sets the loading marker.
    pub(crate) fn begin(&mut self, op: Operation) {
        self.error = None;
        self.answer = None;
        self.in_flight = Some(op);
        self.dirty = true;
    }

    pub(crate) fn finish(&mut self) {
        self.in_flight = None;
        self.dirty = true;
    }

    pub(crate) fn set_answer(&mut self, answer: String) {
        self.answer = Some(answer);
        self.dirty = true;
    }

    pub(crate) fn set_error(&mut self, text: String) {
        self.error = Some(text);
        self.dirty = true;
    }

    pub(crate) fn push_toast(&mut self, kind: ToastKind, text: String) {
        self.toasts.push(Toast { kind, text });
        self.dirty = true;
    }

    /// Records an operation failure on both surfaces: the persistent error
    /// banner and a transient toast, with the operation's phase prefix.
    pub(crate) fn report_failure(&mut self, op: Operation, message: &str) {
        let text = format!("{}: {}", op.failure_prefix(), message);
        self.error = Some(text.clone());
        self.toasts.push(Toast {
            kind: ToastKind::Error,
            text,
        });
        self.dirty = true;
    }
}
