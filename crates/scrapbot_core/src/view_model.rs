use crate::Operation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One transient notification, drained by the frontend after each render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
}

/// Render snapshot of the client state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub url: String,
    pub max_depth: u32,
    pub question: String,
    /// Currently displayed answer, if any.
    pub answer: Option<String>,
    /// Persistent error banner text; cleared when the next operation starts.
    pub error: Option<String>,
    pub in_flight: Option<Operation>,
    /// True while any operation is loading; all action triggers are
    /// disabled for its duration.
    pub loading: bool,
    pub dirty: bool,
}
