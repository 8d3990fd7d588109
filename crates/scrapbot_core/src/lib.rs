//! Scrapbot core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{AskOutcome, IngestOutcome, Msg};
pub use state::{AppState, Operation, DEFAULT_MAX_DEPTH, NO_ANSWER_PLACEHOLDER};
pub use update::update;
pub use view_model::{AppViewModel, Toast, ToastKind};
