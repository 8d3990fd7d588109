//! Scrapbot gateway: HTTP client for the backend and effect execution.
mod client;
mod handle;
mod types;

pub use client::{Backend, GatewaySettings, HttpBackend, DEFAULT_BASE_URL};
pub use handle::GatewayHandle;
pub use types::{AskReply, GatewayCommand, GatewayError, GatewayEvent, IngestReceipt};
