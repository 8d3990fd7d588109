use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use client_logging::{client_info, client_warn};

use crate::client::{Backend, GatewaySettings, HttpBackend};
use crate::{GatewayCommand, GatewayEvent};

/// Bridge between the synchronous frontend and the async HTTP client.
///
/// Commands are executed on a private tokio runtime owned by a background
/// thread; completions come back over a channel. A submitted request runs to
/// completion even if nobody is listening; there is no cancellation.
pub struct GatewayHandle {
    cmd_tx: mpsc::Sender<GatewayCommand>,
    event_rx: mpsc::Receiver<GatewayEvent>,
}

impl GatewayHandle {
    pub fn new(settings: GatewaySettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let backend = Arc::new(HttpBackend::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let backend = backend.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(backend.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    /// Queues a command without blocking.
    pub fn submit(&self, command: GatewayCommand) {
        let _ = self.cmd_tx.send(command);
    }

    pub fn try_recv(&self) -> Option<GatewayEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Waits up to `timeout` for the next completion event.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<GatewayEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    backend: &dyn Backend,
    command: GatewayCommand,
    event_tx: mpsc::Sender<GatewayEvent>,
) {
    let event = match command {
        GatewayCommand::Ingest { url, max_depth } => {
            client_info!("ingest requested: url={} max_depth={}", url, max_depth);
            let result = backend.ingest(&url, max_depth).await;
            if let Err(err) = &result {
                client_warn!("ingest failed: {}", err);
            }
            GatewayEvent::IngestFinished(result)
        }
        GatewayCommand::Ask { question } => {
            client_info!("ask requested: question={:?}", question);
            let result = backend.ask(&question).await;
            if let Err(err) = &result {
                client_warn!("ask failed: {}", err);
            }
            GatewayEvent::AskFinished(result)
        }
        GatewayCommand::Reset => {
            client_info!("reset requested");
            let result = backend.reset().await;
            if let Err(err) = &result {
                client_warn!("reset failed: {}", err);
            }
            GatewayEvent::ResetFinished(result)
        }
    };
    let _ = event_tx.send(event);
}
