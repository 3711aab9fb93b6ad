use std::sync::{mpsc, Arc};
use std::thread;

use scale_core::CommitRequest;
use scale_logging::scale_debug;

use crate::{Backend, EngineError, EngineEvent};

/// Receives engine completions, typically forwarding them into the UI loop.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

enum EngineCommand {
    LoadCatalog,
    PollStatus {
        client_id: Option<String>,
    },
    SubmitCommit {
        request: CommitRequest,
        token: Option<String>,
    },
}

/// Runs backend round-trips on a private tokio runtime.
///
/// Every command becomes its own task, so a slow poll never delays the next
/// one. Dropping the handle stops the runtime and abandons in-flight requests.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(backend: Arc<dyn Backend>, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .map_err(EngineError::Runtime)?;

        thread::Builder::new()
            .name("scale-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let backend = backend.clone();
                    let sink = sink.clone();
                    runtime.spawn(async move {
                        let event = handle_command(backend.as_ref(), command).await;
                        sink.emit(event);
                    });
                }
                scale_debug!("Engine command channel closed; stopping runtime");
            })
            .map_err(EngineError::Thread)?;

        Ok(Self { cmd_tx })
    }

    pub fn load_catalog(&self) {
        self.send(EngineCommand::LoadCatalog);
    }

    pub fn poll_status(&self, client_id: Option<String>) {
        self.send(EngineCommand::PollStatus { client_id });
    }

    pub fn submit_commit(&self, request: CommitRequest, token: Option<String>) {
        self.send(EngineCommand::SubmitCommit { request, token });
    }

    fn send(&self, command: EngineCommand) {
        // The worker only goes away after the handle is dropped.
        let _ = self.cmd_tx.send(command);
    }
}

async fn handle_command(backend: &dyn Backend, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::LoadCatalog => EngineEvent::CatalogFetched(backend.fetch_catalog().await),
        EngineCommand::PollStatus { client_id } => {
            EngineEvent::TelemetryFetched(backend.poll_status(client_id.as_deref()).await)
        }
        EngineCommand::SubmitCommit { request, token } => EngineEvent::CommitFinished(
            backend.submit_commit(&request, token.as_deref()).await,
        ),
    }
}
