use std::sync::mpsc;

use scale_core::{CommitReply, Effect, Msg};
use scale_engine::{Credentials, EngineEvent, EngineHandle, EventSink};
use scale_logging::{scale_debug, scale_info, scale_warn};

use super::notify::NotificationSink;
use super::timer::PollTimer;

/// Executes effects returned by `update`.
pub struct EffectRunner<N: NotificationSink> {
    engine: EngineHandle,
    credentials: Credentials,
    timer: PollTimer,
    notifier: N,
}

impl<N: NotificationSink> EffectRunner<N> {
    pub fn new(
        engine: EngineHandle,
        credentials: Credentials,
        timer: PollTimer,
        notifier: N,
    ) -> Self {
        Self {
            engine,
            credentials,
            timer,
            notifier,
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadCatalog => {
                    scale_info!("Loading product catalog");
                    self.engine.load_catalog();
                }
                Effect::PollTelemetry { client_id } => {
                    self.engine.poll_status(client_id);
                }
                Effect::SubmitCommit(request) => {
                    scale_info!(
                        "Submitting commit product={} weight_kg={:.3} total={}",
                        request.product_name,
                        request.weight_kg,
                        request.total_price
                    );
                    // Read at commit time so a refreshed token is picked up.
                    let token = self.credentials.token();
                    self.engine.submit_commit(request, token);
                }
                Effect::Notify(outcome) => {
                    self.notifier.present(&outcome);
                }
                Effect::StopPolling => {
                    scale_info!("Stopping telemetry polling");
                    self.timer.stop();
                }
            }
        }
    }
}

/// Forwards engine completions into the UI loop as messages.
pub struct MsgSink {
    msg_tx: mpsc::Sender<Msg>,
}

impl MsgSink {
    pub fn new(msg_tx: mpsc::Sender<Msg>) -> Self {
        Self { msg_tx }
    }
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        // A closed loop means the view is gone; the result is discarded.
        let _ = self.msg_tx.send(event_to_msg(event));
    }
}

pub fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::CatalogFetched(Ok(products)) => {
            scale_info!("Catalog loaded with {} products", products.len());
            Msg::CatalogLoaded(products)
        }
        EngineEvent::CatalogFetched(Err(err)) => {
            scale_warn!("Failed to load catalog: {}", err);
            Msg::CatalogFailed
        }
        EngineEvent::TelemetryFetched(Ok(telemetry)) => {
            scale_debug!(
                "Telemetry weight_kg={} detection={}",
                telemetry.weight_kg,
                telemetry.detection_display()
            );
            Msg::TelemetryReceived(telemetry)
        }
        EngineEvent::TelemetryFetched(Err(err)) => {
            scale_warn!("Failed to update scale status: {}", err);
            Msg::TelemetryFailed
        }
        EngineEvent::CommitFinished(Ok(status)) => {
            scale_info!("Commit answered: {:?}", status);
            Msg::CommitCompleted(CommitReply::Responded(status))
        }
        EngineEvent::CommitFinished(Err(err)) => {
            scale_warn!("Commit did not reach the backend: {}", err);
            Msg::CommitCompleted(CommitReply::Unreachable)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scale_core::Telemetry;
    use scale_engine::{BackendError, FailureKind};

    fn failure() -> BackendError {
        BackendError {
            kind: FailureKind::Network,
            message: "connection refused".to_string(),
        }
    }

    #[test]
    fn failures_map_to_recovery_messages() {
        assert_eq!(
            event_to_msg(EngineEvent::CatalogFetched(Err(failure()))),
            Msg::CatalogFailed
        );
        assert_eq!(
            event_to_msg(EngineEvent::TelemetryFetched(Err(failure()))),
            Msg::TelemetryFailed
        );
        assert_eq!(
            event_to_msg(EngineEvent::CommitFinished(Err(failure()))),
            Msg::CommitCompleted(CommitReply::Unreachable)
        );
    }

    #[test]
    fn successes_carry_their_payload() {
        let telemetry = Telemetry::new(0.5, Some("Apel".to_string()));
        assert_eq!(
            event_to_msg(EngineEvent::TelemetryFetched(Ok(telemetry.clone()))),
            Msg::TelemetryReceived(telemetry)
        );
        assert_eq!(
            event_to_msg(EngineEvent::CommitFinished(Ok(String::new()))),
            Msg::CommitCompleted(CommitReply::Responded(String::new()))
        );
    }

    #[test]
    fn sink_forwards_into_channel() {
        let (tx, rx) = mpsc::channel();
        MsgSink::new(tx).emit(EngineEvent::CatalogFetched(Ok(Vec::new())));
        assert_eq!(rx.try_recv().unwrap(), Msg::CatalogLoaded(Vec::new()));
    }
}
