use crate::{
    AppState, CommitOutcome, CommitReply, CommitRequest, CommitState, Effect, Msg,
    NOT_READY_MESSAGE, UNREACHABLE_MESSAGE,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    if state.is_closed() {
        // Late results after teardown have nowhere to go.
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::Started => {
            if state.request_catalog() {
                vec![Effect::LoadCatalog]
            } else {
                Vec::new()
            }
        }
        Msg::CatalogLoaded(products) => {
            state.install_catalog(products);
            Vec::new()
        }
        Msg::CatalogFailed => {
            state.fail_catalog();
            Vec::new()
        }
        Msg::PollTick => vec![Effect::PollTelemetry {
            client_id: state.client_id().map(ToOwned::to_owned),
        }],
        Msg::TelemetryReceived(telemetry) => {
            state.apply_telemetry(telemetry);
            Vec::new()
        }
        Msg::TelemetryFailed => Vec::new(),
        Msg::CommitClicked => match state.commit_state() {
            CommitState::Committing => Vec::new(),
            CommitState::Idle => start_commit(&mut state),
        },
        Msg::CommitCompleted(reply) => {
            if state.commit_state() != CommitState::Committing {
                return (state, Vec::new());
            }
            let outcome = match reply {
                CommitReply::Responded(status) => state.classifier().classify(&status),
                CommitReply::Unreachable => CommitOutcome::Error(UNREACHABLE_MESSAGE.to_string()),
            };
            state.finish_commit();
            state.show_notification(outcome.clone());
            vec![Effect::Notify(outcome)]
        }
        Msg::NotificationDismissed => {
            state.dismiss_notification();
            Vec::new()
        }
        Msg::Shutdown => {
            state.close();
            vec![Effect::StopPolling]
        }
    };

    (state, effects)
}

fn start_commit(state: &mut AppState) -> Vec<Effect> {
    let reading = state.reading();
    let request = reading
        .matched_product
        .as_ref()
        .filter(|_| reading.is_committable())
        .map(|product| CommitRequest {
            product_name: product.name.clone(),
            weight_kg: reading.telemetry.weight_kg,
            price_per_kg: product.price_per_kg,
            total_price: reading.total_price,
        });

    match request {
        Some(request) => {
            state.begin_commit();
            vec![Effect::SubmitCommit(request)]
        }
        None => {
            let outcome = CommitOutcome::Warning(NOT_READY_MESSAGE.to_string());
            state.show_notification(outcome.clone());
            vec![Effect::Notify(outcome)]
        }
    }
}
