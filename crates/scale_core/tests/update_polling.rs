use scale_core::{
    update, AppState, CatalogStatus, Effect, Msg, Product, Telemetry, NO_DETECTION,
};

fn product(code: i64, name: &str, price_per_kg: f64) -> Product {
    Product {
        code,
        name: name.to_string(),
        price_per_kg,
        image_path: String::new(),
    }
}

fn received(state: AppState, weight_kg: f64, label: Option<&str>) -> AppState {
    let telemetry = Telemetry::new(weight_kg, label.map(ToOwned::to_owned));
    update(state, Msg::TelemetryReceived(telemetry)).0
}

#[test]
fn start_loads_catalog_once() {
    let (state, effects) = update(AppState::new(), Msg::Started);
    assert_eq!(effects, vec![Effect::LoadCatalog]);

    let (_state, effects) = update(state, Msg::Started);
    assert!(effects.is_empty());
}

#[test]
fn every_tick_polls_with_client_id() {
    let state = AppState::with_client_id(Some("kasir-01".to_string()));
    let expected = Effect::PollTelemetry {
        client_id: Some("kasir-01".to_string()),
    };

    let (state, first) = update(state, Msg::PollTick);
    // No response yet; the next tick still fires its own request.
    let (_state, second) = update(state, Msg::PollTick);

    assert_eq!(first, vec![expected.clone()]);
    assert_eq!(second, vec![expected]);
}

#[test]
fn missing_client_id_polls_with_none() {
    let (_state, effects) = update(AppState::new(), Msg::PollTick);
    assert_eq!(effects, vec![Effect::PollTelemetry { client_id: None }]);
}

#[test]
fn failed_poll_keeps_previous_values() {
    let (state, _) = update(AppState::new(), Msg::CatalogLoaded(vec![product(1, "Apel", 20000.0)]));
    let mut state = received(state, 0.75, Some("Apel"));
    let before = state.view();
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::TelemetryFailed);

    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    let after = state.view();
    assert_eq!(after.weight_kg, 0.75);
    assert_eq!(after.detection, "Apel");
    assert_eq!(after.total_price, 15000);
    assert_eq!(after.total_price, before.total_price);
}

#[test]
fn latest_completion_wins() {
    let (state, _) = update(AppState::new(), Msg::CatalogLoaded(vec![product(1, "Apel", 10000.0)]));
    // Responses to two overlapping ticks arrive out of order.
    let state = received(state, 2.0, Some("Apel"));
    let state = received(state, 1.0, Some("Apel"));

    assert_eq!(state.view().weight_kg, 1.0);
    assert_eq!(state.view().total_price, 10000);
}

#[test]
fn absent_detection_displays_placeholder() {
    let state = received(AppState::new(), 0.0, None);
    let view = state.view();
    assert_eq!(view.detection, NO_DETECTION);
    assert_eq!(view.product_name, None);
    assert_eq!(view.total_price, 0);
}

#[test]
fn late_catalog_reprices_current_reading() {
    let state = received(AppState::new(), 0.5, Some("jeruk"));
    assert_eq!(state.view().product_name, None);

    let (state, _) = update(state, Msg::CatalogLoaded(vec![product(2, "Jeruk", 18000.0)]));

    let view = state.view();
    assert_eq!(view.catalog_status, CatalogStatus::Loaded);
    assert_eq!(view.product_name.as_deref(), Some("Jeruk"));
    assert_eq!(view.total_price, 9000);
}

#[test]
fn catalog_is_not_replaced_after_load() {
    let (state, _) = update(AppState::new(), Msg::CatalogLoaded(vec![product(1, "Apel", 1.0)]));
    let (state, _) = update(state, Msg::CatalogLoaded(vec![]));
    let (state, _) = update(state, Msg::CatalogFailed);

    assert_eq!(state.catalog().len(), 1);
    assert_eq!(state.catalog_status(), CatalogStatus::Loaded);
}

#[test]
fn catalog_failure_leaves_empty_catalog_and_keeps_polling() {
    let (state, _) = update(AppState::new(), Msg::CatalogFailed);
    assert_eq!(state.catalog_status(), CatalogStatus::Failed);
    assert!(state.catalog().is_empty());

    let (state, effects) = update(state, Msg::PollTick);
    assert_eq!(effects.len(), 1);
    let state = received(state, 1.0, Some("Apel"));
    assert_eq!(state.view().weight_kg, 1.0);
    assert_eq!(state.view().product_name, None);
}

#[test]
fn shutdown_stops_polling_and_ignores_late_results() {
    let (state, effects) = update(AppState::new(), Msg::Shutdown);
    assert_eq!(effects, vec![Effect::StopPolling]);
    assert!(state.is_closed());

    let (state, effects) = update(state, Msg::PollTick);
    assert!(effects.is_empty());
    let state = received(state, 4.0, Some("Apel"));
    assert_eq!(state.view().weight_kg, 0.0);

    let (_state, effects) = update(state, Msg::Shutdown);
    assert!(effects.is_empty());
}
