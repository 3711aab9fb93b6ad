//! Scale core: pure controller state machine, catalog matching and pricing.
mod catalog;
mod effect;
mod msg;
mod outcome;
mod reading;
mod state;
mod update;
mod view_model;

pub use catalog::{Catalog, CatalogStatus, Product};
pub use effect::{CommitRequest, Effect};
pub use msg::{CommitReply, Msg};
pub use outcome::{
    sanitize_status, CommitOutcome, OutcomeKind, StatusClassifier, FALLBACK_FAILURE_MESSAGE,
    NOT_READY_MESSAGE, UNREACHABLE_MESSAGE,
};
pub use reading::{match_and_price, round_price, PricedReading, Telemetry, NO_DETECTION};
pub use state::{AppState, CommitState};
pub use update::update;
pub use view_model::{format_rupiah, format_weight, DashboardView};
