use crate::{Product, Telemetry};

/// What came back from a commit submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitReply {
    /// The backend answered; carries its raw `status` text (empty if missing).
    Responded(String),
    /// No response: network error, timeout or refused connection.
    Unreachable,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Controller started; triggers the one-shot catalog load.
    Started,
    /// Catalog fetch succeeded.
    CatalogLoaded(Vec<Product>),
    /// Catalog fetch failed; the catalog stays empty.
    CatalogFailed,
    /// Poll timer fired.
    PollTick,
    /// A telemetry round-trip completed.
    TelemetryReceived(Telemetry),
    /// A telemetry round-trip failed; displayed values stay as they are.
    TelemetryFailed,
    /// Operator pressed the save & print action.
    CommitClicked,
    /// The in-flight commit finished.
    CommitCompleted(CommitReply),
    /// Operator closed the notification.
    NotificationDismissed,
    /// View closed; polling stops permanently.
    Shutdown,
}
