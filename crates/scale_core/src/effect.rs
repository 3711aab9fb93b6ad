/// Transaction submitted to the backend when the operator commits.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitRequest {
    pub product_name: String,
    pub weight_kg: f64,
    pub price_per_kg: f64,
    pub total_price: u64,
}

/// Work the platform must perform on behalf of `update`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// One-shot catalog fetch at startup.
    LoadCatalog,
    /// One telemetry round-trip; each tick issues its own, never chained.
    PollTelemetry { client_id: Option<String> },
    /// Submit the transaction. The platform attaches the bearer credential.
    SubmitCommit(CommitRequest),
    /// Hand the outcome to the notification sink.
    Notify(crate::CommitOutcome),
    /// Stop the repeating poll timer for good.
    StopPolling,
}
