use std::time::Duration;

/// Where the backend lives and how patient the transport is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// `None` leaves the whole-request timeout to the transport default.
    pub request_timeout: Option<Duration>,
}

impl BackendConfig {
    /// Development fallback; deployments set the address explicitly.
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:4000";

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}
