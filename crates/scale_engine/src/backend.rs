use reqwest::header::AUTHORIZATION;
use reqwest::Url;
use scale_core::{CommitRequest, Product, Telemetry};
use scale_logging::{scale_debug, scale_warn};

use crate::wire::{CommitPayload, CommitReplyBody, ProductRecord, StatusReply, StatusRequest};
use crate::{BackendConfig, BackendError, FailureKind};

const CATALOG_PATH: &str = "api/produk";
const STATUS_PATH: &str = "api/status";
const COMMIT_PATH: &str = "cetak";

/// The three round-trips the terminal makes against the scale backend.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    async fn fetch_catalog(&self) -> Result<Vec<Product>, BackendError>;

    async fn poll_status(&self, client_id: Option<&str>) -> Result<Telemetry, BackendError>;

    /// Submits a transaction. Any response counts as `Ok` with its raw status
    /// text; only transport failures are errors.
    async fn submit_commit(
        &self,
        request: &CommitRequest,
        token: Option<&str>,
    ) -> Result<String, BackendError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    base: Url,
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let mut base = Url::parse(&config.base_url)
            .map_err(|err| BackendError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let mut builder = reqwest::Client::builder().connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| BackendError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self { base, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url, BackendError> {
        self.base
            .join(path)
            .map_err(|err| BackendError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Backend for ReqwestBackend {
    async fn fetch_catalog(&self) -> Result<Vec<Product>, BackendError> {
        let response = self
            .client
            .get(self.endpoint(CATALOG_PATH)?)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let records: Vec<ProductRecord> = ensure_success(response)?
            .json()
            .await
            .map_err(map_reqwest_error)?;

        let mut products = Vec::with_capacity(records.len());
        for record in records {
            match record.into_product() {
                Ok(product) => products.push(product),
                Err(reason) => scale_warn!("Skipping catalog entry: {}", reason),
            }
        }
        Ok(products)
    }

    async fn poll_status(&self, client_id: Option<&str>) -> Result<Telemetry, BackendError> {
        let response = self
            .client
            .post(self.endpoint(STATUS_PATH)?)
            .json(&StatusRequest { client_id })
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let reply: StatusReply = ensure_success(response)?
            .json()
            .await
            .map_err(map_reqwest_error)?;
        Ok(reply.into_telemetry())
    }

    async fn submit_commit(
        &self,
        request: &CommitRequest,
        token: Option<&str>,
    ) -> Result<String, BackendError> {
        let mut builder = self
            .client
            .post(self.endpoint(COMMIT_PATH)?)
            .json(&CommitPayload::from(request));
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let http_status = response.status();
        let body = response.text().await.map_err(map_reqwest_error)?;
        scale_debug!("Commit answered with http status {}", http_status);

        match serde_json::from_str::<CommitReplyBody>(&body) {
            Ok(reply) => Ok(reply.status_text()),
            Err(err) => {
                scale_warn!(
                    "Commit reply (http {}) is not valid JSON: {}",
                    http_status,
                    err
                );
                Ok(String::new())
            }
        }
    }
}

fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(BackendError::new(
            FailureKind::HttpStatus(status.as_u16()),
            status.to_string(),
        ))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        return BackendError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return BackendError::new(FailureKind::Decode, err.to_string());
    }
    BackendError::new(FailureKind::Network, err.to_string())
}
