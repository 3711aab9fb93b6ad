use crate::view_model::DashboardView;
use crate::{
    match_and_price, Catalog, CatalogStatus, CommitOutcome, PricedReading, Product,
    StatusClassifier, Telemetry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitState {
    #[default]
    Idle,
    Committing,
}

/// Controller-owned state. Only `update` writes it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    client_id: Option<String>,
    catalog: Catalog,
    catalog_status: CatalogStatus,
    catalog_requested: bool,
    reading: PricedReading,
    commit: CommitState,
    notification: Option<CommitOutcome>,
    classifier: StatusClassifier,
    closed: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State for a terminal whose client identifier was resolved at startup.
    pub fn with_client_id(client_id: Option<String>) -> Self {
        Self {
            client_id,
            ..Self::default()
        }
    }

    pub fn with_classifier(mut self, classifier: StatusClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_status(&self) -> CatalogStatus {
        self.catalog_status
    }

    pub fn reading(&self) -> &PricedReading {
        &self.reading
    }

    pub fn commit_state(&self) -> CommitState {
        self.commit
    }

    pub fn notification(&self) -> Option<&CommitOutcome> {
        self.notification.as_ref()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn view(&self) -> DashboardView {
        DashboardView {
            weight_kg: self.reading.telemetry.weight_kg,
            detection: self.reading.telemetry.detection_display().to_string(),
            product_name: self
                .reading
                .matched_product
                .as_ref()
                .map(|product| product.name.clone()),
            price_per_kg: self
                .reading
                .matched_product
                .as_ref()
                .map(|product| product.price_per_kg),
            total_price: self.reading.total_price,
            commit_state: self.commit,
            commit_enabled: self.commit == CommitState::Idle && self.reading.is_committable(),
            notification: self.notification.clone(),
            catalog_status: self.catalog_status,
            catalog_size: self.catalog.len(),
        }
    }

    /// Returns whether the view changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns true only the first time; the catalog is fetched once per session.
    pub(crate) fn request_catalog(&mut self) -> bool {
        !std::mem::replace(&mut self.catalog_requested, true)
    }

    /// Installs the catalog unless one was already installed.
    pub(crate) fn install_catalog(&mut self, products: Vec<Product>) {
        if self.catalog_status != CatalogStatus::Pending {
            return;
        }
        self.catalog = Catalog::new(products);
        self.catalog_status = CatalogStatus::Loaded;
        self.reading = match_and_price(&self.reading.telemetry, &self.catalog);
        self.mark_dirty();
    }

    pub(crate) fn fail_catalog(&mut self) {
        if self.catalog_status == CatalogStatus::Pending {
            self.catalog_status = CatalogStatus::Failed;
            self.mark_dirty();
        }
    }

    pub(crate) fn apply_telemetry(&mut self, telemetry: Telemetry) {
        let reading = match_and_price(&telemetry, &self.catalog);
        if reading != self.reading {
            self.reading = reading;
            self.mark_dirty();
        }
    }

    pub(crate) fn begin_commit(&mut self) {
        self.commit = CommitState::Committing;
        self.mark_dirty();
    }

    pub(crate) fn finish_commit(&mut self) {
        self.commit = CommitState::Idle;
        self.mark_dirty();
    }

    pub(crate) fn classifier(&self) -> &StatusClassifier {
        &self.classifier
    }

    pub(crate) fn show_notification(&mut self, outcome: CommitOutcome) {
        self.notification = Some(outcome);
        self.mark_dirty();
    }

    pub(crate) fn dismiss_notification(&mut self) {
        if self.notification.take().is_some() {
            self.mark_dirty();
        }
    }

    pub(crate) fn close(&mut self) {
        self.closed = true;
    }
}
