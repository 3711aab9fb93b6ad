use crate::{Catalog, Product};

/// Display placeholder used when the sensor reports no detection.
pub const NO_DETECTION: &str = "-";

/// One sensor snapshot. Replaced wholesale by the next successful poll.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Telemetry {
    pub weight_kg: f64,
    pub detection_label: Option<String>,
}

impl Telemetry {
    /// Builds a snapshot, folding the `"-"` placeholder and empty labels into `None`.
    pub fn new(weight_kg: f64, detection_label: Option<String>) -> Self {
        let detection_label =
            detection_label.filter(|label| !label.is_empty() && label != NO_DETECTION);
        Self {
            weight_kg,
            detection_label,
        }
    }

    pub fn detection_display(&self) -> &str {
        self.detection_label.as_deref().unwrap_or(NO_DETECTION)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PricedReading {
    pub telemetry: Telemetry,
    pub matched_product: Option<Product>,
    pub total_price: u64,
}

impl PricedReading {
    /// True when a commit may leave the terminal: a product is matched and
    /// the scale reports a positive weight.
    pub fn is_committable(&self) -> bool {
        self.matched_product.is_some() && self.telemetry.weight_kg > 0.0
    }
}

/// Matches the detection label against the catalog and prices the weight.
pub fn match_and_price(telemetry: &Telemetry, catalog: &Catalog) -> PricedReading {
    let matched_product = telemetry
        .detection_label
        .as_deref()
        .and_then(|label| catalog.find_by_label(label))
        .cloned();
    let total_price = matched_product
        .as_ref()
        .map(|product| round_price(telemetry.weight_kg, product.price_per_kg))
        .unwrap_or(0);

    PricedReading {
        telemetry: telemetry.clone(),
        matched_product,
        total_price,
    }
}

/// Rounds `weight_kg * price_per_kg` to the nearest whole currency unit.
///
/// Negative or non-finite products price at zero.
pub fn round_price(weight_kg: f64, price_per_kg: f64) -> u64 {
    let amount = (weight_kg * price_per_kg).round();
    if amount.is_finite() && amount > 0.0 {
        amount as u64
    } else {
        0
    }
}
