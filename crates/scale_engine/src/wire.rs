//! JSON shapes exchanged with the scale backend.

use scale_core::{CommitRequest, Product, Telemetry};
use serde::{Deserialize, Serialize};

/// Backends built on SQL decimals send numbers as strings; accept both.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    pub(crate) fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Numeric::Number(value) => *value,
            Numeric::Text(text) => text.trim().parse().ok()?,
        };
        value.is_finite().then_some(value)
    }

    pub(crate) fn as_i64(&self) -> Option<i64> {
        match self {
            Numeric::Number(value) if value.fract() == 0.0 => Some(*value as i64),
            Numeric::Number(_) => None,
            Numeric::Text(text) => text.trim().parse().ok(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProductRecord {
    pub kode_produk: Option<Numeric>,
    pub nama_produk: Option<String>,
    pub harga_per_kg: Option<Numeric>,
    #[serde(default)]
    pub path_gambar: Option<String>,
}

impl ProductRecord {
    /// Converts a record, rejecting entries without a code, a name or a
    /// non-negative price.
    pub(crate) fn into_product(self) -> Result<Product, String> {
        let code = self
            .kode_produk
            .as_ref()
            .and_then(Numeric::as_i64)
            .ok_or("missing or invalid kode_produk")?;
        let name = self
            .nama_produk
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| format!("product {code} has no nama_produk"))?;
        let price_per_kg = self
            .harga_per_kg
            .as_ref()
            .and_then(Numeric::as_f64)
            .filter(|price| *price >= 0.0)
            .ok_or_else(|| format!("product {code} has an invalid harga_per_kg"))?;
        Ok(Product {
            code,
            name,
            price_per_kg,
            image_path: self.path_gambar.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct StatusRequest<'a> {
    pub client_id: Option<&'a str>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StatusReply {
    #[serde(default)]
    pub weight: Option<Numeric>,
    #[serde(default)]
    pub detection: Option<String>,
}

impl StatusReply {
    pub(crate) fn into_telemetry(self) -> Telemetry {
        let weight_kg = self
            .weight
            .as_ref()
            .and_then(Numeric::as_f64)
            .unwrap_or(0.0);
        Telemetry::new(weight_kg, self.detection)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CommitPayload<'a> {
    pub nama_produk: &'a str,
    pub berat_kg: f64,
    pub harga_per_kg: f64,
    pub total_harga: u64,
}

impl<'a> From<&'a CommitRequest> for CommitPayload<'a> {
    fn from(request: &'a CommitRequest) -> Self {
        Self {
            nama_produk: &request.product_name,
            berat_kg: request.weight_kg,
            harga_per_kg: request.price_per_kg,
            total_harga: request.total_price,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CommitReplyBody {
    #[serde(default)]
    pub status: Option<serde_json::Value>,
}

impl CommitReplyBody {
    /// The status text, or empty when missing or not a string.
    pub(crate) fn status_text(self) -> String {
        match self.status {
            Some(serde_json::Value::String(text)) => text,
            _ => String::new(),
        }
    }
}
