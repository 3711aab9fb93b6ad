use crate::{CatalogStatus, CommitOutcome, CommitState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardView {
    pub weight_kg: f64,
    pub detection: String,
    pub product_name: Option<String>,
    pub price_per_kg: Option<f64>,
    pub total_price: u64,
    pub commit_state: CommitState,
    pub commit_enabled: bool,
    pub notification: Option<CommitOutcome>,
    pub catalog_status: CatalogStatus,
    pub catalog_size: usize,
}

/// Weight as shown on the dashboard, always three decimals.
pub fn format_weight(weight_kg: f64) -> String {
    format!("{weight_kg:.3}")
}

/// Whole rupiah amount with `.` as the thousands separator.
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
