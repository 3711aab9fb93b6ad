use scale_core::{
    format_rupiah, format_weight, CatalogStatus, CommitState, DashboardView, OutcomeKind,
};

use super::constants::{KEY_COMMIT, KEY_DISMISS, KEY_QUIT, RULE_WIDTH, TITLE};

/// Escape sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Renders the dashboard as plain text lines.
pub fn render(view: &DashboardView, clock: &str) -> Vec<String> {
    let mut lines = Vec::with_capacity(12);
    let pad = RULE_WIDTH.saturating_sub(TITLE.len() + clock.len()).max(1);
    lines.push(format!("{TITLE}{}{clock}", " ".repeat(pad)));
    lines.push("=".repeat(RULE_WIDTH));

    lines.push(format!("WEIGHT (kg)  : {}", format_weight(view.weight_kg)));
    lines.push(format!("ITEM         : {}", view.detection));
    let price = view
        .price_per_kg
        .map(|price| format!("Rp {}", format_rupiah(price.round().max(0.0) as u64)))
        .unwrap_or_else(|| "-".to_string());
    lines.push(format!("PRICE / kg   : {price}"));
    lines.push(format!("TOTAL (Rp)   : {}", format_rupiah(view.total_price)));
    lines.push("-".repeat(RULE_WIDTH));

    lines.push(commit_line(view));
    lines.push(catalog_line(view));

    if let Some(outcome) = &view.notification {
        let label = match outcome.kind() {
            OutcomeKind::Success => "SUCCESS",
            OutcomeKind::Warning => "WARNING",
            OutcomeKind::Error => "ERROR",
        };
        lines.push(String::new());
        lines.push(format!(
            "[{label}] {}   ({KEY_DISMISS} + Enter to dismiss)",
            outcome.message()
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Enter/{KEY_COMMIT}: save & print   {KEY_DISMISS}: dismiss   {KEY_QUIT}: quit"
    ));
    lines
}

fn commit_line(view: &DashboardView) -> String {
    match (view.commit_state, view.commit_enabled) {
        (CommitState::Committing, _) => "[ SAVING... ]".to_string(),
        (CommitState::Idle, true) => "[ SAVE & PRINT ]  ready".to_string(),
        (CommitState::Idle, false) => "[ SAVE & PRINT ]  waiting for item and weight".to_string(),
    }
}

fn catalog_line(view: &DashboardView) -> String {
    match view.catalog_status {
        CatalogStatus::Pending => "Catalog: loading".to_string(),
        CatalogStatus::Loaded => format!("Catalog: {} products", view.catalog_size),
        CatalogStatus::Failed => "Catalog: unavailable".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scale_core::CommitOutcome;

    fn view() -> DashboardView {
        DashboardView {
            weight_kg: 1.234,
            detection: "Apel".to_string(),
            product_name: Some("Apel".to_string()),
            price_per_kg: Some(25000.0),
            total_price: 30850,
            commit_enabled: true,
            catalog_status: CatalogStatus::Loaded,
            catalog_size: 4,
            ..DashboardView::default()
        }
    }

    #[test]
    fn renders_reading_and_total() {
        let lines = render(&view(), "18/10/2026 09:15:00");

        assert!(lines[0].starts_with(TITLE));
        assert!(lines[0].ends_with("18/10/2026 09:15:00"));
        assert!(lines.contains(&"WEIGHT (kg)  : 1.234".to_string()));
        assert!(lines.contains(&"ITEM         : Apel".to_string()));
        assert!(lines.contains(&"PRICE / kg   : Rp 25.000".to_string()));
        assert!(lines.contains(&"TOTAL (Rp)   : 30.850".to_string()));
        assert!(lines.contains(&"[ SAVE & PRINT ]  ready".to_string()));
        assert!(lines.contains(&"Catalog: 4 products".to_string()));
    }

    #[test]
    fn shows_saving_and_notification() {
        let mut view = view();
        view.commit_state = CommitState::Committing;
        view.notification = Some(CommitOutcome::Error("Could not reach server".into()));

        let lines = render(&view, "");

        assert!(lines.contains(&"[ SAVING... ]".to_string()));
        assert!(lines
            .iter()
            .any(|line| line.starts_with("[ERROR] Could not reach server")));
    }

    #[test]
    fn empty_reading_uses_placeholders() {
        let lines = render(&DashboardView::default(), "");
        assert!(lines.contains(&"PRICE / kg   : -".to_string()));
        assert!(lines.contains(&"TOTAL (Rp)   : 0".to_string()));
        assert!(lines.contains(&"Catalog: loading".to_string()));
    }
}
