use scale_core::{match_and_price, round_price, Catalog, Product, Telemetry};

fn product(code: i64, name: &str, price_per_kg: f64) -> Product {
    Product {
        code,
        name: name.to_string(),
        price_per_kg,
        image_path: format!("/img/{code}.png"),
    }
}

fn catalog() -> Catalog {
    Catalog::new(vec![
        product(1, "Apel", 25000.0),
        product(2, "Jeruk", 18000.0),
        product(3, "Semangka Merah", 9000.0),
    ])
}

#[test]
fn label_matches_regardless_of_case() {
    let catalog = catalog();
    for label in ["Apel", "apel", "APEL", "aPeL"] {
        let reading = match_and_price(&Telemetry::new(1.0, Some(label.to_string())), &catalog);
        assert_eq!(reading.matched_product.map(|p| p.code), Some(1), "{label}");
    }
}

#[test]
fn pricing_rounds_to_whole_units() {
    let reading = match_and_price(&Telemetry::new(1.234, Some("apel".into())), &catalog());
    assert_eq!(reading.total_price, 30850);
    assert_eq!(round_price(1.234, 25000.0), 30850);
}

#[test]
fn unknown_or_missing_label_prices_at_zero() {
    let catalog = catalog();
    for label in [Some("Mangga"), Some("-"), Some(""), None] {
        let telemetry = Telemetry::new(2.5, label.map(ToOwned::to_owned));
        let reading = match_and_price(&telemetry, &catalog);
        assert!(reading.matched_product.is_none(), "{label:?}");
        assert_eq!(reading.total_price, 0);
        assert_eq!(reading.telemetry.weight_kg, 2.5);
    }
}

#[test]
fn partial_names_do_not_match() {
    let reading = match_and_price(&Telemetry::new(1.0, Some("Semangka".into())), &catalog());
    assert!(reading.matched_product.is_none());
}

#[test]
fn duplicate_names_resolve_to_first_entry() {
    let catalog = Catalog::new(vec![product(7, "Pir", 30000.0), product(8, "PIR", 1.0)]);
    let reading = match_and_price(&Telemetry::new(1.0, Some("pir".into())), &catalog);
    assert_eq!(reading.matched_product.map(|p| p.code), Some(7));
    assert_eq!(reading.total_price, 30000);
}

#[test]
fn empty_catalog_matches_nothing() {
    let reading = match_and_price(&Telemetry::new(1.0, Some("Apel".into())), &Catalog::default());
    assert!(reading.matched_product.is_none());
    assert_eq!(reading.total_price, 0);
}

#[test]
fn zero_weight_matches_but_prices_at_zero() {
    let reading = match_and_price(&Telemetry::new(0.0, Some("Jeruk".into())), &catalog());
    assert_eq!(reading.matched_product.as_ref().map(|p| p.code), Some(2));
    assert_eq!(reading.total_price, 0);
    assert!(!reading.is_committable());
}

#[test]
fn surrounding_whitespace_is_part_of_the_label() {
    let catalog = catalog();
    for label in [" apel", "Apel ", " APEL "] {
        let reading = match_and_price(&Telemetry::new(1.0, Some(label.to_string())), &catalog);
        assert!(reading.matched_product.is_none(), "{label:?}");
        assert_eq!(reading.total_price, 0);
    }

    let padded = Catalog::new(vec![product(9, "Apel ", 20000.0)]);
    let telemetry = Telemetry::new(0.5, Some("Apel ".into()));
    assert_eq!(telemetry.detection_label.as_deref(), Some("Apel "));
    let reading = match_and_price(&telemetry, &padded);
    assert_eq!(reading.matched_product.map(|p| p.code), Some(9));
    assert_eq!(reading.total_price, 10000);
    assert!(padded.find_by_label("apel").is_none());
}
