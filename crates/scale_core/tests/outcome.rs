use scale_core::{
    sanitize_status, CommitOutcome, OutcomeKind, StatusClassifier, FALLBACK_FAILURE_MESSAGE,
};

#[test]
fn sanitize_strips_pictographs_and_trims() {
    assert_eq!(sanitize_status("✅ Berhasil disimpan"), "Berhasil disimpan");
    assert_eq!(sanitize_status("❌ Gagal 🖨️ "), "Gagal");
    assert_eq!(sanitize_status("🇮🇩 Transaksi berhasil ☀"), "Transaksi berhasil");
}

#[test]
fn sanitize_is_idempotent_on_clean_text() {
    for text in ["Berhasil disimpan", "Produk tidak ditemukan", "Rp 30.850 (1,234 kg)"] {
        assert_eq!(sanitize_status(text), text);
        assert_eq!(sanitize_status(&sanitize_status(text)), text);
    }
}

#[test]
fn success_vocabulary_is_case_insensitive() {
    let classifier = StatusClassifier::default();
    assert_eq!(
        classifier.classify("Transaksi berhasil"),
        CommitOutcome::Success("Transaksi berhasil".to_string())
    );
    assert_eq!(classifier.classify("SUCCESS").kind(), OutcomeKind::Success);
    assert_eq!(
        classifier.classify("✅ Berhasil disimpan"),
        CommitOutcome::Success("Berhasil disimpan".to_string())
    );
}

#[test]
fn other_text_is_an_error_with_that_message() {
    let outcome = StatusClassifier::default().classify("Produk tidak ditemukan");
    assert_eq!(outcome, CommitOutcome::Error("Produk tidak ditemukan".to_string()));
}

#[test]
fn empty_reason_uses_fallback() {
    let classifier = StatusClassifier::default();
    for raw in ["", "   ", "❌"] {
        let outcome = classifier.classify(raw);
        assert_eq!(outcome, CommitOutcome::Error(FALLBACK_FAILURE_MESSAGE.to_string()));
        assert!(!outcome.message().is_empty());
    }
}

#[test]
fn vocabulary_can_be_extended() {
    let classifier = StatusClassifier::default().with_success_term("  Tersimpan ");
    assert_eq!(classifier.success_terms().len(), 3);
    assert_eq!(classifier.classify("Data tersimpan").kind(), OutcomeKind::Success);

    let classifier = classifier.with_success_term("BERHASIL");
    assert_eq!(classifier.success_terms().len(), 3);
}
