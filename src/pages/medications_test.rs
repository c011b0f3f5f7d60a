use super::*;

#[test]
fn medication_requires_core_fields() {
    assert!(validate_medication("Metformin", "500mg", "Twice daily", "2026-08-01").is_ok());
    assert!(validate_medication("", "500mg", "Twice daily", "2026-08-01").is_err());
    assert!(validate_medication("Metformin", "  ", "Twice daily", "2026-08-01").is_err());
    assert!(validate_medication("Metformin", "500mg", "", "2026-08-01").is_err());
    assert!(validate_medication("Metformin", "500mg", "Twice daily", "").is_err());
}

#[test]
fn draft_trims_fields_and_collapses_empty_notes() {
    let draft = draft_from_fields(" Metformin ", " 500mg ", "Twice daily", "2026-08-01", "   ");
    assert_eq!(draft.medication_name, "Metformin");
    assert_eq!(draft.dosage, "500mg");
    assert_eq!(draft.notes, None);
}

#[test]
fn draft_keeps_non_empty_notes() {
    let draft = draft_from_fields("Metformin", "500mg", "Twice daily", "2026-08-01", "with food");
    assert_eq!(draft.notes.as_deref(), Some("with food"));
}
