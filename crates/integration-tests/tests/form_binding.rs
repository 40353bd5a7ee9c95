//! Integration tests for the collect/fill round-trip law.

#![allow(clippy::unwrap_used)]

use clubdesk_portal::dom::FormDocument;
use clubdesk_portal::form::{FormData, collect, fill};
use clubdesk_portal::pages::member::PROFILE_FIELDS;
use clubdesk_portal::pages::payment::PAYMENT_FIELDS;

#[test]
fn test_payment_fields_round_trip() {
    let mut data = FormData::new();
    data.insert_text("amount", "12.3");
    data.insert_text("reference", "INV-7");
    data.insert_text("currency", "GHC");
    data.insert_flag("save-payment-method", true);
    data.insert_flag("terms-agreement", false);

    let mut form = FormDocument::from_schema(PAYMENT_FIELDS);
    fill(&mut form, PAYMENT_FIELDS, &data);
    let collected = collect(&form, PAYMENT_FIELDS);

    // Every field present in both record and form survives the trip.
    assert_eq!(collected.text("amount"), "12.3");
    assert_eq!(collected.text("reference"), "INV-7");
    assert_eq!(collected.text("currency"), "GHC");
    assert!(collected.flag("save-payment-method"));
    assert!(!collected.flag("terms-agreement"));
}

#[test]
fn test_fields_absent_from_form_are_excluded() {
    let mut data = FormData::new();
    data.insert_text("first-name", "Ama");
    data.insert_text("city", "Accra");

    // A reduced page variant carrying only one of the two inputs.
    let mut form = FormDocument::new();
    form.insert_text("first-name", "");

    fill(&mut form, PROFILE_FIELDS, &data);
    let collected = collect(&form, PROFILE_FIELDS);

    assert_eq!(collected.text("first-name"), "Ama");
    assert!(collected.get("city").is_none());
}

#[test]
fn test_fill_with_empty_record_blanks_the_form() {
    let mut form = FormDocument::from_schema(PAYMENT_FIELDS);
    form.insert_text("notes", "left over");
    form.insert_checkbox("terms-agreement", true);

    fill(&mut form, PAYMENT_FIELDS, &FormData::new());

    assert_eq!(form.text("notes"), "");
    assert!(!form.checked("terms-agreement"));
}

#[test]
fn test_double_fill_collect_is_stable() {
    let mut data = FormData::new();
    data.insert_text("description", "monthly dues");
    data.insert_flag("terms-agreement", true);

    let mut form = FormDocument::from_schema(PAYMENT_FIELDS);
    fill(&mut form, PAYMENT_FIELDS, &data);
    let once = collect(&form, PAYMENT_FIELDS);
    fill(&mut form, PAYMENT_FIELDS, &once);
    let twice = collect(&form, PAYMENT_FIELDS);

    assert_eq!(once, twice);
}
