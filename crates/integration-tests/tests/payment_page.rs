//! Integration tests for the payment page cycle.

#![allow(clippy::unwrap_used)]

use chrono::Utc;
use clubdesk_integration_tests::{memory_storage, payment_document};
use clubdesk_portal::pages::{PaymentPage, boot};
use clubdesk_portal::stores::PaymentStore;
use serde_json::Value;

fn submit_with(storage: &clubdesk_portal::storage::Storage, fields: &[(&str, &str)]) {
    let mut doc = payment_document();
    let form = doc.payment_form.as_mut().unwrap();
    for (id, value) in fields {
        form.insert_text(*id, *value);
    }
    PaymentPage::activate(storage, &mut doc)
        .unwrap()
        .submit()
        .unwrap();
}

#[test]
fn test_amount_is_coerced_and_formatted() {
    let storage = memory_storage();
    submit_with(&storage, &[("amount", "12.3")]);
    submit_with(&storage, &[("amount", "")]);

    let raw: Value = storage.load("payments", Value::Null);
    // Newest first: the blank amount is at the head.
    assert_eq!(raw[0]["amount"], "0.00");
    assert_eq!(raw[1]["amount"], "12.30");
}

#[test]
fn test_blank_date_defaults_to_today() {
    let storage = memory_storage();
    submit_with(&storage, &[("amount", "5")]);

    let payments = PaymentStore::new(&storage).get();
    let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
    assert_eq!(payments.first().unwrap().date, today);
}

#[test]
fn test_blank_currency_defaults_to_usd() {
    let storage = memory_storage();
    submit_with(&storage, &[("reference", "INV-1")]);
    assert_eq!(PaymentStore::new(&storage).get().first().unwrap().currency, "USD");
}

#[test]
fn test_status_derived_from_terms_agreement() {
    let storage = memory_storage();

    let mut doc = payment_document();
    doc.payment_form
        .as_mut()
        .unwrap()
        .insert_checkbox("terms-agreement", true);
    PaymentPage::activate(&storage, &mut doc)
        .unwrap()
        .submit()
        .unwrap();
    submit_with(&storage, &[("reference", "unagreed")]);

    let raw: Value = storage.load("payments", Value::Null);
    assert_eq!(raw[0]["status"], "Pending");
    assert_eq!(raw[1]["status"], "Completed");
}

#[test]
fn test_payments_accumulate_newest_first() {
    let storage = memory_storage();
    submit_with(&storage, &[("reference", "first")]);
    submit_with(&storage, &[("reference", "second")]);
    submit_with(&storage, &[("reference", "third")]);

    let refs: Vec<String> = PaymentStore::new(&storage)
        .get()
        .into_iter()
        .map(|p| p.reference)
        .collect();
    assert_eq!(refs, ["third", "second", "first"]);
}

#[test]
fn test_draft_lifecycle() {
    let storage = memory_storage();

    // Save a draft, then reload the page: the form is pre-filled.
    let mut doc = payment_document();
    doc.payment_form.as_mut().unwrap().insert_text("amount", "45.5");
    PaymentPage::activate(&storage, &mut doc).unwrap().save_draft();
    assert_eq!(doc.notices(), ["Payment draft saved"]);

    let mut doc = payment_document();
    boot(&storage, &mut doc).unwrap();
    assert_eq!(doc.payment_form.as_ref().unwrap().text("amount"), "45.5");

    // Submitting removes the draft.
    PaymentPage::activate(&storage, &mut doc)
        .unwrap()
        .submit()
        .unwrap();
    assert!(PaymentStore::new(&storage).draft().is_none());

    // The next page load starts from a blank form again.
    let mut doc = payment_document();
    boot(&storage, &mut doc).unwrap();
    assert_eq!(doc.payment_form.as_ref().unwrap().text("amount"), "");
}

#[test]
fn test_submit_renders_history_and_resets_form() {
    let storage = memory_storage();

    let mut doc = payment_document();
    let form = doc.payment_form.as_mut().unwrap();
    form.insert_text("amount", "12.3");
    form.insert_text("reference", "INV-9");
    PaymentPage::activate(&storage, &mut doc)
        .unwrap()
        .submit()
        .unwrap();

    assert_eq!(doc.notices(), ["Payment recorded"]);
    assert_eq!(doc.payment_form.as_ref().unwrap().text("amount"), "");
    let html = doc.payment_history.as_ref().unwrap().html();
    assert!(html.contains("12.30"));
    assert!(html.contains("INV-9"));
}

#[test]
fn test_rendered_payment_fields_are_escaped() {
    let storage = memory_storage();
    submit_with(&storage, &[("description", "<b>bold</b> & more")]);

    let mut doc = payment_document();
    boot(&storage, &mut doc).unwrap();
    let html = doc.payment_history.as_ref().unwrap().html();
    assert!(!html.contains("<b>"));
    assert!(html.contains("&lt;b&gt;"));
    assert!(html.contains("&amp; more"));
}

#[test]
fn test_corrupt_history_degrades_to_empty() {
    let storage = memory_storage();
    // A malformed slot behaves as if no payments were ever stored.
    storage.save("payments", &"not a list");
    let mut doc = payment_document();
    boot(&storage, &mut doc).unwrap();
    assert!(doc.payment_history.as_ref().unwrap().is_empty());

    // And the next submit starts a fresh list.
    submit_with(&storage, &[("reference", "recovered")]);
    assert_eq!(PaymentStore::new(&storage).get().len(), 1);
}
