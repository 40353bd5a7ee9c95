//! Payment entry page commands.

use clubdesk_portal::dom::{FormDocument, ListContainer, PageDocument};
use clubdesk_portal::error::Result;
use clubdesk_portal::pages::PaymentPage;
use clubdesk_portal::pages::payment::PAYMENT_FIELDS;

use super::{apply_fields, open_storage, print_notices};

fn document() -> PageDocument {
    let mut doc = PageDocument::new();
    doc.payment_form = Some(FormDocument::from_schema(PAYMENT_FIELDS));
    doc.payment_history = Some(ListContainer::new());
    doc
}

fn print_history(doc: &PageDocument) {
    if let Some(container) = doc.payment_history.as_ref() {
        if container.is_empty() {
            println!("(no payments)");
        } else {
            println!("{}", container.html());
        }
    }
}

/// Load the page and print the rendered payment history.
pub fn list() -> Result<()> {
    let storage = open_storage()?;
    let mut doc = document();
    if let Some(mut page) = PaymentPage::activate(&storage, &mut doc) {
        page.load()?;
    }
    print_history(&doc);
    Ok(())
}

/// Fill the form from `--field` pairs and fire the submit event.
pub fn submit(fields: &[(String, String)]) -> Result<()> {
    let storage = open_storage()?;
    let mut doc = document();
    if let Some(form) = doc.payment_form.as_mut() {
        apply_fields(form, fields);
    }
    if let Some(mut page) = PaymentPage::activate(&storage, &mut doc) {
        page.submit()?;
    }
    print_notices(&mut doc);
    print_history(&doc);
    Ok(())
}

/// Fill the form from `--field` pairs and fire the save-draft action.
pub fn draft(fields: &[(String, String)]) -> Result<()> {
    let storage = open_storage()?;
    let mut doc = document();
    if let Some(form) = doc.payment_form.as_mut() {
        apply_fields(form, fields);
    }
    if let Some(mut page) = PaymentPage::activate(&storage, &mut doc) {
        page.save_draft();
    }
    print_notices(&mut doc);
    Ok(())
}
