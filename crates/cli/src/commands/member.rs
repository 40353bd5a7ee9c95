//! Member profile page commands.

use clubdesk_portal::dom::{FormDocument, PageDocument};
use clubdesk_portal::error::Result;
use clubdesk_portal::pages::MemberPage;
use clubdesk_portal::pages::member::PROFILE_FIELDS;

use super::{apply_fields, open_storage, print_notices};

fn document() -> PageDocument {
    let mut doc = PageDocument::new();
    doc.member_form = Some(FormDocument::from_schema(PROFILE_FIELDS));
    doc
}

/// Load the stored profile into the form and print the field values.
pub fn show() -> Result<()> {
    let storage = open_storage()?;
    let mut doc = document();
    if let Some(mut page) = MemberPage::activate(&storage, &mut doc) {
        page.load();
    }
    if let Some(form) = doc.member_form.as_ref() {
        for spec in PROFILE_FIELDS {
            println!("{}: {}", spec.id, form.text(spec.id));
        }
    }
    Ok(())
}

/// Fill the form from `--field` pairs and fire the submit event.
pub fn save(fields: &[(String, String)]) -> Result<()> {
    let storage = open_storage()?;
    let mut doc = document();
    if let Some(form) = doc.member_form.as_mut() {
        apply_fields(form, fields);
    }
    if let Some(mut page) = MemberPage::activate(&storage, &mut doc) {
        page.submit();
    }
    print_notices(&mut doc);
    Ok(())
}

/// Fire the explicit reset action: clear the form, remove the profile.
pub fn reset() -> Result<()> {
    let storage = open_storage()?;
    let mut doc = document();
    if let Some(mut page) = MemberPage::activate(&storage, &mut doc) {
        page.reset();
    }
    Ok(())
}
