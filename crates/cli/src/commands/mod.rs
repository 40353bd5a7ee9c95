//! CLI command implementations, one module per page.

pub mod member;
pub mod payment;
pub mod todo;

use clubdesk_portal::config::PortalConfig;
use clubdesk_portal::dom::{FormDocument, Input, PageDocument};
use clubdesk_portal::error::Result;
use clubdesk_portal::storage::{FileBackend, Storage};

/// Open the file-backed storage at the configured data directory.
pub fn open_storage() -> Result<Storage> {
    let config = PortalConfig::from_env()?;
    Ok(Storage::new(FileBackend::new(config.data_dir)?))
}

/// Apply `--field id=value` pairs to a schema-built form.
///
/// Unknown ids are skipped with a warning, mirroring the binder's
/// missing-input contract.
pub fn apply_fields(form: &mut FormDocument, pairs: &[(String, String)]) {
    for (id, value) in pairs {
        match form.input_mut(id) {
            None => tracing::warn!(field = %id, "unknown field, skipped"),
            Some(Input::Checkbox(checked)) => *checked = parse_flag(value),
            Some(Input::Text(text)) => {
                text.clear();
                text.push_str(value);
            }
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "1" | "on" | "yes" | "checked"
    )
}

/// Print the notices a page accumulated (the confirmation dialogs).
pub fn print_notices(doc: &mut PageDocument) {
    for notice in doc.take_notices() {
        println!("{notice}");
    }
}
