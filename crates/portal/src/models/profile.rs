//! Member profile record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::form::{FieldValue, FormData};

/// The single member profile: field id to string value, overwritten
/// wholesale on each save. No history is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile(BTreeMap<String, String>);

impl Profile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a profile from collected form data. The member form is all
    /// text fields; any stray flag collapses to its default.
    #[must_use]
    pub fn from_form(data: &FormData) -> Self {
        let mut profile = Self::new();
        for (id, value) in data.iter() {
            if let FieldValue::Text(text) = value {
                profile.0.insert(id.to_owned(), text.clone());
            }
        }
        profile
    }

    /// Convert back into form data for filling the member form.
    #[must_use]
    pub fn to_form(&self) -> FormData {
        let mut data = FormData::new();
        for (id, value) in &self.0 {
            data.insert_text(id.clone(), value.clone());
        }
        data
    }

    /// Value of one profile field, if stored.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
