//! Declarative field schemas and the collect/fill form binder.
//!
//! Each page owns a fixed, ordered list of [`FieldSpec`]s. The binder is
//! symmetric over that schema: [`collect`] reads the current inputs into a
//! plain record, [`fill`] writes a record back into the same inputs.
//! Fields absent from the form are skipped on both sides, so
//! `fill(collect(x))` reproduces the visible state `x` for every field
//! present in both the record and the form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dom::{FormDocument, Input};

/// What kind of control a field id addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Checkbox,
}

/// One entry of a page's field schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    /// A text-valued field.
    #[must_use]
    pub const fn text(id: &'static str) -> Self {
        Self {
            id,
            kind: FieldKind::Text,
        }
    }

    /// A checkbox field.
    #[must_use]
    pub const fn checkbox(id: &'static str) -> Self {
        Self {
            id,
            kind: FieldKind::Checkbox,
        }
    }
}

/// One collected field value.
///
/// Untagged on the wire: checkboxes persist as JSON booleans, text as
/// strings, matching the stored draft format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

/// A plain record of collected field values, keyed by field id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData(BTreeMap<String, FieldValue>);

impl FormData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a text value.
    pub fn insert_text(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.0.insert(id.into(), FieldValue::Text(value.into()));
    }

    /// Set a checkbox value.
    pub fn insert_flag(&mut self, id: impl Into<String>, checked: bool) {
        self.0.insert(id.into(), FieldValue::Flag(checked));
    }

    /// Text under `id`; empty when the record lacks that key.
    #[must_use]
    pub fn text(&self, id: &str) -> &str {
        match self.0.get(id) {
            Some(FieldValue::Text(value)) => value,
            _ => "",
        }
    }

    /// Flag under `id`; false when the record lacks that key.
    #[must_use]
    pub fn flag(&self, id: &str) -> bool {
        matches!(self.0.get(id), Some(FieldValue::Flag(true)))
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FieldValue> {
        self.0.get(id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate the collected values in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(id, value)| (id.as_str(), value))
    }
}

/// Read the current input values for `fields` into a plain record.
///
/// Absent inputs are skipped; checkboxes read their checked state,
/// everything else its text value.
#[must_use]
pub fn collect(form: &FormDocument, fields: &[FieldSpec]) -> FormData {
    let mut data = FormData::new();
    for spec in fields {
        match form.input(spec.id) {
            None => {}
            Some(Input::Checkbox(checked)) => data.insert_flag(spec.id, *checked),
            Some(Input::Text(value)) => data.insert_text(spec.id, value.clone()),
        }
    }
    data
}

/// Write a record back into the inputs for `fields`.
///
/// Absent inputs are skipped; keys missing from the record write the
/// empty/unchecked state.
pub fn fill(form: &mut FormDocument, fields: &[FieldSpec], data: &FormData) {
    for spec in fields {
        match form.input_mut(spec.id) {
            None => {}
            Some(Input::Checkbox(checked)) => *checked = data.flag(spec.id),
            Some(Input::Text(value)) => {
                value.clear();
                value.push_str(data.text(spec.id));
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::text("amount"),
        FieldSpec::text("reference"),
        FieldSpec::checkbox("terms-agreement"),
    ];

    #[test]
    fn test_fill_then_collect_round_trips() {
        let mut data = FormData::new();
        data.insert_text("amount", "12.3");
        data.insert_text("reference", "INV-7");
        data.insert_flag("terms-agreement", true);

        let mut form = FormDocument::from_schema(FIELDS);
        fill(&mut form, FIELDS, &data);
        assert_eq!(collect(&form, FIELDS), data);
    }

    #[test]
    fn test_collect_skips_absent_inputs() {
        let mut form = FormDocument::new();
        form.insert_text("amount", "5");
        let data = collect(&form, FIELDS);
        assert_eq!(data.len(), 1);
        assert_eq!(data.text("amount"), "5");
        assert!(data.get("reference").is_none());
    }

    #[test]
    fn test_fill_defaults_missing_keys() {
        let mut form = FormDocument::from_schema(FIELDS);
        form.insert_text("amount", "old");
        form.insert_checkbox("terms-agreement", true);
        fill(&mut form, FIELDS, &FormData::new());
        assert_eq!(form.text("amount"), "");
        assert!(!form.checked("terms-agreement"));
    }

    #[test]
    fn test_draft_wire_format_is_untagged() {
        let mut data = FormData::new();
        data.insert_text("amount", "12.30");
        data.insert_flag("terms-agreement", true);
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r#"{"amount":"12.30","terms-agreement":true}"#);
        let back: FormData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }
}
