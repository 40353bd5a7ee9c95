//! The host-document model the pages bind to.
//!
//! The portal never touches a real element tree; the host (CLI, tests)
//! supplies a [`PageDocument`] describing which page elements exist and
//! what the user typed into them. A controller only activates when its
//! defining form/container elements are present, so all three pages
//! coexist behind one startup routine without interfering.

use std::collections::BTreeMap;

use crate::form::{FieldKind, FieldSpec};

/// One form input, either free text or a checkbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Text(String),
    Checkbox(bool),
}

/// A form element: inputs addressed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDocument {
    inputs: BTreeMap<String, Input>,
}

impl FormDocument {
    /// An empty form with no inputs at all.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a form holding one empty input per schema field.
    #[must_use]
    pub fn from_schema(fields: &[FieldSpec]) -> Self {
        let mut form = Self::new();
        for spec in fields {
            match spec.kind {
                FieldKind::Text => form.insert_text(spec.id, ""),
                FieldKind::Checkbox => form.insert_checkbox(spec.id, false),
            }
        }
        form
    }

    /// Add (or replace) a text input.
    pub fn insert_text(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.inputs.insert(id.into(), Input::Text(value.into()));
    }

    /// Add (or replace) a checkbox input.
    pub fn insert_checkbox(&mut self, id: impl Into<String>, checked: bool) {
        self.inputs.insert(id.into(), Input::Checkbox(checked));
    }

    /// Look up an input by id.
    #[must_use]
    pub fn input(&self, id: &str) -> Option<&Input> {
        self.inputs.get(id)
    }

    /// Look up an input by id, mutably.
    pub fn input_mut(&mut self, id: &str) -> Option<&mut Input> {
        self.inputs.get_mut(id)
    }

    /// Current text of an input; empty for checkboxes and absent inputs.
    #[must_use]
    pub fn text(&self, id: &str) -> &str {
        match self.inputs.get(id) {
            Some(Input::Text(value)) => value,
            _ => "",
        }
    }

    /// Current checked state of an input; false for text and absent inputs.
    #[must_use]
    pub fn checked(&self, id: &str) -> bool {
        matches!(self.inputs.get(id), Some(Input::Checkbox(true)))
    }

    /// Return every input to its pristine state (empty text, unchecked).
    pub fn reset(&mut self) {
        for input in self.inputs.values_mut() {
            match input {
                Input::Text(value) => value.clear(),
                Input::Checkbox(checked) => *checked = false,
            }
        }
    }
}

/// One rendered block inside a list container.
///
/// `item_id` is the record-id tag a delegated click walks up to, where the
/// page type carries one (todo blocks do, payment blocks do not).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    item_id: Option<i64>,
    html: String,
}

impl ListItem {
    /// The record id this block is tagged with, if any.
    #[must_use]
    pub const fn item_id(&self) -> Option<i64> {
        self.item_id
    }

    /// The rendered markup of this block.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }
}

/// A list container element whose children are regenerated wholesale on
/// every render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListContainer {
    children: Vec<ListItem>,
}

impl ListContainer {
    /// An empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all children.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Append one rendered block.
    pub fn append(&mut self, item_id: Option<i64>, html: String) {
        self.children.push(ListItem { item_id, html });
    }

    /// The rendered blocks, in list order.
    #[must_use]
    pub fn children(&self) -> &[ListItem] {
        &self.children
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Position of the block tagged with `item_id`, if rendered.
    #[must_use]
    pub fn position_of(&self, item_id: i64) -> Option<usize> {
        self.children
            .iter()
            .position(|child| child.item_id == Some(item_id))
    }

    /// The container's full markup, children joined in order.
    #[must_use]
    pub fn html(&self) -> String {
        self.children
            .iter()
            .map(ListItem::html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The element tree of one loaded page, plus the notice sink.
///
/// Absent elements mean "feature not present on this page" and are
/// silently skipped, never fatal.
#[derive(Debug, Clone, Default)]
pub struct PageDocument {
    /// Member profile form.
    pub member_form: Option<FormDocument>,
    /// Payment entry form.
    pub payment_form: Option<FormDocument>,
    /// Payment history list container.
    pub payment_history: Option<ListContainer>,
    /// Todo entry form.
    pub todo_form: Option<FormDocument>,
    /// Todo list container.
    pub todos_container: Option<ListContainer>,
    notices: Vec<String>,
}

impl PageDocument {
    /// A document with no page elements at all.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a confirmation notice to the user.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.notices.push(message.into());
    }

    /// Notices accumulated so far, oldest first.
    #[must_use]
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Drain accumulated notices for display.
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_clears_text_and_checkboxes() {
        let mut form = FormDocument::new();
        form.insert_text("amount", "12.30");
        form.insert_checkbox("terms-agreement", true);
        form.reset();
        assert_eq!(form.text("amount"), "");
        assert!(!form.checked("terms-agreement"));
    }

    #[test]
    fn test_from_schema_creates_empty_inputs() {
        let fields = [
            FieldSpec::text("amount"),
            FieldSpec::checkbox("terms-agreement"),
        ];
        let form = FormDocument::from_schema(&fields);
        assert_eq!(form.input("amount"), Some(&Input::Text(String::new())));
        assert_eq!(
            form.input("terms-agreement"),
            Some(&Input::Checkbox(false))
        );
    }

    #[test]
    fn test_container_position_of_tagged_block() {
        let mut container = ListContainer::new();
        container.append(Some(1000), "<div/>".to_owned());
        container.append(None, "<div/>".to_owned());
        container.append(Some(2000), "<div/>".to_owned());
        assert_eq!(container.position_of(2000), Some(2));
        assert_eq!(container.position_of(3000), None);
    }
}
