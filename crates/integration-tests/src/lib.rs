//! Integration-test harness for Clubdesk.
//!
//! The tests drive whole page cycles (collect, persist, render, mutate)
//! against the in-memory storage backend. This library only provides the
//! builders the test files share.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p clubdesk-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `member_profile` - single-record profile page cycle
//! - `payment_page` - payment submission, drafts, and history rendering
//! - `dashboard_todos` - todo creation and delegated list mutations
//! - `form_binding` - the collect/fill round-trip law

#![cfg_attr(not(test), forbid(unsafe_code))]

use clubdesk_portal::dom::{FormDocument, ListContainer, PageDocument};
use clubdesk_portal::pages::dashboard::TODO_FIELDS;
use clubdesk_portal::pages::member::PROFILE_FIELDS;
use clubdesk_portal::pages::payment::PAYMENT_FIELDS;
use clubdesk_portal::storage::Storage;

/// Fresh in-memory storage, one per test.
#[must_use]
pub fn memory_storage() -> Storage {
    Storage::in_memory()
}

/// A page document carrying only the member profile form.
#[must_use]
pub fn member_document() -> PageDocument {
    let mut doc = PageDocument::new();
    doc.member_form = Some(FormDocument::from_schema(PROFILE_FIELDS));
    doc
}

/// A page document carrying the payment form and history container.
#[must_use]
pub fn payment_document() -> PageDocument {
    let mut doc = PageDocument::new();
    doc.payment_form = Some(FormDocument::from_schema(PAYMENT_FIELDS));
    doc.payment_history = Some(ListContainer::new());
    doc
}

/// A page document carrying the todo form and list container.
#[must_use]
pub fn dashboard_document() -> PageDocument {
    let mut doc = PageDocument::new();
    doc.todo_form = Some(FormDocument::from_schema(TODO_FIELDS));
    doc.todos_container = Some(ListContainer::new());
    doc
}
