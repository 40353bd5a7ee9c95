//! Typed repositories, one per record kind.
//!
//! Each store owns one (or, for payments, two) named storage slots and is
//! the only place that key is read or written, making ownership explicit.
//! Stores borrow the storage adapter, so an in-memory adapter can be
//! substituted wholesale in tests.

use crate::models::{Payment, PaymentDraft, Profile, Todo};
use crate::storage::{Storage, keys};

/// Repository for the single member profile.
pub struct ProfileStore<'a> {
    storage: &'a Storage,
}

impl<'a> ProfileStore<'a> {
    #[must_use]
    pub const fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// The stored profile, if one was ever saved.
    #[must_use]
    pub fn get(&self) -> Option<Profile> {
        self.storage.load(keys::PROFILE, None)
    }

    /// Overwrite the stored profile wholesale.
    pub fn set(&self, profile: &Profile) {
        self.storage.save(keys::PROFILE, profile);
    }

    /// Remove the stored profile entirely.
    pub fn clear(&self) {
        self.storage.remove(keys::PROFILE);
    }
}

/// Repository for the payment history and the single draft slot.
pub struct PaymentStore<'a> {
    storage: &'a Storage,
}

impl<'a> PaymentStore<'a> {
    #[must_use]
    pub const fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// The stored payment list, newest first. Empty when absent or
    /// malformed.
    #[must_use]
    pub fn get(&self) -> Vec<Payment> {
        self.storage.load(keys::PAYMENTS, Vec::new())
    }

    /// Overwrite the stored payment list.
    pub fn set(&self, payments: &[Payment]) {
        self.storage.save(keys::PAYMENTS, &payments);
    }

    /// Remove the stored payment list.
    pub fn clear(&self) {
        self.storage.remove(keys::PAYMENTS);
    }

    /// The provisional draft, if one is saved.
    #[must_use]
    pub fn draft(&self) -> Option<PaymentDraft> {
        self.storage.load(keys::PAYMENT_DRAFT, None)
    }

    /// Overwrite the draft slot.
    pub fn set_draft(&self, draft: &PaymentDraft) {
        self.storage.save(keys::PAYMENT_DRAFT, draft);
    }

    /// Remove the draft slot.
    pub fn clear_draft(&self) {
        self.storage.remove(keys::PAYMENT_DRAFT);
    }
}

/// Repository for the todo list.
pub struct TodoStore<'a> {
    storage: &'a Storage,
}

impl<'a> TodoStore<'a> {
    #[must_use]
    pub const fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// The stored todo list, newest first. Empty when absent or malformed.
    #[must_use]
    pub fn get(&self) -> Vec<Todo> {
        self.storage.load(keys::TODOS, Vec::new())
    }

    /// Overwrite the stored todo list.
    pub fn set(&self, todos: &[Todo]) {
        self.storage.save(keys::TODOS, &todos);
    }

    /// Remove the stored todo list.
    pub fn clear(&self) {
        self.storage.remove(keys::TODOS);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::form::FormData;

    #[test]
    fn test_profile_store_get_set_clear() {
        let storage = Storage::in_memory();
        let store = ProfileStore::new(&storage);
        assert!(store.get().is_none());

        let mut data = FormData::new();
        data.insert_text("first-name", "Kofi");
        store.set(&Profile::from_form(&data));
        assert_eq!(store.get().unwrap().get("first-name"), Some("Kofi"));

        store.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_payment_store_draft_slot_is_independent() {
        let storage = Storage::in_memory();
        let store = PaymentStore::new(&storage);

        store.set_draft(&PaymentDraft::new(FormData::new()));
        assert!(store.draft().is_some());
        assert!(store.get().is_empty());

        store.clear_draft();
        assert!(store.draft().is_none());
    }
}
