//! Member profile page controller.

use tracing::instrument;

use crate::dom::PageDocument;
use crate::form::{FieldSpec, collect, fill};
use crate::models::Profile;
use crate::storage::Storage;
use crate::stores::ProfileStore;

/// Field schema of the member profile form.
pub const PROFILE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("first-name"),
    FieldSpec::text("last-name"),
    FieldSpec::text("date-of-birth"),
    FieldSpec::text("email"),
    FieldSpec::text("phone"),
    FieldSpec::text("address"),
    FieldSpec::text("city"),
    FieldSpec::text("state"),
    FieldSpec::text("zip-code"),
    FieldSpec::text("country"),
    FieldSpec::text("description"),
    FieldSpec::text("occupation"),
    FieldSpec::text("interests"),
    FieldSpec::text("emergency-contact"),
    FieldSpec::text("emergency-phone"),
];

/// Controller for the member profile page: a single-record page with no
/// list view.
pub struct MemberPage<'a> {
    store: ProfileStore<'a>,
    doc: &'a mut PageDocument,
}

impl<'a> MemberPage<'a> {
    /// Activate the controller if the profile form is present.
    pub fn activate(storage: &'a Storage, doc: &'a mut PageDocument) -> Option<Self> {
        doc.member_form.as_ref()?;
        Some(Self {
            store: ProfileStore::new(storage),
            doc,
        })
    }

    /// Page-ready: pre-fill the form when a profile is stored.
    pub fn load(&mut self) {
        let Some(profile) = self.store.get() else {
            return;
        };
        let Some(form) = self.doc.member_form.as_mut() else {
            return;
        };
        fill(form, PROFILE_FIELDS, &profile.to_form());
    }

    /// Submit: collect the form and overwrite the stored profile.
    ///
    /// The form is left as typed; a single-record page has nothing to
    /// reset or re-render.
    #[instrument(skip(self))]
    pub fn submit(&mut self) {
        let data = {
            let Some(form) = self.doc.member_form.as_ref() else {
                return;
            };
            collect(form, PROFILE_FIELDS)
        };
        self.store.set(&Profile::from_form(&data));
        tracing::info!("profile saved");
        self.doc.notify("Profile saved");
    }

    /// Explicit reset: clear the form and remove the stored profile.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        if let Some(form) = self.doc.member_form.as_mut() {
            form.reset();
        }
        self.store.clear();
    }
}
