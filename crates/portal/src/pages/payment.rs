//! Payment entry page controller.

use chrono::Utc;
use tracing::instrument;

use crate::dom::PageDocument;
use crate::error::Result;
use crate::form::{FieldSpec, collect, fill};
use crate::models::{Payment, PaymentDraft};
use crate::render;
use crate::storage::Storage;
use crate::stores::PaymentStore;

/// Field schema of the payment entry form.
pub const PAYMENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("amount"),
    FieldSpec::text("reference"),
    FieldSpec::text("payment-method"),
    FieldSpec::text("payment-type"),
    FieldSpec::text("description"),
    FieldSpec::text("currency"),
    FieldSpec::text("payment-date"),
    FieldSpec::text("billing-address"),
    FieldSpec::text("notes"),
    FieldSpec::checkbox("save-payment-method"),
    FieldSpec::checkbox("terms-agreement"),
];

/// Controller for the payment page: entry form, draft slot, and the
/// newest-first history list.
pub struct PaymentPage<'a> {
    store: PaymentStore<'a>,
    doc: &'a mut PageDocument,
}

impl<'a> PaymentPage<'a> {
    /// Activate the controller if the payment form is present. The history
    /// container is optional; rendering skips itself when it is absent.
    pub fn activate(storage: &'a Storage, doc: &'a mut PageDocument) -> Option<Self> {
        doc.payment_form.as_ref()?;
        Some(Self {
            store: PaymentStore::new(storage),
            doc,
        })
    }

    /// Page-ready: pre-fill from the draft when one exists, then render
    /// the history.
    pub fn load(&mut self) -> Result<()> {
        if let Some(draft) = self.store.draft() {
            if let Some(form) = self.doc.payment_form.as_mut() {
                fill(form, PAYMENT_FIELDS, draft.data());
            }
        }
        self.render()
    }

    /// Submit: finalize the collected form into a payment record,
    /// prepend it to the stored list, drop the draft, reset the form,
    /// and re-render.
    ///
    /// # Errors
    ///
    /// Returns `PortalError::Template` if the history fails to render.
    #[instrument(skip(self))]
    pub fn submit(&mut self) -> Result<()> {
        let data = {
            let Some(form) = self.doc.payment_form.as_ref() else {
                return Ok(());
            };
            collect(form, PAYMENT_FIELDS)
        };
        let payment = Payment::from_form(&data, Utc::now().date_naive());

        // Re-read the stored list inside the handler before writing.
        let mut payments = self.store.get();
        payments.insert(0, payment);
        tracing::info!(count = payments.len(), "payment recorded");
        self.store.set(&payments);
        self.store.clear_draft();

        self.doc.notify("Payment recorded");
        if let Some(form) = self.doc.payment_form.as_mut() {
            form.reset();
        }
        self.render()
    }

    /// Save the raw form data as the provisional draft without
    /// submitting.
    #[instrument(skip(self))]
    pub fn save_draft(&mut self) {
        let Some(form) = self.doc.payment_form.as_ref() else {
            return;
        };
        let data = collect(form, PAYMENT_FIELDS);
        self.store.set_draft(&PaymentDraft::new(data));
        tracing::info!("payment draft saved");
        self.doc.notify("Payment draft saved");
    }

    /// Regenerate the history container from storage, newest first.
    ///
    /// # Errors
    ///
    /// Returns `PortalError::Template` if a block fails to render.
    pub fn render(&mut self) -> Result<()> {
        let Some(container) = self.doc.payment_history.as_mut() else {
            return Ok(());
        };
        let payments = self.store.get();
        render::render_payments(&payments, container)
    }
}
