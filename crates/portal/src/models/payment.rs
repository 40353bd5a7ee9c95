//! Payment record and draft.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use clubdesk_core::{Amount, PaymentStatus};

use crate::form::FormData;

/// Currency code recorded when the form leaves the field blank.
pub const DEFAULT_CURRENCY: &str = "USD";

/// One recorded payment. Immutable after creation; the stored list only
/// ever has new records prepended to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Amount, normalized to two decimal places.
    pub amount: Amount,
    /// Free-form payment reference.
    pub reference: String,
    /// Payment method as chosen on the form.
    pub payment_method: String,
    /// Payment type as chosen on the form.
    pub payment_type: String,
    /// Free-form description.
    pub description: String,
    /// Currency code, `USD` when the form left it blank.
    pub currency: String,
    /// Payment date (`YYYY-MM-DD`), defaulted to the submission day.
    pub date: String,
    /// Billing address text.
    pub billing_address: String,
    /// Free-form notes.
    pub notes: String,
    /// Whether the member asked to keep the payment method on file.
    pub saved_method: bool,
    /// Derived from the terms-agreement checkbox at submit time.
    pub status: PaymentStatus,
}

impl Payment {
    /// Finalize collected form data into a payment record.
    ///
    /// Applies the submit-time coercions: unparsable amount becomes 0.00,
    /// a blank date becomes `today`, a blank currency becomes `USD`, and
    /// the status is derived from the terms-agreement flag.
    #[must_use]
    pub fn from_form(data: &FormData, today: NaiveDate) -> Self {
        let date = data.text("payment-date");
        let date = if date.is_empty() {
            today.format("%Y-%m-%d").to_string()
        } else {
            date.to_owned()
        };
        let currency = data.text("currency");
        let currency = if currency.is_empty() {
            DEFAULT_CURRENCY.to_owned()
        } else {
            currency.to_owned()
        };

        Self {
            amount: Amount::coerce(data.text("amount")),
            reference: data.text("reference").to_owned(),
            payment_method: data.text("payment-method").to_owned(),
            payment_type: data.text("payment-type").to_owned(),
            description: data.text("description").to_owned(),
            currency,
            date,
            billing_address: data.text("billing-address").to_owned(),
            notes: data.text("notes").to_owned(),
            saved_method: data.flag("save-payment-method"),
            status: PaymentStatus::from_terms_agreed(data.flag("terms-agreement")),
        }
    }
}

/// The single provisional payment draft: raw form data saved before
/// submission, overwritten on every save and removed on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentDraft(FormData);

impl PaymentDraft {
    #[must_use]
    pub const fn new(data: FormData) -> Self {
        Self(data)
    }

    /// The raw form data to fill the payment form from.
    #[must_use]
    pub const fn data(&self) -> &FormData {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    #[test]
    fn test_from_form_formats_amount() {
        let mut data = FormData::new();
        data.insert_text("amount", "12.3");
        let payment = Payment::from_form(&data, today());
        assert_eq!(payment.amount.to_string(), "12.30");
    }

    #[test]
    fn test_from_form_defaults() {
        let payment = Payment::from_form(&FormData::new(), today());
        assert_eq!(payment.amount.to_string(), "0.00");
        assert_eq!(payment.currency, "USD");
        assert_eq!(payment.date, "2026-08-06");
        assert_eq!(payment.status, PaymentStatus::Pending);
        assert!(!payment.saved_method);
    }

    #[test]
    fn test_from_form_derives_status_from_terms() {
        let mut data = FormData::new();
        data.insert_flag("terms-agreement", true);
        let payment = Payment::from_form(&data, today());
        assert_eq!(payment.status, PaymentStatus::Completed);
    }

    #[test]
    fn test_wire_field_names() {
        let mut data = FormData::new();
        data.insert_text("payment-method", "card");
        data.insert_text("billing-address", "12 High St");
        data.insert_flag("save-payment-method", true);
        let payment = Payment::from_form(&data, today());
        let json = serde_json::to_value(&payment).unwrap();
        assert_eq!(json["paymentMethod"], "card");
        assert_eq!(json["billingAddress"], "12 High St");
        assert_eq!(json["savedMethod"], true);
        assert_eq!(json["amount"], "0.00");
        assert_eq!(json["status"], "Pending");
    }
}
