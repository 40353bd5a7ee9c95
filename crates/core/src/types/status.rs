//! Status enum for payment records.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle status of a recorded payment.
///
/// Derived once at submit time from the terms-agreement checkbox and never
/// changed afterwards: payment records are immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaymentStatus {
    /// Submitted without agreeing to the terms.
    #[default]
    Pending,
    /// Submitted with the terms-agreement checkbox checked.
    Completed,
}

impl PaymentStatus {
    /// Derive the status from the terms-agreement flag.
    #[must_use]
    pub const fn from_terms_agreed(agreed: bool) -> Self {
        if agreed { Self::Completed } else { Self::Pending }
    }

    /// CSS class used when rendering the status badge.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_from_terms_flag() {
        assert_eq!(
            PaymentStatus::from_terms_agreed(true),
            PaymentStatus::Completed
        );
        assert_eq!(
            PaymentStatus::from_terms_agreed(false),
            PaymentStatus::Pending
        );
    }

    #[test]
    fn test_serializes_as_display_string() {
        let json = serde_json::to_string(&PaymentStatus::Completed).unwrap();
        assert_eq!(json, "\"Completed\"");
        let back: PaymentStatus = serde_json::from_str("\"Pending\"").unwrap();
        assert_eq!(back, PaymentStatus::Pending);
    }
}
