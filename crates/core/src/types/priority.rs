//! Priority enum for todo records.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Priority of a todo item.
///
/// The dashboard form offers `low`/`medium`/`high`; anything else (including
/// a blank selection) degrades to [`Priority::Low`], mirroring the form's
/// lenient input contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    /// Parse a form field value, defaulting to `Low` for unknown input.
    #[must_use]
    pub fn from_field(value: &str) -> Self {
        match value {
            "high" => Self::High,
            "medium" => Self::Medium,
            _ => Self::Low,
        }
    }

    /// Human-readable label shown in the rendered todo block.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low Priority",
            Self::Medium => "Medium Priority",
            Self::High => "High Priority",
        }
    }

    /// CSS class used when rendering the priority badge.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}
