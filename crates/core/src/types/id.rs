//! Newtype id for todo records.
//!
//! Todo ids are millisecond creation timestamps, kept as a dedicated newtype
//! so they cannot be confused with other numeric values (list indexes,
//! lengths) flowing through the portal.

use serde::{Deserialize, Serialize};

/// Identifier of a single todo record.
///
/// The underlying value is the creation time in milliseconds since the Unix
/// epoch. Generation lives in the portal crate (it needs a clock); this type
/// only carries the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    /// Create an id from a raw i64 value.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying i64 value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for TodoId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TodoId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<TodoId> for i64 {
    fn from(id: TodoId) -> Self {
        id.0
    }
}
