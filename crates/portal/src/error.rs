//! Unified error handling for the portal.
//!
//! Page-cycle failures that the original contract swallows (missing
//! elements, malformed stored data, unparsable input) never become errors
//! here - they degrade to fallbacks inside the storage adapter and binder.
//! `PortalError` covers what genuinely can fail in a host: opening the
//! storage backend, loading configuration, rendering a template.

use thiserror::Error;

use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the portal.
#[derive(Debug, Error)]
pub enum PortalError {
    /// Storage backend could not be opened or written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration failed to load.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A list template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// Result type alias for `PortalError`.
pub type Result<T> = std::result::Result<T, PortalError>;
