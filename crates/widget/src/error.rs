//! Widget error types.
//!
//! The error taxonomy follows the widget's failure semantics:
//! - corrupt or missing persisted carts are recovered silently (no error
//!   type involved - see [`crate::store::CartStore::load`]);
//! - submit validation failures are [`SubmitError`], surfaced to the user as
//!   a blocking notice and otherwise state-preserving;
//! - webhook failures are swallowed inside the side channel;
//! - invalid line indices are a caller contract violation and not defended
//!   against.

use thiserror::Error;

use crate::storage::StorageError;

/// Submit-flow validation rejections.
///
/// The `Display` text is shown to the user verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The cart has no lines.
    #[error("Your cart is empty")]
    EmptyCart,

    /// The phone field is empty after trimming.
    #[error("Please enter your phone number (with country code).")]
    MissingPhone,
}

/// Widget-level error type.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Storage backend failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Template rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Deep-link URL construction failed.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}
