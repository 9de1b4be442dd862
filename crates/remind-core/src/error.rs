//! Error types for remind-core.
//!
//! The taxonomy mirrors how each failure is recovered:
//!
//! | Error | Strategy |
//! |-------|----------|
//! | [`Error::Validation`] | Report to the caller; store untouched |
//! | [`Error::NotFound`] / [`Error::AmbiguousId`] | Report to the caller; store untouched |
//! | [`Error::Parse`] | Report to the caller; store untouched |
//! | `Error::Store(Corrupt)` | Abort the operation; file left for manual recovery |
//! | `Error::Store(LockTimeout)` | Abort; safe to retry later |
//!
//! Notification delivery failures are deliberately *not* in this enum:
//! they are per-reminder, never abort a checker pass, and are reported
//! through [`crate::DeliveryReport`] instead.

use thiserror::Error;

/// Errors that can occur in the scheduling engine and management API.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// User input failed validation (empty title, zero interval, ...).
    #[error("invalid reminder: {0}")]
    Validation(String),

    /// No reminder matches the given id or id prefix.
    #[error("no reminder matches id '{0}'")]
    NotFound(String),

    /// An id prefix matched more than one reminder.
    #[error("id prefix '{0}' is ambiguous, use more characters")]
    AmbiguousId(String),

    /// Time, date, or repeat syntax could not be parsed.
    #[error(transparent)]
    Parse(#[from] remind_types::ParseError),

    /// Store-level failure (corrupt document, lock timeout, IO).
    #[error(transparent)]
    Store(#[from] remind_store::Error),
}

impl Error {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Result type alias using remind-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;
