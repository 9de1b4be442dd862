//! Error types for parsing user-facing reminder syntax.

use thiserror::Error;

/// Errors that can occur when parsing times, dates, and repeat
/// specifications entered by the user.
///
/// This error type is surface-agnostic: the same parsing rules apply to
/// command-line arguments and to any other editing front end.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Time was not a valid 24-hour `HH:MM` value.
    #[error("invalid time '{0}': expected 24-hour HH:MM")]
    InvalidTime(String),

    /// Date was not a valid `YYYY-MM-DD` value.
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Weekday name was not recognized.
    #[error("unknown weekday '{0}': expected mon..sun")]
    UnknownWeekday(String),

    /// Repeat specification was not recognized.
    #[error("invalid repeat '{0}': expected daily, weekly:<day>, weekdays, or every:<n>")]
    InvalidRepeat(String),

    /// Custom repeat interval must be at least one day.
    #[error("repeat interval must be at least 1 day")]
    ZeroInterval,
}

/// Result type alias using remind-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
