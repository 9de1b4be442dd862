//! Shared data model for the remind reminder scheduler.
//!
//! This crate provides the types shared by the store, the scheduling
//! engine, and the command-line surface:
//!
//! - [`Reminder`] and its [`RepeatPolicy`]
//! - Store-wide [`Settings`] and the persisted [`Snapshot`] document
//! - Parse helpers and [`ParseError`] for user-entered time/date/repeat
//!   syntax
//!
//! All date-times are naive local wall-clock values: the system assumes a
//! single local timezone and performs calendar arithmetic on it directly.
//!
//! # Example
//!
//! ```
//! use remind_types::{parse_time, RepeatPolicy};
//!
//! let time = parse_time("08:30")?;
//! let policy = RepeatPolicy::parse("weekly:fri")?;
//! assert!(policy.is_repeating());
//! assert_eq!(time.to_string(), "08:30:00");
//! # Ok::<(), remind_types::ParseError>(())
//! ```

pub mod error;
pub mod types;

pub use error::{ParseError, ParseResult};
pub use types::{parse_date, parse_time, Reminder, RepeatPolicy, Settings, Snapshot};
