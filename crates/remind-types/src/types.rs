//! Core types for reminders and the persisted store document.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ParseError;

/// How a reminder repeats after it fires.
///
/// Serialized as a tagged object, e.g. `{"kind": "weekly", "weekday": "Mon"}`,
/// so new policies can be added without renumbering.
///
/// # Examples
///
/// ```
/// use remind_types::RepeatPolicy;
///
/// assert_eq!(RepeatPolicy::parse("daily").unwrap(), RepeatPolicy::Daily);
/// assert_eq!(
///     RepeatPolicy::parse("every:3").unwrap(),
///     RepeatPolicy::Every { days: 3 }
/// );
/// assert!(RepeatPolicy::parse("fortnightly").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RepeatPolicy {
    /// Fire once, then retire.
    None,
    /// Fire every day.
    Daily,
    /// Fire once a week on the given weekday.
    Weekly { weekday: Weekday },
    /// Fire Monday through Friday, skipping weekends.
    Weekdays,
    /// Fire every `days` days. `days` is always at least 1.
    Every { days: u32 },
}

impl RepeatPolicy {
    /// Parse the command-line repeat specification:
    /// `daily`, `weekly:<day>`, `weekdays`, `every:<n>`, or `none`.
    pub fn parse(spec: &str) -> Result<Self, ParseError> {
        let spec = spec.trim().to_ascii_lowercase();
        match spec.as_str() {
            "none" | "once" => return Ok(RepeatPolicy::None),
            "daily" => return Ok(RepeatPolicy::Daily),
            "weekdays" => return Ok(RepeatPolicy::Weekdays),
            _ => {}
        }

        if let Some(day) = spec.strip_prefix("weekly:") {
            let weekday = Weekday::from_str(day.trim())
                .map_err(|_| ParseError::UnknownWeekday(day.trim().to_string()))?;
            return Ok(RepeatPolicy::Weekly { weekday });
        }

        if let Some(n) = spec.strip_prefix("every:") {
            let days: u32 = n
                .trim()
                .parse()
                .map_err(|_| ParseError::InvalidRepeat(spec.clone()))?;
            if days == 0 {
                return Err(ParseError::ZeroInterval);
            }
            return Ok(RepeatPolicy::Every { days });
        }

        Err(ParseError::InvalidRepeat(spec))
    }

    /// Whether the reminder survives a firing and schedules a successor.
    pub fn is_repeating(&self) -> bool {
        !matches!(self, RepeatPolicy::None)
    }
}

impl fmt::Display for RepeatPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepeatPolicy::None => write!(f, "once"),
            RepeatPolicy::Daily => write!(f, "daily"),
            RepeatPolicy::Weekly { weekday } => write!(f, "weekly on {}", weekday),
            RepeatPolicy::Weekdays => write!(f, "weekdays"),
            RepeatPolicy::Every { days } => write!(f, "every {} days", days),
        }
    }
}

/// A single scheduled reminder.
///
/// `next_occurrence` is the absolute local date-time of the next (or only)
/// firing. It is derived from `trigger_time` and `repeat` at creation and
/// recomputed by the recurrence engine after each firing, never edited
/// directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    /// Stable unique id, assigned at creation and never reused.
    pub id: Uuid,
    /// Display text. Always non-empty.
    pub title: String,
    /// Free-form body shown in the notification. May be empty.
    #[serde(default)]
    pub description: String,
    /// Wall-clock time of day each occurrence fires at.
    pub trigger_time: NaiveTime,
    /// Repeat policy.
    pub repeat: RepeatPolicy,
    /// Absolute local date-time of the next firing.
    pub next_occurrence: NaiveDateTime,
    /// Channel selector: `false` is toast only, `true` is popup plus sound.
    #[serde(default)]
    pub important: bool,
    /// Custom audio asset played for important reminders.
    #[serde(default)]
    pub sound: Option<PathBuf>,
    /// Per-reminder playback cap in seconds. `None` plays the full file.
    #[serde(default)]
    pub sound_secs: Option<f32>,
    /// Retired reminders stay listed but are excluded from due-evaluation.
    #[serde(default = "default_true")]
    pub active: bool,
    /// Local creation time.
    pub created_at: NaiveDateTime,
}

impl Reminder {
    /// Short prefix of the id used for display and command-line lookup.
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}

/// Store-wide settings, persisted alongside the reminders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Play the built-in alert for important reminders that have no
    /// custom sound asset.
    #[serde(default = "default_true")]
    pub default_sound: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_sound: true,
        }
    }
}

/// The full persisted store document.
///
/// Loaded into memory as a whole per operation and written back atomically.
/// Reminder ordering is preserved across load/save cycles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub reminders: Vec<Reminder>,
    #[serde(default)]
    pub settings: Settings,
    /// When the checker last completed a pass. Diagnostic only: missed
    /// ticks are skipped, never replayed.
    #[serde(default)]
    pub last_check: Option<NaiveDateTime>,
}

fn default_true() -> bool {
    true
}

/// Parse a 24-hour `HH:MM` time of day.
///
/// # Examples
///
/// ```
/// use remind_types::parse_time;
///
/// assert!(parse_time("09:30").is_ok());
/// assert!(parse_time("24:00").is_err());
/// assert!(parse_time("9am").is_err());
/// ```
pub fn parse_time(s: &str) -> Result<NaiveTime, ParseError> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| ParseError::InvalidTime(s.to_string()))
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| ParseError::InvalidDate(s.to_string()))
}
