//! Notification channel abstraction.
//!
//! This module provides the [`NotificationChannel`] trait that abstracts
//! over real desktop channels and mock channels for testing, plus the
//! [`Notification`] payload built from a due reminder.

use std::path::PathBuf;

use remind_types::{Reminder, Settings};

/// What to play for an important reminder.
#[derive(Debug, Clone, PartialEq)]
pub enum SoundSource {
    /// The built-in alert tone.
    Default,
    /// A user-supplied audio file (MP3, WAV, OGG, or FLAC).
    File(PathBuf),
}

/// A request to play audio alongside a notification.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundRequest {
    pub source: SoundSource,
    /// Playback cap in seconds. `None` plays the full file; exceeding the
    /// cap truncates, it never errors.
    pub max_secs: Option<f32>,
}

/// The rendered payload handed to channels.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub important: bool,
    /// Present only when the dispatch plan includes audio.
    pub sound: Option<SoundRequest>,
}

impl Notification {
    /// Build the payload for a due reminder.
    ///
    /// The body leads with the occurrence's trigger time, followed by the
    /// description when one is set. Audio is requested only for important
    /// reminders: a custom asset when the reminder has one, otherwise the
    /// built-in tone unless the store-wide `default_sound` is off.
    pub fn for_reminder(reminder: &Reminder, settings: &Settings) -> Self {
        let mut body = format!("[{}] {}", reminder.trigger_time.format("%H:%M"), reminder.title);
        if !reminder.description.is_empty() {
            body.push_str("\n\n");
            body.push_str(&reminder.description);
        }

        let sound = if reminder.important {
            match &reminder.sound {
                Some(path) => Some(SoundRequest {
                    source: SoundSource::File(path.clone()),
                    max_secs: reminder.sound_secs.filter(|s| *s > 0.0),
                }),
                None if settings.default_sound => Some(SoundRequest {
                    source: SoundSource::Default,
                    max_secs: None,
                }),
                None => None,
            }
        } else {
            None
        };

        Self {
            title: reminder.title.clone(),
            body,
            important: reminder.important,
            sound,
        }
    }
}

/// Why a channel failed to deliver.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new reasons
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum DeliveryError {
    /// The platform notification backend rejected the request.
    #[error("notification backend error: {0}")]
    Backend(String),

    /// The requested sound asset does not exist.
    #[error("sound asset not found: {}", .0.display())]
    MissingAsset(PathBuf),

    /// The sound asset exists but could not be decoded.
    #[error("cannot decode audio: {0}")]
    Undecodable(String),

    /// No audio output device is available.
    #[error("no audio output device available")]
    NoOutputDevice,
}

/// A single notification delivery mechanism.
///
/// Implementations cover the real desktop channels (toast, popup, sound)
/// and [`crate::MockChannel`] for tests. A channel delivers one payload
/// and reports success or a [`DeliveryError`]; it never retries.
pub trait NotificationChannel: Send + Sync {
    /// Short channel name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Deliver the notification.
    fn deliver(&self, notification: &Notification) -> Result<(), DeliveryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use remind_types::RepeatPolicy;
    use uuid::Uuid;

    fn reminder(important: bool, sound: Option<PathBuf>) -> Reminder {
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let time = chrono::NaiveTime::from_hms_opt(14, 0, 0).unwrap();
        Reminder {
            id: Uuid::new_v4(),
            title: "Call the dentist".to_string(),
            description: String::new(),
            trigger_time: time,
            repeat: RepeatPolicy::None,
            next_occurrence: date.and_time(time),
            important,
            sound,
            sound_secs: None,
            active: true,
            created_at: date.and_time(time),
        }
    }

    #[test]
    fn test_body_leads_with_trigger_time() {
        let n = Notification::for_reminder(&reminder(false, None), &Settings::default());
        assert_eq!(n.body, "[14:00] Call the dentist");
    }

    #[test]
    fn test_body_includes_description() {
        let mut r = reminder(false, None);
        r.description = "Ask about the crown".to_string();
        let n = Notification::for_reminder(&r, &Settings::default());
        assert!(n.body.ends_with("Ask about the crown"));
    }

    #[test]
    fn test_normal_reminder_requests_no_sound() {
        let n = Notification::for_reminder(&reminder(false, None), &Settings::default());
        assert!(!n.important);
        assert!(n.sound.is_none());
    }

    #[test]
    fn test_important_reminder_defaults_to_builtin_tone() {
        let n = Notification::for_reminder(&reminder(true, None), &Settings::default());
        assert_eq!(
            n.sound,
            Some(SoundRequest {
                source: SoundSource::Default,
                max_secs: None
            })
        );
    }

    #[test]
    fn test_important_reminder_with_custom_asset() {
        let mut r = reminder(true, Some(PathBuf::from("/tmp/alarm.mp3")));
        r.sound_secs = Some(4.5);
        let n = Notification::for_reminder(&r, &Settings::default());
        assert_eq!(
            n.sound,
            Some(SoundRequest {
                source: SoundSource::File(PathBuf::from("/tmp/alarm.mp3")),
                max_secs: Some(4.5)
            })
        );
    }

    #[test]
    fn test_default_sound_off_silences_important_reminders() {
        let settings = Settings {
            default_sound: false,
        };
        let n = Notification::for_reminder(&reminder(true, None), &settings);
        assert!(n.sound.is_none());

        // But an explicit asset still plays.
        let n = Notification::for_reminder(
            &reminder(true, Some(PathBuf::from("/tmp/alarm.wav"))),
            &settings,
        );
        assert!(n.sound.is_some());
    }

    #[test]
    fn test_zero_duration_cap_means_full_length() {
        let mut r = reminder(true, Some(PathBuf::from("/tmp/alarm.ogg")));
        r.sound_secs = Some(0.0);
        let n = Notification::for_reminder(&r, &Settings::default());
        assert_eq!(n.sound.unwrap().max_secs, None);
    }
}
