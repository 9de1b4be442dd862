//! Shared argument structures for the command-line surface.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

/// Arguments for `remind add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Reminder title
    pub title: String,

    /// Trigger time, 24-hour HH:MM
    pub time: String,

    /// Explicit first date (YYYY-MM-DD); defaults to the nearest valid day
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Repeat policy: daily, weekly:<day>, weekdays, or every:<n>
    #[arg(short, long, value_name = "SPEC")]
    pub repeat: Option<String>,

    /// Deliver as popup + sound instead of a toast
    #[arg(short, long)]
    pub important: bool,

    /// Custom alert sound file (mp3, wav, ogg, flac)
    #[arg(long, value_name = "PATH")]
    pub sound: Option<PathBuf>,

    /// Cap sound playback to this many seconds
    #[arg(long, value_name = "SECS", requires = "sound")]
    pub sound_secs: Option<f32>,

    /// Longer body text shown in the notification
    #[arg(short, long, value_name = "TEXT")]
    pub description: Option<String>,
}

/// Arguments for `remind update`.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Reminder id or unique id prefix
    pub id: String,

    /// New title
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// New trigger time, 24-hour HH:MM
    #[arg(long, value_name = "TIME")]
    pub time: Option<String>,

    /// New occurrence date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// New repeat policy: daily, weekly:<day>, weekdays, every:<n>, or none
    #[arg(long, value_name = "SPEC")]
    pub repeat: Option<String>,

    /// Switch to the popup + sound channel
    #[arg(long, conflicts_with = "normal")]
    pub important: bool,

    /// Switch to the toast channel
    #[arg(long)]
    pub normal: bool,

    /// New alert sound file
    #[arg(long, value_name = "PATH", conflicts_with = "no_sound")]
    pub sound: Option<PathBuf>,

    /// Remove the custom alert sound
    #[arg(long)]
    pub no_sound: bool,

    /// Cap sound playback to this many seconds (0 plays the full file)
    #[arg(long, value_name = "SECS")]
    pub sound_secs: Option<f32>,

    /// New body text
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Re-enable a retired reminder
    #[arg(long, conflicts_with = "deactivate")]
    pub activate: bool,

    /// Retire the reminder without deleting it
    #[arg(long)]
    pub deactivate: bool,
}

/// Argument for `remind sound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SoundState {
    /// Play the built-in alert for important reminders without a custom sound
    On,
    /// Important reminders without a custom sound stay silent
    Off,
}
