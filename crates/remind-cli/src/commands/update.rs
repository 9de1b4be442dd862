//! Update command - edit an existing reminder.

use anyhow::Result;

use remind_core::{Manager, ReminderPatch, RepeatPolicy};
use remind_types::{parse_date, parse_time};

use crate::cli::UpdateArgs;
use crate::format::{format_row, FormatOptions};

/// Execute the update command.
pub fn cmd_update(
    manager: &Manager,
    args: UpdateArgs,
    opts: &FormatOptions,
    quiet: bool,
) -> Result<()> {
    let patch = ReminderPatch {
        title: args.title,
        description: args.description,
        time: args.time.as_deref().map(parse_time).transpose()?,
        date: args.date.as_deref().map(parse_date).transpose()?,
        repeat: args
            .repeat
            .as_deref()
            .map(RepeatPolicy::parse)
            .transpose()?,
        important: flag_pair(args.important, args.normal),
        sound: if args.no_sound {
            Some(None)
        } else {
            args.sound.map(Some)
        },
        sound_secs: args.sound_secs.map(|secs| (secs > 0.0).then_some(secs)),
        active: flag_pair(args.activate, args.deactivate),
    };

    let updated = manager.update(&args.id, patch)?;
    if !quiet {
        println!("Updated: {}", format_row(&updated, opts));
    }
    Ok(())
}

/// Collapse a `--x` / `--no-x` style flag pair into an optional bool.
/// Clap already rejects passing both.
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_pair() {
        assert_eq!(flag_pair(false, false), None);
        assert_eq!(flag_pair(true, false), Some(true));
        assert_eq!(flag_pair(false, true), Some(false));
    }
}
