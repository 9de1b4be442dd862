//! Add command - create a new reminder.

use anyhow::Result;

use remind_core::{Manager, NewReminder, RepeatPolicy};
use remind_types::{parse_date, parse_time};

use crate::cli::AddArgs;
use crate::format::{format_row, FormatOptions};

/// Execute the add command.
pub fn cmd_add(manager: &Manager, args: AddArgs, opts: &FormatOptions, quiet: bool) -> Result<()> {
    let time = parse_time(&args.time)?;
    let date = args.date.as_deref().map(parse_date).transpose()?;
    let repeat = match args.repeat.as_deref() {
        Some(spec) => RepeatPolicy::parse(spec)?,
        None => RepeatPolicy::None,
    };

    let reminder = manager.add(NewReminder {
        title: args.title,
        description: args.description.unwrap_or_default(),
        time,
        date,
        repeat,
        important: args.important,
        sound: args.sound,
        sound_secs: args.sound_secs,
    })?;

    if !quiet {
        println!("Added: {}", format_row(&reminder, opts));
    }
    Ok(())
}
