//! List command - print reminders.

use anyhow::Result;

use remind_core::Manager;

use crate::format::{format_row, FormatOptions};

/// Execute the list command.
pub fn cmd_list(manager: &Manager, all: bool, opts: &FormatOptions) -> Result<()> {
    let reminders = manager.list()?;
    let hidden = reminders.iter().filter(|r| !r.active).count();

    let visible: Vec<_> = reminders
        .iter()
        .filter(|r| all || r.active)
        .collect();

    if visible.is_empty() {
        println!("No reminders set. Add one with 'remind add <title> <HH:MM>'.");
        return Ok(());
    }

    for reminder in visible {
        println!("{}", format_row(reminder, opts));
    }
    if !all && hidden > 0 {
        println!("({} retired, use --all to show)", hidden);
    }
    Ok(())
}
