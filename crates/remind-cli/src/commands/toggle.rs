//! Toggle command - enable or disable a reminder.

use anyhow::Result;

use remind_core::Manager;

use crate::format::{format_row, FormatOptions};

/// Execute the toggle command.
pub fn cmd_toggle(manager: &Manager, id: &str, opts: &FormatOptions, quiet: bool) -> Result<()> {
    let toggled = manager.toggle(id)?;
    if !quiet {
        println!(
            "{}: {}",
            if toggled.active { "Enabled" } else { "Disabled" },
            format_row(&toggled, opts)
        );
    }
    Ok(())
}
