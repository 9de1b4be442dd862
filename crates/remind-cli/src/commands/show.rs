//! Show command - full details of one reminder.

use anyhow::Result;

use remind_core::Manager;

use crate::format::format_detail;

/// Execute the show command.
pub fn cmd_show(manager: &Manager, id: &str) -> Result<()> {
    let reminder = manager.get(id)?;
    println!("{}", format_detail(&reminder));
    Ok(())
}
