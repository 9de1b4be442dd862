//! Delete and clear commands.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use remind_core::Manager;

/// Execute the delete command.
pub fn cmd_delete(manager: &Manager, id: &str, quiet: bool) -> Result<()> {
    let removed = manager.delete(id)?;
    if !quiet {
        println!("Deleted '{}' ({}).", removed.title, removed.short_id());
    }
    Ok(())
}

/// Execute the clear command. Without `--force`, asks for confirmation.
pub fn cmd_clear(manager: &Manager, force: bool, quiet: bool) -> Result<()> {
    let count = manager.list()?.len();
    if count == 0 {
        if !quiet {
            println!("Nothing to clear.");
        }
        return Ok(());
    }

    if !force {
        print!("Delete all {} reminder(s)? [y/N] ", count);
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            println!("Aborted.");
            return Ok(());
        }
    }

    let cleared = manager.clear()?;
    if !quiet {
        println!("Cleared {} reminder(s).", cleared);
    }
    Ok(())
}
