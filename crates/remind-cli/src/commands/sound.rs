//! Sound command - store-wide default alert setting.

use anyhow::Result;

use remind_core::Manager;

use crate::cli::SoundState;

/// Execute the sound command.
pub fn cmd_sound(manager: &Manager, state: SoundState, quiet: bool) -> Result<()> {
    let on = state == SoundState::On;
    manager.set_default_sound(on)?;
    if !quiet {
        println!(
            "Default alert sound is now {}.",
            if on { "on" } else { "off" }
        );
    }
    Ok(())
}
