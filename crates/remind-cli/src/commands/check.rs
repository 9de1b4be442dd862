//! Check command - the scheduler's periodic entry point.
//!
//! Runs exactly one due-reminder pass and exits. The external scheduler
//! supplies the cadence; nothing here loops or sleeps. The exit code
//! reflects store-level health only: delivery failures are reported on
//! stderr but the pass still succeeds, because the affected reminders
//! have already been advanced.

use anyhow::Result;

use remind_core::{run_check, Dispatcher};
use remind_store::Store;

use crate::config::Config;

/// Execute the check command.
pub fn cmd_check(store: &Store, config: &Config, quiet: bool) -> Result<()> {
    let dispatcher = Dispatcher::desktop(config.sound_ceiling());
    let outcome = run_check(store, &dispatcher)?;

    for fired in &outcome.fired {
        for (channel, error) in fired.report.failures() {
            eprintln!(
                "warning: {} delivery failed for '{}': {}",
                channel, fired.title, error
            );
        }
    }

    if !quiet && outcome.fired_count() > 0 {
        println!(
            "Fired {} reminder(s) at {}.",
            outcome.fired_count(),
            outcome.checked_at.format("%H:%M")
        );
    }
    Ok(())
}
