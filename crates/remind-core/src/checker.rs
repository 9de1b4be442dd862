//! The periodic check pass.
//!
//! An external scheduler (cron, systemd timer, Task Scheduler) invokes
//! this roughly once a minute. One invocation performs exactly one pass:
//! lock the store, load, fire every due reminder, advance or retire each,
//! stamp `last_check`, save, release. It never loops or retries
//! internally, and a reminder advances exactly once per due evaluation
//! regardless of delivery outcome, so a persistently broken channel can
//! never cause re-firing.

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info, warn};
use uuid::Uuid;

use remind_store::Store;
use remind_types::Snapshot;

use crate::dispatch::{DeliveryReport, Dispatcher};
use crate::error::Result;
use crate::recurrence;

/// One fired reminder within a pass.
#[derive(Debug)]
pub struct FiredReminder {
    pub id: Uuid,
    pub title: String,
    pub report: DeliveryReport,
}

/// Summary of a completed pass.
#[derive(Debug)]
pub struct CheckOutcome {
    /// The single `now` the whole pass was evaluated against.
    pub checked_at: NaiveDateTime,
    pub fired: Vec<FiredReminder>,
}

impl CheckOutcome {
    /// Number of reminders that fired this pass.
    pub fn fired_count(&self) -> usize {
        self.fired.len()
    }

    /// Number of fired reminders with at least one failed channel.
    pub fn failure_count(&self) -> usize {
        self.fired
            .iter()
            .filter(|f| !f.report.fully_delivered())
            .count()
    }
}

/// Run one check pass against the store.
///
/// The entire load-evaluate-deliver-save cycle happens under the store
/// lock so the pass never interleaves with an edit from the management
/// surface. Returns `Err` only for store-level failures (lock timeout,
/// corrupt document, IO); delivery failures are per-reminder and live in
/// the returned [`CheckOutcome`].
pub fn run_check(store: &Store, dispatcher: &Dispatcher) -> Result<CheckOutcome> {
    let lock = store.lock()?;
    let mut snapshot = lock.load()?;

    let now = Local::now().naive_local();
    let outcome = check_snapshot(&mut snapshot, dispatcher, now);

    lock.save(&snapshot)?;

    if outcome.fired_count() > 0 {
        info!(
            "check pass fired {} reminder(s), {} with delivery failures",
            outcome.fired_count(),
            outcome.failure_count()
        );
    } else {
        debug!("check pass: nothing due");
    }
    Ok(outcome)
}

/// Evaluate and mutate a snapshot at an explicit instant.
///
/// Split out from [`run_check`] so the pass is deterministic under test:
/// callers own the clock and the store plumbing.
pub fn check_snapshot(
    snapshot: &mut Snapshot,
    dispatcher: &Dispatcher,
    now: NaiveDateTime,
) -> CheckOutcome {
    let settings = snapshot.settings.clone();
    let mut fired = Vec::new();

    for reminder in snapshot.reminders.iter_mut() {
        if !recurrence::is_due(reminder, now) {
            continue;
        }

        debug!(
            "reminder '{}' due at {} (now {})",
            reminder.title, reminder.next_occurrence, now
        );
        let report = dispatcher.dispatch(reminder, &settings);
        for (channel, error) in report.failures() {
            warn!(
                "delivery failure for '{}' on {}: {}",
                reminder.title, channel, error
            );
        }

        // Advance even when delivery failed: forward progress beats
        // re-firing a reminder whose channel is permanently broken.
        *reminder = recurrence::advance(reminder, now);
        fired.push(FiredReminder {
            id: reminder.id,
            title: reminder.title.clone(),
            report,
        });
    }

    snapshot.last_check = Some(now);
    CheckOutcome {
        checked_at: now,
        fired,
    }
}
