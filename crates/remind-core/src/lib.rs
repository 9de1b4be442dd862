//! Scheduling engine and notification dispatch for remind.
//!
//! This crate is the heart of the reminder system:
//!
//! - **Recurrence** ([`recurrence`]): pure calendar arithmetic deciding
//!   when a reminder is due and what its successor occurrence is.
//! - **Dispatch** ([`Dispatcher`]): routes a due reminder to its channels
//!   (toast for normal reminders, popup plus sound for important ones)
//!   and aggregates per-channel outcomes.
//! - **Checker** ([`run_check`]): the single-pass entry point an external
//!   scheduler invokes roughly once a minute.
//! - **Management** ([`Manager`]): add/list/update/delete over the shared
//!   store, used by the command line and any other editing surface.
//!
//! Every store access, from either the checker or the management API, is
//! one locked load-mutate-save transaction; see `remind-store`.
//!
//! # Quick start
//!
//! ```no_run
//! use remind_core::{Dispatcher, Manager, NewReminder, run_check};
//! use remind_store::Store;
//! use remind_types::parse_time;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = Manager::new(Store::open_default()?);
//! manager.add(NewReminder::new("Take a break", parse_time("15:00")?))?;
//!
//! // Later, from the scheduled task:
//! let dispatcher = Dispatcher::desktop(20.0);
//! let outcome = run_check(manager.store(), &dispatcher)?;
//! println!("fired {}", outcome.fired_count());
//! # Ok(())
//! # }
//! ```

pub mod channels;
pub mod checker;
pub mod dispatch;
pub mod error;
pub mod mock;
pub mod notify;
pub mod recurrence;

mod manager;

pub use channels::{PopupChannel, SoundChannel, ToastChannel};
pub use checker::{check_snapshot, run_check, CheckOutcome, FiredReminder};
pub use dispatch::{ChannelOutcome, DeliveryReport, Dispatcher};
pub use error::{Error, Result};
pub use manager::{Manager, NewReminder, ReminderPatch};
pub use mock::MockChannel;
pub use notify::{
    DeliveryError, Notification, NotificationChannel, SoundRequest, SoundSource,
};
pub use recurrence::{advance, first_occurrence, is_due};

// Re-export the model so binaries only need one import path.
pub use remind_types::{Reminder, RepeatPolicy, Settings, Snapshot};
