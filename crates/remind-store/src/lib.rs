//! Durable persistence for reminders.
//!
//! This crate owns the single JSON document that holds all reminders and
//! store-wide settings, and the concurrency contract around it:
//!
//! - Every load+save pair runs under a scoped exclusive lock
//!   ([`Store::lock`]), because an interactive editing process and the
//!   periodic checker may touch the file at the same time.
//! - Saves are atomic replaces (write to a temporary file, then rename),
//!   so a crash mid-write never leaves a half-written store.
//! - A missing file reads as an empty document; an unparsable file is a
//!   hard [`Error::Corrupt`] and is never silently discarded.
//!
//! # Example
//!
//! ```no_run
//! use remind_store::Store;
//!
//! let store = Store::open_default()?;
//! let lock = store.lock()?;
//! let snapshot = lock.load()?;
//! println!("{} reminders", snapshot.reminders.len());
//! # Ok::<(), remind_store::Error>(())
//! ```

mod error;
mod store;

pub use error::{Error, Result};
pub use store::{Store, StoreLock, StoreOptions};

/// Default store path following platform conventions.
///
/// - Linux: `~/.local/share/remind/reminders.json`
/// - macOS: `~/Library/Application Support/remind/reminders.json`
/// - Windows: `C:\Users\<user>\AppData\Local\remind\reminders.json`
pub fn default_store_path() -> std::path::PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("remind")
        .join("reminders.json")
}
