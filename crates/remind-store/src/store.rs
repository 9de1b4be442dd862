//! Main store implementation.

use std::fs::{self, File, OpenOptions, TryLockError};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use remind_types::Snapshot;

use crate::error::{Error, Result};

/// Tuning knobs for store access.
#[derive(Debug, Clone, Copy)]
pub struct StoreOptions {
    /// Upper bound on how long [`Store::lock`] waits for the other process
    /// to release the store before giving up with [`Error::LockTimeout`].
    pub lock_wait: Duration,
    /// How often the lock is re-attempted while waiting.
    pub lock_poll: Duration,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            lock_wait: Duration::from_secs(10),
            lock_poll: Duration::from_millis(50),
        }
    }
}

/// File-backed store for the reminder document.
///
/// Two independent processes share the same file: the interactive
/// management surface and the periodic checker. Every load+save pair runs
/// under an exclusive advisory lock obtained via [`Store::lock`], so the
/// two never interleave a write. Reads also go through the lock: the
/// document is never observed mid-transaction.
///
/// # Example
///
/// ```no_run
/// use remind_store::Store;
///
/// let store = Store::open_default()?;
/// let lock = store.lock()?;
/// let mut snapshot = lock.load()?;
/// snapshot.settings.default_sound = false;
/// lock.save(&snapshot)?;
/// // lock released when `lock` goes out of scope
/// # Ok::<(), remind_store::Error>(())
/// ```
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    options: StoreOptions,
}

impl Store {
    /// Open a store at the given path, creating parent directories if
    /// needed. The file itself is created lazily by the first `save`.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self> {
        Self::with_options(path, StoreOptions::default())
    }

    /// Open a store with explicit options.
    pub fn with_options<P: Into<PathBuf>>(path: P, options: StoreOptions) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| Error::CreateDirectory {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }
        Ok(Self { path, options })
    }

    /// Open the default store location.
    pub fn open_default() -> Result<Self> {
        Self::open(crate::default_store_path())
    }

    /// Path of the persisted document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    /// Acquire exclusive access to the store, waiting at most
    /// `options.lock_wait`.
    ///
    /// The lock lives on a sidecar `.lock` file so that the document itself
    /// can still be atomically replaced while locked. It is released on
    /// every exit path when the returned guard drops.
    pub fn lock(&self) -> Result<StoreLock<'_>> {
        let lock_path = self.lock_path();
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .read(true)
            .write(true)
            .open(&lock_path)?;

        let started = Instant::now();
        loop {
            match file.try_lock() {
                Ok(()) => break,
                Err(TryLockError::WouldBlock) => {
                    if started.elapsed() >= self.options.lock_wait {
                        return Err(Error::LockTimeout {
                            path: self.path.clone(),
                            waited: started.elapsed(),
                        });
                    }
                    std::thread::sleep(self.options.lock_poll);
                }
                Err(TryLockError::Error(e)) => return Err(e.into()),
            }
        }

        debug!(
            "acquired store lock on {} after {:?}",
            lock_path.display(),
            started.elapsed()
        );
        Ok(StoreLock { store: self, file })
    }
}

/// Exclusive access to the store for one load+save transaction.
///
/// Dropping the guard releases the lock, so access is scoped to a single
/// transaction on every exit path, including early returns and panics.
#[derive(Debug)]
pub struct StoreLock<'a> {
    store: &'a Store,
    file: File,
}

impl StoreLock<'_> {
    /// Load the full document.
    ///
    /// A store that does not exist yet reads as the default snapshot
    /// (no reminders, `default_sound = true`, `last_check = None`). A store
    /// that exists but cannot be parsed is a hard error: the file is left
    /// as-is for manual recovery rather than silently discarded.
    pub fn load(&self) -> Result<Snapshot> {
        let path = self.store.path();
        if !path.exists() {
            debug!("store {} does not exist yet, starting empty", path.display());
            return Ok(Snapshot::default());
        }

        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|source| Error::Corrupt {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Persist the full document with an atomic replace.
    ///
    /// The document is written to a temporary file in the same directory
    /// and renamed over the target, so a crash mid-write never leaves a
    /// half-written store.
    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let path = self.store.path();
        let json = serde_json::to_vec_pretty(snapshot).map_err(Error::Serialize)?;

        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&json)?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| Error::Replace {
            path: path.to_path_buf(),
            source: e.error,
        })?;

        debug!(
            "saved {} reminders to {}",
            snapshot.reminders.len(),
            path.display()
        );
        Ok(())
    }
}

impl Drop for StoreLock<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.file.unlock() {
            warn!("failed to release store lock: {}", e);
        }
    }
}
