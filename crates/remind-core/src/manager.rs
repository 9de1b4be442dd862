//! Management API: the CRUD surface over the store.
//!
//! Both the command line and any graphical editor go through this type.
//! Every operation is one locked load-mutate-save transaction, the same
//! discipline as the checker pass, so the two processes can never
//! interleave a write.

use std::path::PathBuf;

use chrono::{Local, NaiveDate, NaiveTime};
use tracing::info;
use uuid::Uuid;

use remind_store::Store;
use remind_types::{Reminder, RepeatPolicy};

use crate::error::{Error, Result};
use crate::recurrence;

/// Input for [`Manager::add`].
#[derive(Debug, Clone)]
pub struct NewReminder {
    pub title: String,
    pub description: String,
    pub time: NaiveTime,
    /// Explicit occurrence date. `None` seeds the nearest valid date.
    pub date: Option<NaiveDate>,
    pub repeat: RepeatPolicy,
    pub important: bool,
    pub sound: Option<PathBuf>,
    pub sound_secs: Option<f32>,
}

impl NewReminder {
    /// A minimal one-time reminder; builder-style setters cover the rest.
    pub fn new(title: impl Into<String>, time: NaiveTime) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            time,
            date: None,
            repeat: RepeatPolicy::None,
            important: false,
            sound: None,
            sound_secs: None,
        }
    }

    pub fn repeat(mut self, repeat: RepeatPolicy) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn important(mut self, important: bool) -> Self {
        self.important = important;
        self
    }
}

/// Partial update for [`Manager::update`]. `None` leaves a field alone;
/// the nested options for `sound`/`sound_secs` distinguish "leave alone"
/// from "clear".
#[derive(Debug, Clone, Default)]
pub struct ReminderPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub time: Option<NaiveTime>,
    pub date: Option<NaiveDate>,
    pub repeat: Option<RepeatPolicy>,
    pub important: Option<bool>,
    pub sound: Option<Option<PathBuf>>,
    pub sound_secs: Option<Option<f32>>,
    pub active: Option<bool>,
}

impl ReminderPatch {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.time.is_none()
            && self.date.is_none()
            && self.repeat.is_none()
            && self.important.is_none()
            && self.sound.is_none()
            && self.sound_secs.is_none()
            && self.active.is_none()
    }

    fn reschedules(&self) -> bool {
        self.time.is_some() || self.date.is_some() || self.repeat.is_some()
    }
}

/// The reminder management API.
pub struct Manager {
    store: Store,
}

impl Manager {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// The underlying store (for the checker, which shares it).
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Create a reminder and persist it. Returns the stored value with its
    /// assigned id and seeded occurrence.
    pub fn add(&self, new: NewReminder) -> Result<Reminder> {
        let title = new.title.trim().to_string();
        if title.is_empty() {
            return Err(Error::validation("title must not be empty"));
        }
        if let RepeatPolicy::Every { days: 0 } = new.repeat {
            return Err(Error::validation("repeat interval must be at least 1 day"));
        }

        let lock = self.store.lock()?;
        let mut snapshot = lock.load()?;

        let now = Local::now().naive_local();
        let reminder = Reminder {
            id: Uuid::new_v4(),
            title,
            description: new.description,
            trigger_time: new.time,
            repeat: new.repeat,
            next_occurrence: recurrence::first_occurrence(new.date, new.time, new.repeat, now),
            important: new.important,
            sound: new.sound,
            sound_secs: new.sound_secs,
            active: true,
            created_at: now,
        };

        snapshot.reminders.push(reminder.clone());
        lock.save(&snapshot)?;

        info!(
            "added reminder {} '{}' for {}",
            reminder.short_id(),
            reminder.title,
            reminder.next_occurrence
        );
        Ok(reminder)
    }

    /// All reminders, inactive included, ordered by next occurrence.
    pub fn list(&self) -> Result<Vec<Reminder>> {
        let lock = self.store.lock()?;
        let mut reminders = lock.load()?.reminders;
        reminders.sort_by_key(|r| r.next_occurrence);
        Ok(reminders)
    }

    /// Look up one reminder by id or unique id prefix.
    pub fn get(&self, id: &str) -> Result<Reminder> {
        let lock = self.store.lock()?;
        let snapshot = lock.load()?;
        let index = resolve(&snapshot.reminders, id)?;
        Ok(snapshot.reminders[index].clone())
    }

    /// Apply a partial update. Changing the schedule re-seeds the next
    /// occurrence; re-activating a retired reminder does too, so it cannot
    /// come back already overdue.
    pub fn update(&self, id: &str, patch: ReminderPatch) -> Result<Reminder> {
        if patch.is_empty() {
            return Err(Error::validation("nothing to update"));
        }
        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(Error::validation("title must not be empty"));
            }
        }
        if let Some(RepeatPolicy::Every { days: 0 }) = patch.repeat {
            return Err(Error::validation("repeat interval must be at least 1 day"));
        }

        let lock = self.store.lock()?;
        let mut snapshot = lock.load()?;
        let index = resolve(&snapshot.reminders, id)?;

        let reminder = &mut snapshot.reminders[index];
        let reschedules = patch.reschedules();
        let explicit_date = patch.date;
        let reactivated = patch.active == Some(true) && !reminder.active;

        if let Some(title) = patch.title {
            reminder.title = title.trim().to_string();
        }
        if let Some(description) = patch.description {
            reminder.description = description;
        }
        if let Some(time) = patch.time {
            reminder.trigger_time = time;
        }
        if let Some(repeat) = patch.repeat {
            reminder.repeat = repeat;
        }
        if let Some(important) = patch.important {
            reminder.important = important;
        }
        if let Some(sound) = patch.sound {
            reminder.sound = sound;
        }
        if let Some(sound_secs) = patch.sound_secs {
            reminder.sound_secs = sound_secs;
        }
        if let Some(active) = patch.active {
            reminder.active = active;
        }

        if reschedules || reactivated {
            let now = Local::now().naive_local();
            reminder.next_occurrence = recurrence::first_occurrence(
                explicit_date,
                reminder.trigger_time,
                reminder.repeat,
                now,
            );
        }

        let updated = reminder.clone();
        lock.save(&snapshot)?;
        info!("updated reminder {}", updated.short_id());
        Ok(updated)
    }

    /// Flip a reminder between active and retired. Re-enabling seeds a
    /// fresh future occurrence.
    pub fn toggle(&self, id: &str) -> Result<Reminder> {
        let lock = self.store.lock()?;
        let mut snapshot = lock.load()?;
        let index = resolve(&snapshot.reminders, id)?;

        let reminder = &mut snapshot.reminders[index];
        reminder.active = !reminder.active;
        if reminder.active {
            let now = Local::now().naive_local();
            if reminder.next_occurrence <= now {
                reminder.next_occurrence =
                    recurrence::first_occurrence(None, reminder.trigger_time, reminder.repeat, now);
            }
        }

        let toggled = reminder.clone();
        lock.save(&snapshot)?;
        info!(
            "reminder {} is now {}",
            toggled.short_id(),
            if toggled.active { "active" } else { "disabled" }
        );
        Ok(toggled)
    }

    /// Delete a reminder. Returns the removed value for confirmation.
    pub fn delete(&self, id: &str) -> Result<Reminder> {
        let lock = self.store.lock()?;
        let mut snapshot = lock.load()?;
        let index = resolve(&snapshot.reminders, id)?;

        let removed = snapshot.reminders.remove(index);
        lock.save(&snapshot)?;
        info!("deleted reminder {}", removed.short_id());
        Ok(removed)
    }

    /// Delete every reminder. Returns how many were removed.
    pub fn clear(&self) -> Result<usize> {
        let lock = self.store.lock()?;
        let mut snapshot = lock.load()?;
        let count = snapshot.reminders.len();
        snapshot.reminders.clear();
        lock.save(&snapshot)?;
        info!("cleared {} reminder(s)", count);
        Ok(count)
    }

    /// Store-wide default-sound setting for important reminders without a
    /// custom asset.
    pub fn set_default_sound(&self, on: bool) -> Result<()> {
        let lock = self.store.lock()?;
        let mut snapshot = lock.load()?;
        snapshot.settings.default_sound = on;
        lock.save(&snapshot)?;
        Ok(())
    }
}

/// Resolve an id or id prefix against the reminder list.
///
/// Accepts the full hyphenated UUID or any prefix of its compact form
/// (the `short_id` display). A prefix matching several reminders is
/// rejected rather than guessed at.
fn resolve(reminders: &[Reminder], needle: &str) -> Result<usize> {
    let needle = needle.trim().replace('-', "").to_ascii_lowercase();
    if needle.is_empty() {
        return Err(Error::validation("reminder id must not be empty"));
    }

    let matches: Vec<usize> = reminders
        .iter()
        .enumerate()
        .filter(|(_, r)| r.id.simple().to_string().starts_with(&needle))
        .map(|(i, _)| i)
        .collect();

    match matches.as_slice() {
        [index] => Ok(*index),
        [] => Err(Error::NotFound(needle)),
        _ => Err(Error::AmbiguousId(needle)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn manager() -> (Manager, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path().join("reminders.json")).unwrap();
        (Manager::new(store), dir)
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_add_assigns_id_and_persists() {
        let (manager, _dir) = manager();

        let added = manager
            .add(NewReminder::new("Water plants", hm(18, 0)).repeat(RepeatPolicy::Daily))
            .unwrap();

        let listed = manager.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, added.id);
        assert_eq!(listed[0].title, "Water plants");
        assert!(listed[0].active);
    }

    #[test]
    fn test_add_seeds_future_occurrence() {
        let (manager, _dir) = manager();
        let added = manager
            .add(NewReminder::new("Stretch", hm(0, 0)).repeat(RepeatPolicy::Daily))
            .unwrap();
        assert!(added.next_occurrence > Local::now().naive_local());
    }

    #[test]
    fn test_add_rejects_empty_title() {
        let (manager, _dir) = manager();
        let err = manager.add(NewReminder::new("   ", hm(9, 0))).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(manager.list().unwrap().is_empty());
    }

    #[test]
    fn test_add_rejects_zero_interval() {
        let (manager, _dir) = manager();
        let err = manager
            .add(NewReminder::new("Bad", hm(9, 0)).repeat(RepeatPolicy::Every { days: 0 }))
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_get_by_prefix() {
        let (manager, _dir) = manager();
        let added = manager.add(NewReminder::new("Find me", hm(9, 0))).unwrap();

        let found = manager.get(&added.short_id()).unwrap();
        assert_eq!(found.id, added.id);

        // Full hyphenated id works too.
        let found = manager.get(&added.id.to_string()).unwrap();
        assert_eq!(found.id, added.id);
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let (manager, _dir) = manager();
        manager.add(NewReminder::new("A", hm(9, 0))).unwrap();

        let err = manager.get("ffffffff").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_update_title_and_flags() {
        let (manager, _dir) = manager();
        let added = manager.add(NewReminder::new("Old title", hm(9, 0))).unwrap();

        let updated = manager
            .update(
                &added.short_id(),
                ReminderPatch {
                    title: Some("New title".to_string()),
                    important: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.title, "New title");
        assert!(updated.important);
        // Schedule untouched by a non-schedule patch.
        assert_eq!(updated.next_occurrence, added.next_occurrence);
    }

    #[test]
    fn test_update_time_reschedules() {
        let (manager, _dir) = manager();
        let added = manager
            .add(NewReminder::new("Move me", hm(9, 0)).repeat(RepeatPolicy::Daily))
            .unwrap();

        let updated = manager
            .update(
                &added.short_id(),
                ReminderPatch {
                    time: Some(hm(21, 30)),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.trigger_time, hm(21, 30));
        assert_eq!(updated.next_occurrence.time(), hm(21, 30));
        assert!(updated.next_occurrence > Local::now().naive_local());
    }

    #[test]
    fn test_update_empty_patch_is_rejected() {
        let (manager, _dir) = manager();
        let added = manager.add(NewReminder::new("A", hm(9, 0))).unwrap();
        let err = manager
            .update(&added.short_id(), ReminderPatch::default())
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let (manager, _dir) = manager();
        let err = manager
            .update(
                "ffffffff",
                ReminderPatch {
                    title: Some("X".to_string()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_toggle_retires_and_reactivates_into_the_future() {
        let (manager, _dir) = manager();
        let added = manager
            .add(NewReminder::new("Flip", hm(9, 0)).repeat(RepeatPolicy::Daily))
            .unwrap();

        let off = manager.toggle(&added.short_id()).unwrap();
        assert!(!off.active);

        let on = manager.toggle(&added.short_id()).unwrap();
        assert!(on.active);
        assert!(on.next_occurrence > Local::now().naive_local());
    }

    #[test]
    fn test_delete_removes_and_returns() {
        let (manager, _dir) = manager();
        let added = manager.add(NewReminder::new("Doomed", hm(9, 0))).unwrap();
        let keep = manager.add(NewReminder::new("Keeper", hm(10, 0))).unwrap();

        let removed = manager.delete(&added.short_id()).unwrap();
        assert_eq!(removed.id, added.id);

        let listed = manager.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, keep.id);

        let err = manager.delete(&added.short_id()).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_clear_removes_everything() {
        let (manager, _dir) = manager();
        manager.add(NewReminder::new("A", hm(9, 0))).unwrap();
        manager.add(NewReminder::new("B", hm(10, 0))).unwrap();

        assert_eq!(manager.clear().unwrap(), 2);
        assert!(manager.list().unwrap().is_empty());
    }

    #[test]
    fn test_set_default_sound_persists() {
        let (manager, _dir) = manager();
        manager.set_default_sound(false).unwrap();

        let lock = manager.store().lock().unwrap();
        let snapshot = lock.load().unwrap();
        assert!(!snapshot.settings.default_sound);
    }

    #[test]
    fn test_list_sorted_by_next_occurrence() {
        let (manager, _dir) = manager();
        manager
            .add(NewReminder::new("Later", hm(9, 0)).repeat(RepeatPolicy::Every { days: 30 }))
            .unwrap();
        manager
            .add(NewReminder::new("Sooner", hm(9, 0)).repeat(RepeatPolicy::Daily))
            .unwrap();

        let listed = manager.list().unwrap();
        assert_eq!(listed[0].title, "Sooner");
        assert_eq!(listed[1].title, "Later");
    }
}
