//! In-memory note list mirrored to a [`NoteStore`].
//!
//! Every mutation writes the candidate list to storage first and only then
//! commits it in memory, so a failed write leaves both sides unchanged.

use crate::models::Note;
use crate::storage::{NoteStore, StorageError};
use crate::util::{Clock, IdSource};
use std::sync::Arc;

#[derive(Clone)]
pub struct NoteRepository {
    notes: Vec<Note>,
    store: NoteStore,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdSource>,
}

impl NoteRepository {
    /// Loads whatever the store holds (possibly nothing).
    pub fn open(store: NoteStore, clock: Arc<dyn Clock>, ids: Arc<dyn IdSource>) -> Self {
        let notes = store.load();
        log::debug!("loaded {} notes from `{}`", notes.len(), store.key());
        Self {
            notes,
            store,
            clock,
            ids,
        }
    }

    /// Notes in storage order. Display order is derived by the projection.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn find_by_id(&self, id: Option<&str>) -> Option<&Note> {
        let id = id?;
        self.notes.iter().find(|n| n.id == id)
    }

    /// Inserts a blank note at the head and returns its id.
    pub fn create(&mut self) -> Result<String, StorageError> {
        let mut id = self.ids.next_id();
        while self.notes.iter().any(|n| n.id == id) {
            id = self.ids.next_id();
        }

        let mut next = Vec::with_capacity(self.notes.len() + 1);
        next.push(Note::blank(id.clone(), self.clock.now_ms()));
        next.extend(self.notes.iter().cloned());

        self.commit(next)?;
        Ok(id)
    }

    /// Removes the note with `id`. Returns `false` (and skips storage) when absent.
    pub fn delete(&mut self, id: Option<&str>) -> Result<bool, StorageError> {
        let Some(id) = id else {
            return Ok(false);
        };
        if !self.notes.iter().any(|n| n.id == id) {
            return Ok(false);
        }

        let next: Vec<Note> = self.notes.iter().filter(|n| n.id != id).cloned().collect();
        self.commit(next)?;
        Ok(true)
    }

    /// Replaces title and body, stripping leading whitespace only.
    ///
    /// Returns `false` (and skips storage) when `id` is `None` or unknown.
    pub fn update(&mut self, id: Option<&str>, title: &str, body: &str) -> Result<bool, StorageError> {
        let Some(id) = id else {
            return Ok(false);
        };
        let Some(idx) = self.notes.iter().position(|n| n.id == id) else {
            return Ok(false);
        };

        let mut next = self.notes.clone();
        let note = &mut next[idx];
        note.title = title.trim_start().to_string();
        note.body = body.trim_start().to_string();
        note.updated_at = self.clock.now_ms();

        self.commit(next)?;
        Ok(true)
    }

    fn commit(&mut self, next: Vec<Note>) -> Result<(), StorageError> {
        self.store.save(&next)?;
        self.notes = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStorage, DEFAULT_NOTES_KEY};
    use crate::util::{RandomIds, SequentialIds, StepClock};
    use std::collections::HashSet;

    fn open_with(mem: &MemoryStorage, clock: Arc<StepClock>) -> NoteRepository {
        NoteRepository::open(
            NoteStore::new(DEFAULT_NOTES_KEY, Arc::new(mem.clone())),
            clock,
            Arc::new(SequentialIds::new("n")),
        )
    }

    fn reload(mem: &MemoryStorage) -> Vec<Note> {
        NoteStore::new(DEFAULT_NOTES_KEY, Arc::new(mem.clone())).load()
    }

    #[test]
    fn test_create_inserts_blank_note_at_head_and_persists() {
        let mem = MemoryStorage::new();
        let mut repo = open_with(&mem, Arc::new(StepClock::new(1_000, 1)));

        let first = repo.create().expect("create should succeed");
        let second = repo.create().expect("create should succeed");

        assert_eq!(repo.notes()[0].id, second);
        assert_eq!(repo.notes()[1].id, first);

        let created = repo.find_by_id(Some(&first)).expect("note should exist");
        assert!(created.title.is_empty());
        assert!(created.body.is_empty());
        assert_eq!(created.updated_at, 1_000);

        assert_eq!(reload(&mem), repo.notes());
    }

    #[test]
    fn test_create_ids_are_pairwise_distinct() {
        let mem = MemoryStorage::new();
        let mut repo = NoteRepository::open(
            NoteStore::new(DEFAULT_NOTES_KEY, Arc::new(mem)),
            Arc::new(StepClock::fixed(1)),
            Arc::new(RandomIds),
        );

        let ids: Vec<String> = (0..50).map(|_| repo.create().expect("create should succeed")).collect();
        let unique: HashSet<&String> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_create_skips_ids_already_present() {
        let mem = MemoryStorage::with_item(
            DEFAULT_NOTES_KEY,
            r#"[{"id":"n-1","title":"old","body":"","updatedAt":1}]"#,
        );
        let mut repo = open_with(&mem, Arc::new(StepClock::fixed(5)));

        let id = repo.create().expect("create should succeed");
        assert_eq!(id, "n-2");
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_update_trims_leading_whitespace_only() {
        let mem = MemoryStorage::new();
        let mut repo = open_with(&mem, Arc::new(StepClock::new(10, 10)));
        let id = repo.create().expect("create should succeed");

        let changed = repo
            .update(Some(&id), " hello", " world  \n")
            .expect("update should succeed");
        assert!(changed);

        let note = repo.find_by_id(Some(&id)).expect("note should exist");
        assert_eq!(note.title, "hello");
        assert_eq!(note.body, "world  \n");
        assert_eq!(note.updated_at, 20);
    }

    #[test]
    fn test_update_absent_id_is_byte_identical_noop() {
        let mem = MemoryStorage::new();
        let mut repo = open_with(&mem, Arc::new(StepClock::new(10, 10)));
        repo.create().expect("create should succeed");

        let before_mem = repo.notes().to_vec();
        let before_raw = mem.raw(DEFAULT_NOTES_KEY);

        assert!(!repo.update(None, "x", "y").expect("noop should succeed"));
        assert!(!repo.update(Some("missing"), "x", "y").expect("noop should succeed"));

        assert_eq!(repo.notes(), before_mem.as_slice());
        assert_eq!(mem.raw(DEFAULT_NOTES_KEY), before_raw);
    }

    #[test]
    fn test_delete_removes_and_persists() {
        let mem = MemoryStorage::new();
        let mut repo = open_with(&mem, Arc::new(StepClock::new(1, 1)));
        let a = repo.create().expect("create should succeed");
        let b = repo.create().expect("create should succeed");

        assert!(repo.delete(Some(&a)).expect("delete should succeed"));
        assert!(repo.find_by_id(Some(&a)).is_none());
        assert_eq!(reload(&mem).len(), 1);
        assert_eq!(reload(&mem)[0].id, b);
    }

    #[test]
    fn test_delete_absent_id_is_noop() {
        let mem = MemoryStorage::new();
        let mut repo = open_with(&mem, Arc::new(StepClock::fixed(1)));
        repo.create().expect("create should succeed");
        let before_raw = mem.raw(DEFAULT_NOTES_KEY);

        assert!(!repo.delete(None).expect("noop should succeed"));
        assert!(!repo.delete(Some("missing")).expect("noop should succeed"));
        assert_eq!(repo.len(), 1);
        assert_eq!(mem.raw(DEFAULT_NOTES_KEY), before_raw);
    }

    #[test]
    fn test_find_by_id_none() {
        let mem = MemoryStorage::new();
        let repo = open_with(&mem, Arc::new(StepClock::fixed(1)));
        assert!(repo.find_by_id(None).is_none());
        assert!(repo.is_empty());
    }

    #[test]
    fn test_groceries_scenario() {
        let mem = MemoryStorage::new();
        let clock = Arc::new(StepClock::new(5_000, 7));
        let mut repo = open_with(&mem, clock);

        let id = repo.create().expect("create should succeed");
        let created_at = repo.find_by_id(Some(&id)).map(|n| n.updated_at).unwrap_or_default();

        repo.update(Some(&id), "Groceries", "Milk, eggs")
            .expect("update should succeed");

        let loaded = reload(&mem);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "Groceries");
        assert_eq!(loaded[0].body, "Milk, eggs");
        assert!(loaded[0].updated_at >= created_at);
    }

    struct ReadOnlyStorage(MemoryStorage);

    impl KeyValueStore for ReadOnlyStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get_item(key)
        }

        fn set_item(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
            })
        }
    }

    #[test]
    fn test_failed_write_leaves_memory_unchanged() {
        let mem = MemoryStorage::with_item(
            DEFAULT_NOTES_KEY,
            r#"[{"id":"a","title":"t","body":"b","updatedAt":1}]"#,
        );
        let mut repo = NoteRepository::open(
            NoteStore::new(DEFAULT_NOTES_KEY, Arc::new(ReadOnlyStorage(mem))),
            Arc::new(StepClock::fixed(9)),
            Arc::new(SequentialIds::new("n")),
        );

        assert!(repo.create().is_err());
        assert!(repo.update(Some("a"), "x", "y").is_err());
        assert!(repo.delete(Some("a")).is_err());

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.notes()[0].title, "t");
        assert_eq!(repo.notes()[0].updated_at, 1);
    }
}
