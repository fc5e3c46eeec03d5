use crate::config::NotesConfig;
use crate::models::Note;
use crate::projection::{display_order, project, LocaleTimestampFormat, NotesView, TimestampFormat};
use crate::repo::NoteRepository;
use crate::storage::{BrowserStorage, KeyValueStore, MemoryStorage, NoteStore, StorageError};
use crate::util::{RandomIds, SystemClock};
use leptos::prelude::*;
use std::sync::Arc;

/// Outcome of a controller operation; `Changed` means the view must refresh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    Changed,
    Unchanged,
}

impl Change {
    pub fn is_changed(self) -> bool {
        self == Change::Changed
    }
}

impl From<bool> for Change {
    fn from(changed: bool) -> Self {
        if changed {
            Change::Changed
        } else {
            Change::Unchanged
        }
    }
}

/// Id of the note being edited. Always re-resolved, never trusted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    active_id: Option<String>,
}

impl Selection {
    pub fn id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn set(&mut self, id: Option<String>) {
        self.active_id = id;
    }

    /// The active note, or `None` when unset or already deleted.
    pub fn active<'a>(&self, repo: &'a NoteRepository) -> Option<&'a Note> {
        repo.find_by_id(self.id())
    }
}

/// Owns the note list and the selection; the only mutator of either.
#[derive(Clone)]
pub struct NotesController {
    repo: NoteRepository,
    selection: Selection,
}

impl NotesController {
    /// Starts with the first stored note (the newest created) selected, if any.
    pub fn new(repo: NoteRepository) -> Self {
        let mut selection = Selection::default();
        selection.set(repo.notes().first().map(|n| n.id.clone()));
        Self { repo, selection }
    }

    pub fn repo(&self) -> &NoteRepository {
        &self.repo
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn active(&self) -> Option<&Note> {
        self.selection.active(&self.repo)
    }

    pub fn add(&mut self) -> Result<Change, StorageError> {
        let id = self.repo.create()?;
        self.selection.set(Some(id));
        Ok(Change::Changed)
    }

    pub fn delete_active(&mut self) -> Result<Change, StorageError> {
        let Some(id) = self.selection.id().map(str::to_string) else {
            return Ok(Change::Unchanged);
        };

        self.repo.delete(Some(&id))?;
        self.selection.set(first_in_display_order(&self.repo));
        Ok(Change::Changed)
    }

    pub fn select(&mut self, id: &str) -> Change {
        self.selection.set(Some(id.to_string()));
        Change::Changed
    }

    /// Writes the editor fields into the active note.
    pub fn edit(&mut self, title: &str, body: &str) -> Result<Change, StorageError> {
        let id = self.selection.id().map(str::to_string);
        self.repo.update(id.as_deref(), title, body).map(Change::from)
    }

    pub fn view(&self, fmt: &dyn TimestampFormat) -> NotesView {
        project(self.repo.notes(), self.active(), fmt)
    }
}

fn first_in_display_order(repo: &NoteRepository) -> Option<String> {
    display_order(repo.notes()).first().map(|n| n.id.clone())
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub controller: RwSignal<NotesController>,
    pub timestamp_format: LocaleTimestampFormat,
}

impl AppState {
    pub fn new(config: &NotesConfig) -> Self {
        let backend: Arc<dyn KeyValueStore> = if BrowserStorage::is_available() {
            Arc::new(BrowserStorage)
        } else {
            log::warn!("local storage unavailable; notes will not survive a reload");
            Arc::new(MemoryStorage::new())
        };

        let repo = NoteRepository::open(
            NoteStore::new(config.storage_key.clone(), backend),
            Arc::new(SystemClock),
            Arc::new(RandomIds),
        );

        Self::with_controller(
            NotesController::new(repo),
            LocaleTimestampFormat::new(config.locale.clone()),
        )
    }

    pub fn with_controller(controller: NotesController, timestamp_format: LocaleTimestampFormat) -> Self {
        Self {
            controller: RwSignal::new(controller),
            timestamp_format,
        }
    }

    /// Applies `op` and notifies subscribers only when it reports a change.
    pub fn apply(&self, op: impl FnOnce(&mut NotesController) -> Result<Change, StorageError>) {
        self.controller.maybe_update(|c| match op(c) {
            Ok(change) => change.is_changed(),
            // No retry; memory was not committed, so the view stays as it was.
            Err(err) => {
                log::error!("Failed to persist notes: {err}");
                false
            }
        });
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
