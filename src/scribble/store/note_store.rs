use super::backend::StorageBackend;
use super::fs_backend::FsBackend;
use super::mem_backend::MemBackend;
use super::DataStore;
use crate::error::{Result, ScribbleError};
use crate::model::{normalize_input, Collection, Note};
use crate::theme::{Theme, THEME_RECORD};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub const DEFAULT_RETENTION_DAYS: i64 = 30;

pub struct NoteStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    active: Vec<Note>,
    trash: Vec<Note>,
    retention: Duration,
}

impl<B: StorageBackend> NoteStore<B> {
    /// Load both collections from the backend.
    ///
    /// Records that break the collection invariants are repaired and the repaired
    /// collections written back, so a repair happens once:
    /// - an active note carrying `deleted_at` loses it,
    /// - a trashed note without `deleted_at` is stamped with the load time,
    /// - a note present in both collections is kept only in the trash.
    pub fn open(backend: B) -> Result<Self> {
        let mut active = load_collection(&backend, Collection::Active)?;
        let mut trash = load_collection(&backend, Collection::Trash)?;
        let mut trash_repaired = false;
        let mut active_repaired = false;

        let now = Utc::now();
        for note in trash.iter_mut().filter(|n| n.deleted_at.is_none()) {
            warn!(id = %note.id, "trashed note without deletedAt, stamping load time");
            note.deleted_at = Some(now);
            trash_repaired = true;
        }

        let trashed_ids: HashSet<Uuid> = trash.iter().map(|n| n.id).collect();
        active.retain(|n| {
            let duplicate = trashed_ids.contains(&n.id);
            if duplicate {
                warn!(id = %n.id, "note found in both collections, keeping the trashed copy");
                active_repaired = true;
            }
            !duplicate
        });
        for note in active.iter_mut().filter(|n| n.deleted_at.is_some()) {
            warn!(id = %note.id, "active note carrying deletedAt, clearing it");
            note.deleted_at = None;
            active_repaired = true;
        }

        debug!(
            active = active.len(),
            trash = trash.len(),
            "note store opened"
        );

        let store = Self {
            backend,
            active,
            trash,
            retention: Duration::days(DEFAULT_RETENTION_DAYS),
        };
        if trash_repaired {
            store.persist(Collection::Trash)?;
        }
        if active_repaired {
            store.persist(Collection::Active)?;
        }
        Ok(store)
    }

    pub fn with_retention(mut self, retention: Duration) -> Self {
        self.retention = retention;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn collection(&self, collection: Collection) -> &[Note] {
        match collection {
            Collection::Active => &self.active,
            Collection::Trash => &self.trash,
        }
    }

    fn persist(&self, collection: Collection) -> Result<()> {
        let contents = serde_json::to_string_pretty(self.collection(collection))
            .map_err(ScribbleError::Serialization)?;
        self.backend
            .write_record(collection.record_name(), &contents)
    }

    fn active_position(&self, id: &Uuid) -> Option<usize> {
        self.active.iter().position(|n| n.id == *id)
    }

    fn trash_position(&self, id: &Uuid) -> Option<usize> {
        self.trash.iter().position(|n| n.id == *id)
    }
}

impl<B: StorageBackend> DataStore for NoteStore<B> {
    fn active(&self) -> &[Note] {
        &self.active
    }

    fn trash(&self) -> &[Note] {
        &self.trash
    }

    fn create_note(&mut self, title: &str, content: &str) -> Result<Option<Note>> {
        let Some((title, content)) = normalize_input(title, content) else {
            debug!("create skipped: empty title and content");
            return Ok(None);
        };

        let note = Note::new(title, content);
        self.active.insert(0, note.clone());
        info!(id = %note.id, title = %note.title, "note created");
        self.persist(Collection::Active)?;
        Ok(Some(note))
    }

    fn edit_note(&mut self, id: &Uuid, title: &str, content: &str) -> Result<Option<Note>> {
        let Some(pos) = self.active_position(id) else {
            debug!(%id, "edit skipped: not an active note");
            return Ok(None);
        };
        let Some((title, content)) = normalize_input(title, content) else {
            debug!(%id, "edit skipped: empty title and content");
            return Ok(None);
        };

        let note = &mut self.active[pos];
        note.title = title;
        note.content = content;
        note.last_modified = Some(Utc::now());
        let edited = note.clone();
        info!(id = %edited.id, "note edited");

        self.persist(Collection::Active)?;
        Ok(Some(edited))
    }

    fn delete_note(&mut self, id: &Uuid) -> Result<Option<Note>> {
        let Some(pos) = self.active_position(id) else {
            debug!(%id, "delete skipped: not an active note");
            return Ok(None);
        };

        let mut note = self.active.remove(pos);
        note.deleted_at = Some(Utc::now());
        self.trash.insert(0, note.clone());
        info!(id = %note.id, "note moved to trash");

        self.persist(Collection::Trash)?;
        self.persist(Collection::Active)?;
        Ok(Some(note))
    }

    fn restore_note(&mut self, id: &Uuid) -> Result<Option<Note>> {
        let Some(pos) = self.trash_position(id) else {
            debug!(%id, "restore skipped: not in trash");
            return Ok(None);
        };

        let mut note = self.trash.remove(pos);
        note.deleted_at = None;
        self.active.insert(0, note.clone());
        info!(id = %note.id, "note restored");

        self.persist(Collection::Active)?;
        self.persist(Collection::Trash)?;
        Ok(Some(note))
    }

    fn purge_one(&mut self, id: &Uuid) -> Result<Option<Note>> {
        let Some(pos) = self.trash_position(id) else {
            debug!(%id, "purge skipped: not in trash");
            return Ok(None);
        };

        let note = self.trash.remove(pos);
        info!(id = %note.id, "note purged");
        self.persist(Collection::Trash)?;
        Ok(Some(note))
    }

    fn purge_all(&mut self) -> Result<Vec<Note>> {
        if self.trash.is_empty() {
            return Ok(Vec::new());
        }

        let purged: Vec<Note> = self.trash.drain(..).collect();
        info!(count = purged.len(), "trash emptied");
        self.persist(Collection::Trash)?;
        Ok(purged)
    }

    fn sweep_expired(&mut self, now: DateTime<Utc>) -> Result<usize> {
        // A cutoff before the earliest representable time expires nothing
        let Some(cutoff) = now.checked_sub_signed(self.retention) else {
            return Ok(0);
        };
        let before = self.trash.len();
        self.trash
            .retain(|n| n.deleted_at.map_or(true, |deleted_at| deleted_at >= cutoff));
        let removed = before - self.trash.len();

        if removed > 0 {
            info!(removed, "expired notes swept from trash");
            self.persist(Collection::Trash)?;
        }
        Ok(removed)
    }

    fn theme(&self) -> Result<Theme> {
        let Some(raw) = self.backend.read_record(THEME_RECORD)? else {
            return Ok(Theme::default());
        };
        match serde_json::from_str::<bool>(raw.trim()) {
            Ok(dark) => Ok(Theme::from_dark_flag(dark)),
            Err(e) => {
                warn!(error = %e, "unreadable theme flag, falling back to light");
                Ok(Theme::default())
            }
        }
    }

    fn set_theme(&mut self, theme: Theme) -> Result<()> {
        let contents = serde_json::to_string(&theme.is_dark()).map_err(ScribbleError::Serialization)?;
        self.backend.write_record(THEME_RECORD, &contents)
    }
}

fn load_collection<B: StorageBackend>(backend: &B, collection: Collection) -> Result<Vec<Note>> {
    let Some(raw) = backend.read_record(collection.record_name())? else {
        return Ok(Vec::new());
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    serde_json::from_str(trimmed).map_err(ScribbleError::Serialization)
}

impl NoteStore<FsBackend> {
    /// Open (or lazily create) a store rooted at `root`.
    pub fn open_dir(root: PathBuf) -> Result<Self> {
        Self::open(FsBackend::new(root))
    }
}

impl NoteStore<MemBackend> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for NoteStore<MemBackend> {
    fn default() -> Self {
        Self {
            backend: MemBackend::new(),
            active: Vec::new(),
            trash: Vec::new(),
            retention: Duration::days(DEFAULT_RETENTION_DAYS),
        }
    }
}
