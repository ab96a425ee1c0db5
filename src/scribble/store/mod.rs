//! # Storage Layer
//!
//! This module defines the storage abstraction for scribble. The [`DataStore`] trait is
//! the only mutation path into note state: every lifecycle transition a UI can trigger
//! is one of its methods.
//!
//! ## Two Collections, Two Records
//!
//! Notes are kept in two ordered collections, each persisted as its own named record:
//!
//! | Collection | Record         | Order                          |
//! |------------|----------------|--------------------------------|
//! | Active     | `notes`        | newest created/restored first  |
//! | Trash      | `deletedNotes` | most recently deleted first    |
//!
//! A third record, `darkMode`, holds the theme flag. It shares the backend and nothing
//! else.
//!
//! ## Write-through
//!
//! State is read once when the store is opened. After that the store owns it: every
//! mutating call updates memory first and then rewrites the affected record(s). When
//! the write fails the call returns an error but the in-memory change stands, so the
//! caller can report the failure without losing what the user did.
//!
//! ## Silent No-ops
//!
//! Constraint violations are not errors. Empty input, or an id that does not name a
//! note in the expected collection, makes the call return `Ok(None)` (or an empty
//! `Vec`) and leaves both collections untouched.
//!
//! ## Implementations
//!
//! - [`FileStore`]: [`NoteStore`] over [`fs_backend::FsBackend`], one JSON file per record.
//! - [`InMemoryStore`]: [`NoteStore`] over [`mem_backend::MemBackend`], for tests.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── notes.json          # active collection
//! ├── deletedNotes.json   # trash collection
//! ├── darkMode.json       # theme flag
//! └── config.json         # settings (see config.rs)
//! ```

use crate::error::Result;
use crate::model::Note;
use crate::theme::Theme;
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod note_store;

pub use note_store::NoteStore;

pub type FileStore = NoteStore<fs_backend::FsBackend>;
pub type InMemoryStore = NoteStore<mem_backend::MemBackend>;

/// The note lifecycle operations.
///
/// Implementations must keep every note in exactly one collection, keep `deleted_at`
/// set exactly for trashed notes, and persist after each effective mutation.
pub trait DataStore {
    /// Active notes, newest first.
    fn active(&self) -> &[Note];

    /// Trashed notes, most recently deleted first.
    fn trash(&self) -> &[Note];

    /// Create a note at the front of the active collection.
    /// `None` when both fields are blank.
    fn create_note(&mut self, title: &str, content: &str) -> Result<Option<Note>>;

    /// Edit an active note in place.
    /// `None` when `id` is not active or both fields are blank.
    fn edit_note(&mut self, id: &Uuid, title: &str, content: &str) -> Result<Option<Note>>;

    /// Move an active note to the front of the trash.
    fn delete_note(&mut self, id: &Uuid) -> Result<Option<Note>>;

    /// Move a trashed note to the front of the active collection.
    fn restore_note(&mut self, id: &Uuid) -> Result<Option<Note>>;

    /// Permanently remove one trashed note.
    fn purge_one(&mut self, id: &Uuid) -> Result<Option<Note>>;

    /// Permanently remove every trashed note.
    fn purge_all(&mut self) -> Result<Vec<Note>>;

    /// Remove trashed notes deleted more than the retention period before `now`.
    fn sweep_expired(&mut self, now: DateTime<Utc>) -> Result<usize>;

    /// Current theme preference.
    fn theme(&self) -> Result<Theme>;

    /// Persist a theme preference.
    fn set_theme(&mut self, theme: Theme) -> Result<()>;
}
