//! # Command Layer
//!
//! Each command lives in its own submodule and exposes a `run` function that takes a
//! [`DataStore`](crate::store::DataStore), resolves whatever the user typed into note
//! ids, calls the store, and returns a [`CmdResult`].
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: No stdout, stderr or terminal concerns
//! - **Argument parsing**: That's the CLI layer's job
//! - **User interaction**: No prompts. Purge exposes a [`purge::preview`] so the UI can
//!   confirm before calling [`purge::run`]
//!
//! ## No-ops Stay Quiet
//!
//! When the store skips an operation (blank input, a reference that no longer points
//! at a note in the right collection) the command returns an empty `CmdResult` with no
//! message. The UI simply re-renders.
//!
//! ## Command Modules
//!
//! - [`create`]: Create a note
//! - [`get`]: List notes, optionally filtered
//! - [`view`]: Retrieve specific notes
//! - [`update`]: Edit a note in place
//! - [`delete`]: Move notes to the trash
//! - [`restore`]: Bring notes back from the trash
//! - [`purge`]: Permanently remove trashed notes
//! - [`sweep`]: Drop trashed notes past the retention period
//! - [`theme`]: Read and change the light/dark preference
//! - [`config`]: Read and change settings
//! - [`helpers`]: Index resolution shared by the above

use crate::config::ScribbleConfig;
use crate::index::DisplayNote;
use crate::theme::Theme;
use serde::Serialize;

pub mod config;
pub mod create;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod purge;
pub mod restore;
pub mod sweep;
pub mod theme;
pub mod update;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Notes changed by the command, with their post-operation index.
    pub affected_notes: Vec<DisplayNote>,
    /// Notes to display, with their current index.
    pub listed_notes: Vec<DisplayNote>,
    pub messages: Vec<CmdMessage>,
    /// Trashed notes removed by the retention sweep.
    pub swept: usize,
    pub theme: Option<Theme>,
    pub config: Option<ScribbleConfig>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.listed_notes = notes;
        self
    }

    /// True when the command changed nothing and has nothing to say.
    pub fn is_noop(&self) -> bool {
        self.affected_notes.is_empty() && self.messages.is_empty() && self.swept == 0
    }
}
