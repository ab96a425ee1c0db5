//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every scribble operation, whichever UI drives it.
//!
//! The facade:
//! - **Dispatches** to the matching `commands::*::run`
//! - **Normalizes inputs**: turns strings like `"1-3"` or `"d2"` into selectors
//! - **Returns structured types** (`Result<CmdResult>`), never strings for the terminal
//!
//! ## Selector Grammar
//!
//! - **Active index**: `N` (e.g. `1`, `42`)
//! - **Trashed index**: `dN` (e.g. `d1`)
//! - **Ranges**: `Start-End` (e.g. `1-5`, `d1-d3`). Both ends must be the same kind and
//!   start must be <= end, otherwise the call fails.
//! - **Search fallback**: if any input is not an index, all inputs are joined into one
//!   search term that must match a single note.
//!
//! Restore and purge only ever act on the trash, so bare numbers are read as trashed
//! indexes there: `restore 3` means `d3`.
//!
//! ## Generic Over DataStore
//!
//! `ScribbleApi<S: DataStore>` runs on a [`FileStore`](crate::store::FileStore) in
//! production and an [`InMemoryStore`](crate::store::InMemoryStore) in tests.

use crate::commands;
use crate::error::{Result, ScribbleError};
use crate::index::{parse_index_or_range, NoteSelector};
use crate::store::DataStore;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// The main API facade for scribble operations.
pub struct ScribbleApi<S: DataStore> {
    store: S,
    data_dir: PathBuf,
}

impl<S: DataStore> ScribbleApi<S> {
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self { store, data_dir }
    }

    pub fn create_note(&mut self, title: &str, content: &str) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, title, content)
    }

    pub fn list_notes(&self, filter: NoteFilter) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, filter)
    }

    pub fn view_notes<I: AsRef<str>>(&self, indexes: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(indexes)?;
        commands::view::run(&self.store, &selectors)
    }

    pub fn edit_note(&mut self, index: &str, update: NoteUpdate) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(&[index])?;
        match selectors.as_slice() {
            [selector @ (NoteSelector::Index(_) | NoteSelector::Title(_))] => {
                commands::update::run(&mut self.store, selector, update)
            }
            _ => Err(ScribbleError::Api(format!(
                "Edit takes a single note, got {}",
                index
            ))),
        }
    }

    pub fn delete_notes<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(indexes)?;
        commands::delete::run(&mut self.store, &selectors)
    }

    pub fn restore_notes<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors_for_deleted(indexes)?;
        commands::restore::run(&mut self.store, &selectors)
    }

    /// What `purge_notes` with the same input would remove. Empty input means the
    /// whole trash.
    pub fn purge_preview<I: AsRef<str>>(&self, indexes: &[I]) -> Result<PurgePreview> {
        let selectors = parse_selectors_for_deleted(indexes)?;
        commands::purge::preview(&self.store, &selectors)
    }

    pub fn purge_notes<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors_for_deleted(indexes)?;
        commands::purge::run(&mut self.store, &selectors)
    }

    pub fn sweep_expired(&mut self, now: DateTime<Utc>) -> Result<commands::CmdResult> {
        commands::sweep::run(&mut self.store, now)
    }

    pub fn theme(&mut self, action: ThemeAction) -> Result<commands::CmdResult> {
        commands::theme::run(&mut self.store, action)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<NoteSelector>> {
    let mut selectors: Vec<NoteSelector> = Vec::new();
    let mut parse_failed = false;

    for input in inputs {
        match parse_index_or_range(input.as_ref()) {
            Ok(selector) => {
                if !selectors.contains(&selector) {
                    selectors.push(selector);
                }
            }
            Err(e) => {
                // A malformed range is a user error, not a search term
                if e.contains("Invalid range") || e.contains("cannot mix") {
                    return Err(ScribbleError::Api(e));
                }
                parse_failed = true;
                break;
            }
        }
    }

    if !parse_failed {
        return Ok(selectors);
    }

    let search_term = inputs
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");

    Ok(vec![NoteSelector::Title(search_term)])
}

/// Bare numbers are trashed indexes here: "3" -> "d3", "1-3" -> "d1-d3".
fn parse_selectors_for_deleted<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<NoteSelector>> {
    let normalized: Vec<String> = inputs
        .iter()
        .map(|s| normalize_to_deleted_index(s.as_ref()))
        .collect();

    parse_selectors(&normalized)
}

fn normalize_to_deleted_index(s: &str) -> String {
    if let Some(dash_pos) = s.find('-') {
        if dash_pos > 0 {
            return format!(
                "{}-{}",
                normalize_single_to_deleted(&s[..dash_pos]),
                normalize_single_to_deleted(&s[dash_pos + 1..])
            );
        }
    }
    normalize_single_to_deleted(s)
}

fn normalize_single_to_deleted(s: &str) -> String {
    if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
        format!("d{}", s)
    } else {
        s.to_string()
    }
}

pub use commands::config::ConfigAction;
pub use commands::get::{NoteFilter, NoteStatusFilter};
pub use commands::purge::PurgePreview;
pub use commands::theme::ThemeAction;
pub use commands::update::NoteUpdate;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
