//! # Domain Model
//!
//! A [`Note`] is the only entity scribble knows about. It lives in exactly one of two
//! ordered collections, described by [`Collection`]:
//!
//! - **Active**: newest (created or restored) first. Editing never reorders.
//! - **Trash**: most recently deleted first. Every trashed note carries `deleted_at`.
//!
//! ## Lifecycle
//!
//! ```text
//!            create
//!              │
//!              ▼
//!   ┌──────► Active ──delete──► Trashed ──purge / expiry──► Gone
//!   │                              │
//!   └───────────restore────────────┘
//! ```
//!
//! `Gone` is terminal: purged notes are dropped from storage and no reference to them
//! resolves again.
//!
//! ## Input Normalization
//!
//! Both create and edit go through [`normalize_input`]:
//!
//! 1. Title and content are trimmed.
//! 2. If both are empty the operation is a no-op (`None`).
//! 3. An empty title becomes [`UNTITLED`].
//!
//! Title and content emptiness are independent, so a note can have an empty body or
//! an `"Untitled"` title, but never both empty.
//!
//! ## On-disk Shape
//!
//! Notes serialize with camelCase keys (`createdAt`, `lastModified`, `deletedAt`).
//! Records written before ids existed are accepted: a missing `id` gets a fresh one,
//! and `timestamp` is read as `createdAt`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const UNTITLED: &str = "Untitled";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collection {
    Active,
    Trash,
}

impl Collection {
    /// Name of the persisted record holding this collection.
    pub fn record_name(&self) -> &'static str {
        match self {
            Collection::Active => "notes",
            Collection::Trash => "deletedNotes",
        }
    }
}

fn fresh_id() -> Uuid {
    Uuid::new_v4()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(default = "fresh_id")]
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(alias = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Note {
    /// Builds a fresh active note. Callers are expected to pass already
    /// normalized fields (see [`normalize_input`]).
    pub fn new(title: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            created_at: Utc::now(),
            last_modified: None,
            deleted_at: None,
        }
    }

    pub fn is_trashed(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// The most recent of `created_at` and `last_modified`.
    pub fn touched_at(&self) -> DateTime<Utc> {
        self.last_modified.unwrap_or(self.created_at)
    }

    /// Single-line preview of the body, at most `max_chars` characters.
    pub fn preview(&self, max_chars: usize) -> String {
        self.content
            .chars()
            .take(max_chars)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect()
    }
}

/// Trims user input and applies the title default.
///
/// Returns `None` when both fields are empty after trimming, which callers treat as
/// a silent no-op.
pub fn normalize_input(title: &str, content: &str) -> Option<(String, String)> {
    let title = title.trim();
    let content = content.trim();

    if title.is_empty() && content.is_empty() {
        return None;
    }

    let title = if title.is_empty() { UNTITLED } else { title };
    Some((title.to_string(), content.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_empty_is_rejected() {
        assert_eq!(normalize_input("", ""), None);
        assert_eq!(normalize_input("   ", "\n"), None);
        assert_eq!(normalize_input("\t", "  \n  "), None);
    }

    #[test]
    fn empty_title_becomes_untitled() {
        assert_eq!(
            normalize_input("", "hello"),
            Some(("Untitled".to_string(), "hello".to_string()))
        );
        assert_eq!(
            normalize_input("   ", "  hello  "),
            Some(("Untitled".to_string(), "hello".to_string()))
        );
    }

    #[test]
    fn title_only_keeps_empty_content() {
        assert_eq!(
            normalize_input(" Groceries ", ""),
            Some(("Groceries".to_string(), String::new()))
        );
    }

    #[test]
    fn new_note_is_active() {
        let note = Note::new("A".into(), "b".into());
        assert!(!note.is_trashed());
        assert!(note.last_modified.is_none());
        assert_eq!(note.touched_at(), note.created_at);
    }

    #[test]
    fn serializes_with_camel_case_and_skips_absent_fields() {
        let note = Note::new("A".into(), "b".into());
        let json = serde_json::to_value(&note).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("lastModified").is_none());
        assert!(json.get("deletedAt").is_none());
    }

    #[test]
    fn reads_legacy_records_without_id() {
        let raw = r#"{"title":"Old","content":"x","timestamp":"2024-03-01T10:00:00Z"}"#;
        let note: Note = serde_json::from_str(raw).unwrap();
        assert_eq!(note.title, "Old");
        assert_eq!(note.created_at.to_rfc3339(), "2024-03-01T10:00:00+00:00");
        assert!(!note.id.is_nil());
    }

    #[test]
    fn preview_flattens_newlines() {
        let note = Note::new("T".into(), "one\ntwo\nthree".into());
        assert_eq!(note.preview(7), "one two");
    }

    #[test]
    fn record_names_match_storage_keys() {
        assert_eq!(Collection::Active.record_name(), "notes");
        assert_eq!(Collection::Trash.record_name(), "deletedNotes");
    }
}
