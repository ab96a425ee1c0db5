use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{DisplayIndex, DisplayNote};
use crate::store::DataStore;

use super::helpers::indexed_notes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteStatusFilter {
    #[default]
    Active,
    Trashed,
    All,
}

#[derive(Debug, Clone, Default)]
pub struct NoteFilter {
    pub status: NoteStatusFilter,
    /// Case-insensitive match against title or content.
    pub search_term: Option<String>,
}

fn matches_status(index: &DisplayIndex, status: NoteStatusFilter) -> bool {
    match status {
        NoteStatusFilter::All => true,
        NoteStatusFilter::Active => matches!(index, DisplayIndex::Active(_)),
        NoteStatusFilter::Trashed => matches!(index, DisplayIndex::Trashed(_)),
    }
}

fn matches_term(dn: &DisplayNote, term: &str) -> bool {
    dn.note.title.to_lowercase().contains(term) || dn.note.content.to_lowercase().contains(term)
}

/// Lists notes in collection order. Indexes are those of the unfiltered collections,
/// so a search result can be fed straight back into another command.
pub fn run<S: DataStore>(store: &S, filter: NoteFilter) -> Result<CmdResult> {
    let term = filter
        .search_term
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase);

    let listed: Vec<DisplayNote> = indexed_notes(store)
        .into_iter()
        .filter(|dn| matches_status(&dn.index, filter.status))
        .filter(|dn| term.as_deref().map_or(true, |t| matches_term(dn, t)))
        .collect();

    Ok(CmdResult::default().with_listed_notes(listed))
}
