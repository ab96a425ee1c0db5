use crate::error::{Result, ScribbleError};
use crate::index::{index_notes, DisplayIndex, DisplayNote, NoteSelector};
use crate::model::Collection;
use crate::store::DataStore;
use std::collections::HashSet;
use tracing::debug;
use uuid::Uuid;

pub fn indexed_notes<S: DataStore>(store: &S) -> Vec<DisplayNote> {
    index_notes(store.active(), store.trash())
}

fn in_collection(index: &DisplayIndex, within: Option<Collection>) -> bool {
    match (within, index) {
        (None, _) => true,
        (Some(Collection::Active), DisplayIndex::Active(_)) => true,
        (Some(Collection::Trash), DisplayIndex::Trashed(_)) => true,
        _ => false,
    }
}

/// Resolves selectors to `(display index, id)` pairs against the current collections.
///
/// Indexes that point at nothing are skipped: a stale reference is a no-op, not an
/// error. A range picks up whichever of its indexes exist. `within` narrows title searches to one collection; explicit indexes are
/// resolved wherever they point and left to the store to accept or ignore.
///
/// A title search must match exactly one note. No match is skipped like a stale
/// index; several matches is an error because the input is ambiguous.
pub fn resolve_selectors<S: DataStore>(
    store: &S,
    selectors: &[NoteSelector],
    within: Option<Collection>,
) -> Result<Vec<(DisplayIndex, Uuid)>> {
    let indexed = indexed_notes(store);
    let mut seen = HashSet::new();
    let mut results = Vec::new();

    for selector in selectors {
        match selector {
            NoteSelector::Index(_) | NoteSelector::Range(..) => {
                let mut hits = indexed
                    .iter()
                    .filter(|dn| selector.covers(&dn.index))
                    .peekable();
                if hits.peek().is_none() {
                    debug!(%selector, "selector does not resolve to a note, skipping");
                }
                for dn in hits {
                    if seen.insert(dn.note.id) {
                        results.push((dn.index, dn.note.id));
                    }
                }
            }
            NoteSelector::Title(term) => {
                let term_lower = term.to_lowercase();
                let matches: Vec<&DisplayNote> = indexed
                    .iter()
                    .filter(|dn| in_collection(&dn.index, within))
                    .filter(|dn| {
                        dn.note.title.to_lowercase().contains(&term_lower)
                            || dn.note.content.to_lowercase().contains(&term_lower)
                    })
                    .collect();

                match matches.as_slice() {
                    [] => debug!(%term, "no note matches search term, skipping"),
                    [dn] => {
                        if seen.insert(dn.note.id) {
                            results.push((dn.index, dn.note.id));
                        }
                    }
                    many => {
                        return Err(ScribbleError::Api(format!(
                            "Term \"{}\" matches {} notes. Please be more specific.",
                            term,
                            many.len()
                        )))
                    }
                }
            }
        }
    }

    Ok(results)
}

/// Finds the current display entry for `id`, after a mutation has reshuffled indexes.
pub fn find_by_id(indexed: &[DisplayNote], id: Uuid) -> Option<&DisplayNote> {
    indexed.iter().find(|dn| dn.note.id == id)
}
