use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::NoteSelector;
use crate::model::Collection;
use crate::store::DataStore;

use super::helpers::{find_by_id, indexed_notes, resolve_selectors};

/// Moves the selected active notes to the trash. Selectors that do not name an active
/// note are skipped.
pub fn run<S: DataStore>(store: &mut S, selectors: &[NoteSelector]) -> Result<CmdResult> {
    let resolved = resolve_selectors(store, selectors, Some(Collection::Active))?;
    let mut result = CmdResult::default();
    let mut deleted = Vec::new();

    for (display_index, id) in resolved {
        if let Some(note) = store.delete_note(&id)? {
            result.add_message(CmdMessage::success(format!(
                "Note deleted ({}): {}",
                display_index, note.title
            )));
            deleted.push(note.id);
        }
    }

    let indexed = indexed_notes(store);
    result.affected_notes = deleted
        .into_iter()
        .filter_map(|id| find_by_id(&indexed, id).cloned())
        .collect();

    Ok(result)
}
