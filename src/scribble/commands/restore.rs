use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::NoteSelector;
use crate::model::Collection;
use crate::store::DataStore;

use super::helpers::{find_by_id, indexed_notes, resolve_selectors};

/// Moves the selected trashed notes back to the front of the active collection.
pub fn run<S: DataStore>(store: &mut S, selectors: &[NoteSelector]) -> Result<CmdResult> {
    let resolved = resolve_selectors(store, selectors, Some(Collection::Trash))?;
    let mut result = CmdResult::default();
    let mut restored = Vec::new();

    for (display_index, id) in resolved {
        if let Some(note) = store.restore_note(&id)? {
            result.add_message(CmdMessage::success(format!(
                "Note restored ({}): {}",
                display_index, note.title
            )));
            restored.push(note.id);
        }
    }

    let indexed = indexed_notes(store);
    result.affected_notes = restored
        .into_iter()
        .filter_map(|id| find_by_id(&indexed, id).cloned())
        .collect();

    Ok(result)
}
