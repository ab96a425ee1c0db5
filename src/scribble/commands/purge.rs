use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayIndex, DisplayNote, NoteSelector};
use crate::model::Collection;
use crate::store::DataStore;

use super::helpers::{find_by_id, indexed_notes, resolve_selectors};

/// What a purge would remove. Used by the CLI to confirm before executing.
#[derive(Debug)]
pub struct PurgePreview {
    pub targets: Vec<DisplayNote>,
    /// True when no selectors were given and the whole trash is targeted.
    pub all: bool,
}

/// Returns the trashed notes a purge would remove, without removing anything.
///
/// - Empty `selectors` targets the whole trash
/// - Selectors naming active notes are skipped: only trashed notes can be purged
pub fn preview<S: DataStore>(store: &S, selectors: &[NoteSelector]) -> Result<PurgePreview> {
    let indexed = indexed_notes(store);

    if selectors.is_empty() {
        return Ok(PurgePreview {
            targets: indexed
                .into_iter()
                .filter(|dn| matches!(dn.index, DisplayIndex::Trashed(_)))
                .collect(),
            all: true,
        });
    }

    let targets = resolve_selectors(store, selectors, Some(Collection::Trash))?
        .into_iter()
        .filter(|(index, _)| matches!(index, DisplayIndex::Trashed(_)))
        .filter_map(|(_, id)| find_by_id(&indexed, id).cloned())
        .collect();

    Ok(PurgePreview {
        targets,
        all: false,
    })
}

/// Permanently removes trashed notes.
///
/// This does NOT prompt. The CLI should call [`preview`] first, confirm with the user,
/// then call this.
pub fn run<S: DataStore>(store: &mut S, selectors: &[NoteSelector]) -> Result<CmdResult> {
    let preview = preview(store, selectors)?;
    let mut result = CmdResult::default();

    if preview.targets.is_empty() {
        // Selections that resolve to nothing are silent like any other stale reference
        if preview.all {
            result.add_message(CmdMessage::info("No notes to purge."));
        }
        return Ok(result);
    }

    let purged = if preview.all {
        store.purge_all()?
    } else {
        let mut purged = Vec::new();
        for dn in &preview.targets {
            if let Some(note) = store.purge_one(&dn.note.id)? {
                purged.push(note);
            }
        }
        purged
    };

    for dn in &preview.targets {
        if purged.iter().any(|n| n.id == dn.note.id) {
            result.add_message(CmdMessage::success(format!(
                "Purged ({}): {}",
                dn.index, dn.note.title
            )));
        }
    }
    result.affected_notes = preview
        .targets
        .into_iter()
        .filter(|dn| purged.iter().any(|n| n.id == dn.note.id))
        .collect();

    Ok(result)
}
