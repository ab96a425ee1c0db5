use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{DisplayNote, NoteSelector};
use crate::store::DataStore;

use super::helpers::{find_by_id, indexed_notes, resolve_selectors};

pub fn run<S: DataStore>(store: &S, selectors: &[NoteSelector]) -> Result<CmdResult> {
    let resolved = resolve_selectors(store, selectors, None)?;
    let indexed = indexed_notes(store);

    let listed: Vec<DisplayNote> = resolved
        .into_iter()
        .filter_map(|(_, id)| find_by_id(&indexed, id).cloned())
        .collect();

    Ok(CmdResult::default().with_listed_notes(listed))
}
