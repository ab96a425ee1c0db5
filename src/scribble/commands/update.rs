use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::NoteSelector;
use crate::model::Collection;
use crate::store::DataStore;

use super::helpers::{find_by_id, indexed_notes, resolve_selectors};

/// New values for an edit. A field left as `None` keeps the note's current value.
#[derive(Debug, Clone, Default)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NoteUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// Edits one active note in place. Its position in the collection is unchanged.
///
/// Editing a trashed or missing note, or submitting blank title and content, changes
/// nothing and reports nothing.
pub fn run<S: DataStore>(
    store: &mut S,
    selector: &NoteSelector,
    update: NoteUpdate,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if update.is_empty() {
        return Ok(result);
    }

    let resolved = resolve_selectors(
        store,
        std::slice::from_ref(selector),
        Some(Collection::Active),
    )?;
    let Some((display_index, id)) = resolved.into_iter().next() else {
        return Ok(result);
    };
    let Some(current) = store.active().iter().find(|n| n.id == id).cloned() else {
        return Ok(result);
    };

    let title = update.title.unwrap_or(current.title);
    let content = update.content.unwrap_or(current.content);

    if let Some(note) = store.edit_note(&id, &title, &content)? {
        result.add_message(CmdMessage::success(format!(
            "Note updated ({}): {}",
            display_index, note.title
        )));
        if let Some(dn) = find_by_id(&indexed_notes(store), note.id) {
            result.affected_notes.push(dn.clone());
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::store::InMemoryStore;

    fn first() -> NoteSelector {
        NoteSelector::Index(DisplayIndex::Active(1))
    }

    #[test]
    fn updates_title_and_keeps_content() {
        let mut store = InMemoryStore::new();
        store.create_note("Draft", "body text").unwrap();

        let result = run(
            &mut store,
            &first(),
            NoteUpdate {
                title: Some("Final".into()),
                content: None,
            },
        )
        .unwrap();

        assert_eq!(result.messages[0].content, "Note updated (1): Final");
        let note = &store.active()[0];
        assert_eq!(note.title, "Final");
        assert_eq!(note.content, "body text");
        assert!(note.last_modified.is_some());
    }

    #[test]
    fn keeps_position_in_collection() {
        let mut store = InMemoryStore::new();
        store.create_note("A", "").unwrap();
        store.create_note("B", "").unwrap();

        let result = run(
            &mut store,
            &NoteSelector::Index(DisplayIndex::Active(2)),
            NoteUpdate {
                title: None,
                content: Some("now with body".into()),
            },
        )
        .unwrap();

        assert_eq!(result.affected_notes[0].index, DisplayIndex::Active(2));
        assert_eq!(store.active()[1].title, "A");
        assert_eq!(store.active()[1].content, "now with body");
    }

    #[test]
    fn blanking_both_fields_is_a_silent_noop() {
        let mut store = InMemoryStore::new();
        store.create_note("Keep me", "").unwrap();

        let result = run(
            &mut store,
            &first(),
            NoteUpdate {
                title: Some("".into()),
                content: Some(" ".into()),
            },
        )
        .unwrap();

        assert!(result.is_noop());
        assert_eq!(store.active()[0].title, "Keep me");
        assert!(store.active()[0].last_modified.is_none());
    }

    #[test]
    fn trashed_note_cannot_be_edited() {
        let mut store = InMemoryStore::new();
        store.create_note("Gone", "").unwrap();
        let id = store.active()[0].id;
        store.delete_note(&id).unwrap();

        let result = run(
            &mut store,
            &NoteSelector::Index(DisplayIndex::Trashed(1)),
            NoteUpdate {
                title: Some("Back?".into()),
                content: None,
            },
        )
        .unwrap();

        assert!(result.is_noop());
        assert_eq!(store.trash()[0].title, "Gone");
    }

    #[test]
    fn empty_update_does_nothing() {
        let mut store = InMemoryStore::new();
        store.create_note("Same", "").unwrap();
        let result = run(&mut store, &first(), NoteUpdate::default()).unwrap();
        assert!(result.is_noop());
    }
}
