use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayIndex, DisplayNote};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, title: &str, content: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(note) = store.create_note(title, content)? else {
        return Ok(result);
    };

    // A new note is always the newest, so it gets index 1
    result.add_message(CmdMessage::success(format!("Note created: {}", note.title)));
    result.affected_notes.push(DisplayNote {
        note,
        index: DisplayIndex::Active(1),
    });
    Ok(result)
}
