use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use chrono::{DateTime, Utc};

/// Drops trashed notes past the store's retention period, measured from `now`.
///
/// UIs run this once on startup, before the first render.
pub fn run<S: DataStore>(store: &mut S, now: DateTime<Utc>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let swept = store.sweep_expired(now)?;

    if swept > 0 {
        result.swept = swept;
        result.add_message(CmdMessage::info(format!(
            "Removed {} expired note(s) from the trash.",
            swept
        )));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Note;
    use crate::store::mem_backend::MemBackend;
    use crate::store::InMemoryStore;
    use chrono::Duration;

    fn trashed(title: &str, deleted_at: DateTime<Utc>) -> Note {
        let mut note = Note::new(title.into(), "".into());
        note.deleted_at = Some(deleted_at);
        note
    }

    #[test]
    fn sweeps_expired_and_reports_count() {
        let now = Utc::now();
        let trash = vec![
            trashed("fresh", now - Duration::days(2)),
            trashed("stale", now - Duration::days(45)),
        ];
        let backend = MemBackend::new()
            .with_record("deletedNotes", &serde_json::to_string(&trash).unwrap());
        let mut store = InMemoryStore::open(backend).unwrap();

        let result = run(&mut store, now).unwrap();
        assert_eq!(result.swept, 1);
        assert_eq!(store.trash().len(), 1);
        assert_eq!(store.trash()[0].title, "fresh");
    }

    #[test]
    fn nothing_expired_is_silent() {
        let mut store = InMemoryStore::new();
        store.create_note("Note", "").unwrap();
        let result = run(&mut store, Utc::now()).unwrap();
        assert!(result.is_noop());
    }
}
