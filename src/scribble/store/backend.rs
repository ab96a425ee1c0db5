use crate::error::Result;

/// Abstract interface for raw record I/O.
///
/// A backend is a flat namespace of named text records, nothing more. It handles the
/// "how" of storage (filesystem vs memory) while [`NoteStore`](super::note_store::NoteStore)
/// handles the "what" (collections, lifecycle, write-through).
pub trait StorageBackend {
    /// Read a record. Returns `Ok(None)` when the record was never written.
    /// Returns `Err` only on actual I/O errors.
    fn read_record(&self, name: &str) -> Result<Option<String>>;

    /// Replace a record's contents.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_record(&self, name: &str, contents: &str) -> Result<()>;
}
