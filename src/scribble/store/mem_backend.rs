use super::backend::StorageBackend;
use crate::error::{Result, ScribbleError};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since scribble is single-threaded.
/// This keeps every `StorageBackend` method on `&self`.
#[derive(Default)]
pub struct MemBackend {
    records: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record directly, bypassing write accounting.
    pub fn with_record(self, name: &str, contents: &str) -> Self {
        self.records
            .borrow_mut()
            .insert(name.to_string(), contents.to_string());
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful writes since creation.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    pub fn raw_record(&self, name: &str) -> Option<String> {
        self.records.borrow().get(name).cloned()
    }
}

impl StorageBackend for MemBackend {
    fn read_record(&self, name: &str) -> Result<Option<String>> {
        Ok(self.records.borrow().get(name).cloned())
    }

    fn write_record(&self, name: &str, contents: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(ScribbleError::Store("Simulated write error".to_string()));
        }
        self.records
            .borrow_mut()
            .insert(name.to_string(), contents.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_record_reads_as_none() {
        let backend = MemBackend::new();
        assert_eq!(backend.read_record("notes").unwrap(), None);
    }

    #[test]
    fn write_then_read() {
        let backend = MemBackend::new();
        backend.write_record("notes", "[]").unwrap();
        assert_eq!(backend.read_record("notes").unwrap().as_deref(), Some("[]"));
        assert_eq!(backend.write_count(), 1);
    }

    #[test]
    fn simulated_error_keeps_previous_contents() {
        let backend = MemBackend::new().with_record("notes", "[]");
        backend.set_simulate_write_error(true);
        assert!(backend.write_record("notes", "[1]").is_err());
        assert_eq!(backend.raw_record("notes").as_deref(), Some("[]"));
        assert_eq!(backend.write_count(), 0);
    }
}
