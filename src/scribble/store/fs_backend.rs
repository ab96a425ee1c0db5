use super::backend::StorageBackend;
use crate::error::{Result, ScribbleError};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// Stores each record as `<root>/<name>.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn record_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.json", name))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ScribbleError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read_record(&self, name: &str) -> Result<Option<String>> {
        let path = self.record_path(name);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path).map_err(ScribbleError::Io)?;
        Ok(Some(contents))
    }

    fn write_record(&self, name: &str, contents: &str) -> Result<()> {
        self.ensure_dir()?;

        let target = self.record_path(name);
        let tmp = self.root.join(format!(".{}-{}.tmp", name, Uuid::new_v4()));
        fs::write(&tmp, contents).map_err(ScribbleError::Io)?;
        fs::rename(&tmp, target).map_err(ScribbleError::Io)?;

        Ok(())
    }
}
