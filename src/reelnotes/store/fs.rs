use super::SlotStore;
use crate::error::{ReelError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

const SLOT_EXT: &str = ".json";

/// Slot storage backed by a directory of JSON files.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_filename(key: &str) -> Result<String> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(ReelError::Store(format!("Invalid slot key: {:?}", key)));
        }
        Ok(format!("{}{}", key, SLOT_EXT))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

impl SlotStore for FileStore {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)?;
        debug!(path = %path.display(), bytes = raw.len(), "read slot");
        Ok(Some(raw))
    }

    fn write_slot(&mut self, key: &str, value: &str) -> Result<()> {
        let target = self.slot_path(key)?;
        self.ensure_dir()?;

        // Atomic write
        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, value)?;
        if let Err(e) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        debug!(path = %target.display(), bytes = value.len(), "wrote slot");
        Ok(())
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf> {
        Ok(self.root.join(Self::slot_filename(key)?))
    }
}
