use super::DataStore;
use crate::error::{Result, RoloError};
use crate::model::Contact;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON-file backed store. One file holds the whole contact sequence.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Contact>> {
        let raw = fs::read_to_string(&self.path).map_err(RoloError::Storage)?;
        // Typed parse doubles as shape validation: anything that isn't an
        // array of four-field contact objects is corrupt data.
        let contacts: Vec<Contact> = serde_json::from_str(&raw).map_err(RoloError::Corrupt)?;
        Ok(contacts)
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        let data = serde_json::to_string_pretty(contacts).map_err(RoloError::Corrupt)?;
        fs::write(&self.path, data).map_err(RoloError::Storage)
    }
}
