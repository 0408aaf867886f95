use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::book::ContactBook;
use super::model::Contact;
use crate::modules::error::FatalError;
use crate::modules::storage::StorageBackend;
use crate::{BACKUP_PREFIX, CONTACTS_FILE};

/// Custom error type for contact store operations
#[derive(Debug)]
pub enum StoreError {
    /// The file exists but cannot be read back as a list of contacts
    Corrupt(String),
    Fatal(FatalError),
    Serialization(String),
    Io(io::Error),
}

// Implement conversion from io::Error to StoreError
impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        StoreError::Io(error)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Corrupt(msg) => write!(f, "Corrupted contacts file: {}", msg),
            StoreError::Fatal(e) => write!(f, "{}", e),
            StoreError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            StoreError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

/// `backup_<name>` next to the live file
pub fn derive_backup_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| CONTACTS_FILE.to_string());
    path.with_file_name(format!("{}{}", BACKUP_PREFIX, file_name))
}

/// Loads and saves the whole contact collection as one JSON file
pub struct ContactRepository<B: StorageBackend> {
    backend: B,
    path: PathBuf,
}

impl<B: StorageBackend> ContactRepository<B> {
    pub fn new(backend: B, path: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> PathBuf {
        derive_backup_path(&self.path)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Read the collection; an absent file is an empty book
    pub fn load(&self) -> Result<ContactBook, StoreError> {
        let Some(data) = self.backend.read(&self.path)? else {
            return Ok(ContactBook::new());
        };

        let contacts: Vec<Contact> =
            serde_json::from_slice(&data).map_err(|e| StoreError::Corrupt(e.to_string()))?;

        ContactBook::from_contacts(contacts).map_err(StoreError::Corrupt)
    }

    /// Overwrite the file with the complete collection
    pub fn save(&self, book: &ContactBook) -> Result<(), StoreError> {
        let records: Vec<&Contact> = book.iter().collect();

        let mut buffer = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
        records
            .serialize(&mut serializer)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        self.backend.write(&self.path, &buffer)?;
        Ok(())
    }

    /// Delete the live file so the store reads as empty
    pub fn reset(&self) -> Result<(), StoreError> {
        if self.backend.exists(&self.path) {
            self.backend.remove(&self.path)?;
        }
        Ok(())
    }
}
