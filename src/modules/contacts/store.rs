use log::warn;

use super::book::ContactBook;
use super::model::Contact;
use super::repository::{ContactRepository, StoreError};
use super::user_interface::{prompt_age, prompt_category, prompt_email, prompt_phone};
use super::validation::normalize_name;
use crate::modules::error::FatalError;
use crate::modules::storage::StorageBackend;
use crate::modules::utils::io::{prompt_with_confirmation, Console};
use crate::modules::utils::logging::log_data_operation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated(String),
    NotFound(String),
    /// The requested new name belongs to another contact
    NameTaken(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(String),
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Matches(Vec<Contact>),
    NoMatches,
    EmptyStore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupOutcome {
    Created,
    NothingToBackUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreOutcome {
    Restored,
    NoBackupFound,
}

/// Interactive operations over the contact file
///
/// Every operation loads the whole file, works on the in-memory book and
/// writes the whole file back; nothing is cached between calls.
pub struct ContactStore<B: StorageBackend> {
    repository: ContactRepository<B>,
}

impl<B: StorageBackend> ContactStore<B> {
    pub fn new(repository: ContactRepository<B>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &ContactRepository<B> {
        &self.repository
    }

    /// Load the book, asking before discarding a corrupted file
    pub fn load(&self, console: &mut dyn Console) -> Result<ContactBook, StoreError> {
        match self.repository.load() {
            Err(StoreError::Corrupt(reason)) => {
                warn!(
                    "Contacts file {} is corrupted: {}",
                    self.repository.path().display(),
                    reason
                );
                console.show("Error loading contacts! File may be corrupted.");

                if prompt_with_confirmation(console, "Reset contacts file?")? {
                    self.repository.reset()?;
                    log_data_operation("reset", "*", true, Some(&reason));
                    Ok(ContactBook::new())
                } else {
                    Err(StoreError::Fatal(FatalError::CorruptStoreDeclined(
                        self.repository.path().to_path_buf(),
                    )))
                }
            }
            other => other,
        }
    }

    pub fn save(&self, book: &ContactBook) -> Result<(), StoreError> {
        self.repository.save(book)
    }

    /// Prompt for a new contact and store it; returns its name
    pub fn add(&self, console: &mut dyn Console) -> Result<String, StoreError> {
        let mut book = self.load(console)?;

        let name = loop {
            let name = normalize_name(&console.prompt("Name: ")?);
            if name.is_empty() {
                console.show("Name cannot be empty!");
            } else if book.contains(&name) {
                console.show("Name exists!");
            } else {
                break name;
            }
        };

        let contact = Contact {
            name: name.clone(),
            phone_number: prompt_phone(console, None)?,
            email: prompt_email(console, None)?,
            age: prompt_age(console)?,
            category: prompt_category(console)?,
        };

        book.put(contact);
        self.save(&book)?;
        log_data_operation("add", &name, true, None);
        Ok(name)
    }

    /// Edit a contact, optionally renaming it
    ///
    /// Blank keeps the current name, phone and email. Age and category are
    /// always asked again.
    pub fn update(&self, console: &mut dyn Console) -> Result<UpdateOutcome, StoreError> {
        let mut book = self.load(console)?;
        let old_name = normalize_name(&console.prompt("Name to update: ")?);

        let Some(mut contact) = book.take(&old_name) else {
            return Ok(UpdateOutcome::NotFound(old_name));
        };

        console.show("\nLeave blank to keep current value:");
        let input = normalize_name(&console.prompt(&format!("New name ({}): ", old_name))?);
        let new_name = if input.is_empty() {
            old_name.clone()
        } else {
            input
        };

        if book.contains(&new_name) {
            // Put the original back untouched; nothing is saved
            book.put(contact);
            log_data_operation("update", &old_name, false, Some("new name already in use"));
            return Ok(UpdateOutcome::NameTaken(new_name));
        }

        contact.name = new_name.clone();
        contact.phone_number = prompt_phone(console, Some(&contact.phone_number))?;
        contact.email = prompt_email(console, Some(&contact.email))?;
        contact.age = prompt_age(console)?;
        contact.category = prompt_category(console)?;

        book.put(contact);
        self.save(&book)?;

        let details = (new_name != old_name).then_some("renamed");
        log_data_operation("update", &new_name, true, details);
        Ok(UpdateOutcome::Updated(new_name))
    }

    pub fn delete(&self, console: &mut dyn Console) -> Result<DeleteOutcome, StoreError> {
        let mut book = self.load(console)?;
        let name = normalize_name(&console.prompt("Name to delete: ")?);

        if book.take(&name).is_none() {
            return Ok(DeleteOutcome::NotFound(name));
        }

        self.save(&book)?;
        log_data_operation("delete", &name, true, None);
        Ok(DeleteOutcome::Deleted(name))
    }

    pub fn search(&self, console: &mut dyn Console) -> Result<SearchOutcome, StoreError> {
        let book = self.load(console)?;
        if book.is_empty() {
            return Ok(SearchOutcome::EmptyStore);
        }

        let query = console.prompt("Enter search query (name, phone, or email): ")?;
        let matches: Vec<Contact> = book.search(&query).into_iter().cloned().collect();

        if matches.is_empty() {
            Ok(SearchOutcome::NoMatches)
        } else {
            Ok(SearchOutcome::Matches(matches))
        }
    }

    /// Every contact, in name order
    pub fn list_all(&self, console: &mut dyn Console) -> Result<Vec<Contact>, StoreError> {
        Ok(self.load(console)?.into_contacts())
    }

    pub fn count(&self, console: &mut dyn Console) -> Result<usize, StoreError> {
        Ok(self.load(console)?.len())
    }

    /// Move the live file to the backup name
    ///
    /// Only one backup is kept; an older one is replaced.
    pub fn backup(&self) -> Result<BackupOutcome, StoreError> {
        let live = self.repository.path();
        let backup = self.repository.backup_path();
        let backend = self.repository.backend();

        if !backend.exists(live) {
            return Ok(BackupOutcome::NothingToBackUp);
        }
        if backend.exists(&backup) {
            warn!("Replacing previous backup {}", backup.display());
        }

        backend.rename(live, &backup)?;
        log_data_operation("backup", "*", true, Some(&backup.display().to_string()));
        Ok(BackupOutcome::Created)
    }

    /// Move the backup file back to the live name
    pub fn restore(&self) -> Result<RestoreOutcome, StoreError> {
        let live = self.repository.path();
        let backup = self.repository.backup_path();
        let backend = self.repository.backend();

        if !backend.exists(&backup) {
            return Ok(RestoreOutcome::NoBackupFound);
        }
        if backend.exists(live) {
            warn!("Restore replaces the current {}", live.display());
        }

        backend.rename(&backup, live)?;
        log_data_operation("restore", "*", true, Some(&live.display().to_string()));
        Ok(RestoreOutcome::Restored)
    }
}
