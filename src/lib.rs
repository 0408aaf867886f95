// First, declare the modules folder itself
mod modules;

// Re-export everything from modules for easier access
pub use modules::{auth, config, contacts, error, menu, storage, utils};

// Re-export commonly used types
pub use modules::auth::CredentialGate;
pub use modules::config::AppConfig;
pub use modules::contacts::{Category, Contact, ContactBook, ContactRepository, ContactStore};
pub use modules::error::{AppError, FatalError};
pub use modules::storage::{FileBackend, MemoryBackend, StorageBackend};

// Constants
pub const CONTACTS_FILE: &str = "contacts.json";
pub const PASSWORD_FILE: &str = "password.txt";
pub const LOG_FILE: &str = "contact_book.log";
pub const BACKUP_PREFIX: &str = "backup_";
pub const MAX_LOGIN_ATTEMPTS: u32 = 3;
