pub mod book;
pub mod model;
pub mod repository;
pub mod store;
mod user_interface;
pub mod validation;

pub use book::ContactBook;
pub use model::{Category, Contact};
pub use repository::{derive_backup_path, ContactRepository, StoreError};
pub use store::{
    BackupOutcome, ContactStore, DeleteOutcome, RestoreOutcome, SearchOutcome, UpdateOutcome,
};
pub use validation::{normalize_name, validate_email, validate_phone};
