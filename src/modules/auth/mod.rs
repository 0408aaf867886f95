pub mod gate;
pub mod password;
mod setup;

// Re-export the main types and functions
pub use gate::{AuthError, CredentialGate, PasswordChange};
pub use password::hash_password;
pub use setup::setup_initial_password;
