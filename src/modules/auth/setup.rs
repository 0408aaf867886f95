use super::gate::{AuthError, CredentialGate};
use crate::modules::storage::StorageBackend;
use crate::modules::utils::io::Console;

/// Interactive first-time creation of the password file
pub fn setup_initial_password<B: StorageBackend>(
    gate: &CredentialGate<B>,
    console: &mut dyn Console,
) -> Result<(), AuthError> {
    if gate.is_initialized() {
        return Err(AuthError::AlreadyInitialized(gate.path().to_path_buf()));
    }

    console.show("\n=== Initial Password Setup ===");
    console.show("This password will be required every time the contact book starts.");

    let password = loop {
        let password = console.prompt_secret("\nEnter new password: ")?;
        if password.is_empty() {
            console.show("Password cannot be empty.");
            continue;
        }

        let confirm = console.prompt_secret("Confirm password: ")?;
        if password != confirm {
            console.show("Passwords don't match. Please try again.");
            continue;
        }

        break password;
    };

    gate.initialize(&password)?;
    console.show(&format!(
        "Password file {} created successfully!",
        gate.path().display()
    ));
    Ok(())
}
