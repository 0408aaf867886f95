use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use log::info;

use super::password::hash_password;
use crate::modules::error::FatalError;
use crate::modules::storage::StorageBackend;
use crate::modules::utils::io::Console;
use crate::modules::utils::logging::log_auth_event;
use crate::MAX_LOGIN_ATTEMPTS;

/// Custom error type for credential operations
#[derive(Debug)]
pub enum AuthError {
    Fatal(FatalError),
    AlreadyInitialized(PathBuf),
    EmptyPassword,
    Io(io::Error),
}

impl From<io::Error> for AuthError {
    fn from(error: io::Error) -> Self {
        AuthError::Io(error)
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Fatal(e) => write!(f, "{}", e),
            AuthError::AlreadyInitialized(path) => {
                write!(f, "Password file {} already exists", path.display())
            }
            AuthError::EmptyPassword => write!(f, "Password cannot be empty"),
            AuthError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for AuthError {}

/// Outcome of a change-password attempt that did not hit a hard error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordChange {
    Changed,
    WrongCurrentPassword,
    Mismatch,
    EmptyPassword,
}

/// Gate in front of the contact book, holding one shared password hash
pub struct CredentialGate<B: StorageBackend> {
    backend: B,
    path: PathBuf,
}

impl<B: StorageBackend> CredentialGate<B> {
    pub fn new(backend: B, path: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_initialized(&self) -> bool {
        self.backend.exists(&self.path)
    }

    /// Read the stored digest; a missing file is fatal
    fn stored_hash(&self) -> Result<String, AuthError> {
        match self.backend.read(&self.path)? {
            Some(data) => Ok(String::from_utf8_lossy(&data).trim().to_string()),
            None => Err(AuthError::Fatal(FatalError::CredentialFileMissing(
                self.path.clone(),
            ))),
        }
    }

    /// Check a password against the stored hash without prompting
    pub fn verify(&self, password: &str) -> Result<bool, AuthError> {
        Ok(hash_password(password) == self.stored_hash()?)
    }

    /// Prompt for the password, allowing `MAX_LOGIN_ATTEMPTS` tries
    pub fn authenticate(&self, console: &mut dyn Console) -> Result<(), AuthError> {
        let stored_hash = self.stored_hash()?;

        for remaining in (0..MAX_LOGIN_ATTEMPTS).rev() {
            let attempt = console.prompt_secret("Enter password: ")?;
            if hash_password(&attempt) == stored_hash {
                console.show("Access granted!");
                log_auth_event("login", true, None);
                return Ok(());
            }

            console.show(&format!("Incorrect! {} attempts left.", remaining));
            log_auth_event(
                "login",
                false,
                Some(&format!("{} attempts left", remaining)),
            );
        }

        Err(AuthError::Fatal(FatalError::TooManyAttempts))
    }

    /// Replace the password after re-verifying the current one
    ///
    /// Nothing is written unless every check passes.
    pub fn change_password(&self, console: &mut dyn Console) -> Result<PasswordChange, AuthError> {
        if !self.is_initialized() {
            return Err(AuthError::Fatal(FatalError::CredentialFileMissing(
                self.path.clone(),
            )));
        }

        let current = console.prompt_secret("Current password: ")?;
        if !self.verify(&current)? {
            log_auth_event("password_change", false, Some("wrong current password"));
            return Ok(PasswordChange::WrongCurrentPassword);
        }

        let new_password = console.prompt_secret("New password: ")?;
        let confirm = console.prompt_secret("Confirm password: ")?;
        if new_password != confirm {
            log_auth_event("password_change", false, Some("confirmation mismatch"));
            return Ok(PasswordChange::Mismatch);
        }
        if new_password.is_empty() {
            log_auth_event("password_change", false, Some("empty password"));
            return Ok(PasswordChange::EmptyPassword);
        }

        self.backend
            .write(&self.path, hash_password(&new_password).as_bytes())?;
        log_auth_event("password_change", true, None);
        Ok(PasswordChange::Changed)
    }

    /// Create the credential file for the first time
    pub fn initialize(&self, password: &str) -> Result<(), AuthError> {
        if self.is_initialized() {
            return Err(AuthError::AlreadyInitialized(self.path.clone()));
        }
        if password.is_empty() {
            return Err(AuthError::EmptyPassword);
        }

        self.backend
            .write(&self.path, hash_password(password).as_bytes())?;
        info!("Created password file {}", self.path.display());
        log_auth_event("initialize", true, None);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::storage::MemoryBackend;
    use crate::modules::utils::io::ScriptedConsole;

    const PASSWORD_PATH: &str = "password.txt";

    fn setup_gate(password: &str) -> (CredentialGate<MemoryBackend>, MemoryBackend) {
        let backend = MemoryBackend::new().with_file(PASSWORD_PATH, hash_password(password));
        (CredentialGate::new(backend.clone(), PASSWORD_PATH), backend)
    }

    #[test]
    fn test_third_attempt_succeeds() {
        let (gate, _) = setup_gate("opensesame");
        let mut console = ScriptedConsole::new(&["wrong", "alsowrong", "opensesame"]);

        assert!(gate.authenticate(&mut console).is_ok());
        assert!(console.printed("Incorrect! 2 attempts left."));
        assert!(console.printed("Incorrect! 1 attempts left."));
        assert!(console.printed("Access granted!"));
    }

    #[test]
    fn test_three_failures_are_fatal() {
        let (gate, _) = setup_gate("opensesame");
        let mut console = ScriptedConsole::new(&["a", "b", "c", "opensesame"]);

        let result = gate.authenticate(&mut console);
        assert!(matches!(
            result,
            Err(AuthError::Fatal(FatalError::TooManyAttempts))
        ));
        // The fourth answer is never read
        assert_eq!(console.remaining(), 1);
        assert!(!console.printed("Access granted!"));
    }

    #[test]
    fn test_missing_credential_file_is_fatal() {
        let gate = CredentialGate::new(MemoryBackend::new(), PASSWORD_PATH);
        let mut console = ScriptedConsole::new(&["anything"]);

        let result = gate.authenticate(&mut console);
        assert!(matches!(
            result,
            Err(AuthError::Fatal(FatalError::CredentialFileMissing(_)))
        ));
        // Fails before prompting
        assert_eq!(console.remaining(), 1);
    }

    #[test]
    fn test_stored_hash_with_trailing_newline() {
        let backend = MemoryBackend::new()
            .with_file(PASSWORD_PATH, format!("{}\n", hash_password("letmein")));
        let gate = CredentialGate::new(backend, PASSWORD_PATH);

        assert!(gate.verify("letmein").unwrap());
        assert!(!gate.verify("letmein\n").unwrap());
    }

    #[test]
    fn test_change_password_then_authenticate() {
        let (gate, backend) = setup_gate("old-secret");
        let mut console = ScriptedConsole::new(&["old-secret", "new-secret", "new-secret"]);

        let outcome = gate.change_password(&mut console).unwrap();
        assert_eq!(outcome, PasswordChange::Changed);
        assert_eq!(
            backend.contents(PASSWORD_PATH).unwrap(),
            hash_password("new-secret").as_bytes()
        );

        let mut console = ScriptedConsole::new(&["new-secret"]);
        assert!(gate.authenticate(&mut console).is_ok());

        let mut console = ScriptedConsole::new(&["old-secret", "old-secret", "old-secret"]);
        assert!(gate.authenticate(&mut console).is_err());
    }

    #[test]
    fn test_change_password_rejections_leave_file_untouched() {
        let (gate, backend) = setup_gate("old-secret");
        let before = backend.contents(PASSWORD_PATH).unwrap();

        // Wrong current password: new password is never asked for
        let mut console = ScriptedConsole::new(&["nope", "new-secret", "new-secret"]);
        assert_eq!(
            gate.change_password(&mut console).unwrap(),
            PasswordChange::WrongCurrentPassword
        );
        assert_eq!(console.remaining(), 2);

        let mut console = ScriptedConsole::new(&["old-secret", "new-secret", "new-secreT"]);
        assert_eq!(
            gate.change_password(&mut console).unwrap(),
            PasswordChange::Mismatch
        );

        let mut console = ScriptedConsole::new(&["old-secret", "", ""]);
        assert_eq!(
            gate.change_password(&mut console).unwrap(),
            PasswordChange::EmptyPassword
        );

        assert_eq!(backend.contents(PASSWORD_PATH).unwrap(), before);
    }

    #[test]
    fn test_change_password_without_credential_file_is_fatal() {
        let gate = CredentialGate::new(MemoryBackend::new(), PASSWORD_PATH);
        let mut console = ScriptedConsole::new(&["old", "new", "new"]);

        let result = gate.change_password(&mut console);
        assert!(matches!(
            result,
            Err(AuthError::Fatal(FatalError::CredentialFileMissing(_)))
        ));
        assert_eq!(console.remaining(), 3);
    }

    #[test]
    fn test_initialize() {
        let backend = MemoryBackend::new();
        let gate = CredentialGate::new(backend.clone(), PASSWORD_PATH);
        assert!(!gate.is_initialized());

        assert!(matches!(gate.initialize(""), Err(AuthError::EmptyPassword)));
        gate.initialize("first").unwrap();
        assert!(gate.verify("first").unwrap());

        assert!(matches!(
            gate.initialize("second"),
            Err(AuthError::AlreadyInitialized(_))
        ));
        assert!(gate.verify("first").unwrap());
    }
}
