use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::modules::auth::AuthError;
use crate::modules::contacts::StoreError;

/// Conditions that end the program; only `main` turns these into an exit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FatalError {
    CredentialFileMissing(PathBuf),
    TooManyAttempts,
    CorruptStoreDeclined(PathBuf),
}

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FatalError::CredentialFileMissing(path) => write!(
                f,
                "Security warning: password file {} is missing! Restore it manually.",
                path.display()
            ),
            FatalError::TooManyAttempts => write!(f, "Too many failed attempts!"),
            FatalError::CorruptStoreDeclined(path) => write!(
                f,
                "Exiting to prevent data loss in {}!",
                path.display()
            ),
        }
    }
}

impl std::error::Error for FatalError {}

/// Top-level error for the binary
#[derive(Debug)]
pub enum AppError {
    Fatal(FatalError),
    Auth(AuthError),
    Store(StoreError),
    Config(String),
    Io(io::Error),
}

impl AppError {
    /// Errors after which the menu cannot sensibly continue
    pub fn ends_session(&self) -> bool {
        match self {
            AppError::Fatal(_) | AppError::Config(_) => true,
            AppError::Io(e) => e.kind() == io::ErrorKind::UnexpectedEof,
            AppError::Auth(AuthError::Io(e)) | AppError::Store(StoreError::Io(e)) => {
                e.kind() == io::ErrorKind::UnexpectedEof
            }
            _ => false,
        }
    }
}

impl From<FatalError> for AppError {
    fn from(error: FatalError) -> Self {
        AppError::Fatal(error)
    }
}

// Fatal conditions are lifted out of the component errors
impl From<AuthError> for AppError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::Fatal(fatal) => AppError::Fatal(fatal),
            other => AppError::Auth(other),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Fatal(fatal) => AppError::Fatal(fatal),
            other => AppError::Store(other),
        }
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        AppError::Io(error)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Fatal(e) => write!(f, "{}", e),
            AppError::Auth(e) => write!(f, "Authentication error: {}", e),
            AppError::Store(e) => write!(f, "Contact store error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_conditions_are_lifted() {
        let from_auth = AppError::from(AuthError::Fatal(FatalError::TooManyAttempts));
        assert!(matches!(from_auth, AppError::Fatal(FatalError::TooManyAttempts)));

        let path = PathBuf::from("contacts.json");
        let from_store = AppError::from(StoreError::Fatal(FatalError::CorruptStoreDeclined(
            path.clone(),
        )));
        assert!(matches!(
            from_store,
            AppError::Fatal(FatalError::CorruptStoreDeclined(p)) if p == path
        ));
    }

    #[test]
    fn test_bad_configuration_maps_to_config_error() {
        use crate::modules::config::{build_cli, AppConfig};

        let matches = build_cli()
            .try_get_matches_from(["contact-book", "--log-level", "loud"])
            .unwrap();
        let error = AppConfig::from_matches(&matches)
            .map_err(AppError::Config)
            .unwrap_err();

        assert!(matches!(error, AppError::Config(_)));
        assert!(error.ends_session());
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid log level: loud"
        );
    }

    #[test]
    fn test_session_ending_errors() {
        let closed = io::Error::new(io::ErrorKind::UnexpectedEof, "closed");
        assert!(AppError::Io(closed).ends_session());
        assert!(AppError::Fatal(FatalError::TooManyAttempts).ends_session());

        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert!(!AppError::Store(StoreError::Io(denied)).ends_session());
        assert!(!AppError::Store(StoreError::Corrupt("bad".to_string())).ends_session());
    }
}
