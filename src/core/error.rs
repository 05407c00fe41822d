// Centralized error handling for the account store and wizard

use crate::validation::password::PasswordRule;
use thiserror::Error;

/// Errors returned by account store operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Missing required field")]
    MissingField,

    #[error("Invalid password: {0}")]
    InvalidPassword(PasswordRule),

    #[error("Username already exists")]
    DuplicateUsername,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Year out of range: {0} (expected 1-4)")]
    InvalidYear(u8),

    #[error("No active session")]
    NoActiveSession,
}

/// Errors raised while moving through the wizard steps
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("A 4-letter personality type is required")]
    PersonalityRequired,

    #[error("Unknown personality type: {0}")]
    UnknownPersonalityType(String),

    #[error("Already at the first step")]
    NoPreviousStep,

    #[error("Already at the last step")]
    NoNextStep,

    #[error("Results can only be shown from the personality step")]
    ResultsUnavailable,

    #[error("Not logged in")]
    NotAuthenticated,

    #[error(transparent)]
    Account(#[from] AccountError),
}

/// Errors from the key-value storage backend.
///
/// The account store logs these and keeps going; they never reach callers
/// of store operations.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode user list: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("No user data to export")]
    NoActiveSession,

    #[error("Failed to write report to {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum LinkError {
    #[error("Cannot open link: {0}")]
    Unsupported(String),

    #[error("Failed to launch browser: {0}")]
    Launch(#[from] std::io::Error),
}
