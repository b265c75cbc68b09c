//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes so every failure ends the
//! process with a message instead of a panic.

use std::fmt;

use dreamlog_core::DreamError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config, journal, dream)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Pick the exit code for any error reaching `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<DreamError>() {
        Some(DreamError::NotFound(_)) => exit_codes::NOT_FOUND,
        Some(DreamError::MalformedImport(_)) => exit_codes::INVALID_INPUT,
        Some(DreamError::StorageUnavailable(_))
        | Some(DreamError::WriteConflict(_))
        | Some(DreamError::Storage(_)) => exit_codes::STORAGE,
        _ => exit_codes::GENERAL,
    }
}

/// Contextual hint for core errors that carry none of their own.
pub fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    match err.downcast_ref::<DreamError>()? {
        DreamError::StorageUnavailable(_) => Some(
            "Hint: Check the journal path, or run `dreamlog init` to create a new journal.",
        ),
        DreamError::MalformedImport(_) => Some(
            "Hint: Import files must be a JSON array of {id, date, title, content} objects, as written by `dreamlog export`.",
        ),
        DreamError::WriteConflict(_) => Some("Hint: Try again; a fresh ID will be generated."),
        DreamError::NotFound(_) => Some("Hint: Run `dreamlog list` to find dream IDs."),
        _ => None,
    }
}
