//! Error types for option registration and command-line processing.

use thiserror::Error;

/// Result type alias for easyopts operations.
pub type OptsResult<T> = Result<T, OptsError>;

/// Errors that can occur while declaring or processing options.
#[derive(Error, Debug)]
pub enum OptsError {
    #[error("Duplicate long option --{long} (already registered in section '{section}')")]
    DuplicateLongOption { long: String, section: String },

    #[error("Duplicate short option -{short} (already used by --{existing})")]
    DuplicateShortOption { short: char, existing: String },

    #[error("Invalid long option name '{0}'")]
    InvalidLongOption(String),

    #[error("Invalid short option '{0}'")]
    InvalidShortOption(char),

    #[error("Unknown section handle: {0}")]
    UnknownSection(usize),

    #[error("Invalid store state transition from {from} to {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Option --{option}: cannot use '{value}' as {kind}: {reason}")]
    Coercion {
        option: String,
        value: String,
        kind: String,
        reason: String,
    },

    #[error("Option --{option} requires a value")]
    MissingValue { option: String },

    #[error("Option --{option} does not take a value (got '{value}')")]
    UnexpectedValue { option: String, value: String },

    #[error("Option --{option} given more than once")]
    RepeatedOption { option: String },

    #[error("Validation failed for option --{option}")]
    ValidationFailed { option: String },

    #[error("Missing required option --{option}")]
    MissingRequired { option: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Broad classification of an [`OptsError`], used by hosts to pick exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The option table itself is malformed.
    Registration,
    /// The command line does not fit the declared options.
    Usage,
    /// A validate callback rejected a value.
    Validation,
    /// A required option was not supplied.
    MissingRequired,
    /// Lifecycle misuse or output failures.
    Internal,
}

impl OptsError {
    /// Classify this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            OptsError::DuplicateLongOption { .. }
            | OptsError::DuplicateShortOption { .. }
            | OptsError::InvalidLongOption(_)
            | OptsError::InvalidShortOption(_)
            | OptsError::UnknownSection(_) => ErrorCategory::Registration,
            OptsError::Coercion { .. }
            | OptsError::MissingValue { .. }
            | OptsError::UnexpectedValue { .. }
            | OptsError::RepeatedOption { .. } => ErrorCategory::Usage,
            OptsError::ValidationFailed { .. } => ErrorCategory::Validation,
            OptsError::MissingRequired { .. } => ErrorCategory::MissingRequired,
            OptsError::InvalidStateTransition { .. }
            | OptsError::Io(_)
            | OptsError::Json(_) => ErrorCategory::Internal,
        }
    }

    /// The long name of the option this error is about, if any.
    pub fn option(&self) -> Option<&str> {
        match self {
            OptsError::DuplicateLongOption { long, .. } => Some(long),
            OptsError::Coercion { option, .. }
            | OptsError::MissingValue { option }
            | OptsError::UnexpectedValue { option, .. }
            | OptsError::RepeatedOption { option }
            | OptsError::ValidationFailed { option }
            | OptsError::MissingRequired { option } => Some(option),
            _ => None,
        }
    }
}
