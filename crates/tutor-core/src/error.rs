//! Error types for the tutorial toolkit.

use std::path::PathBuf;

use thiserror::Error;

/// Structural violation found while reading the tutorial description format.
///
/// The line number is 1-based and points at the offending line, or at the
/// first line of a property whose value never terminated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} (line {line})")]
pub struct FormatError {
    pub line: usize,
    pub message: String,
}

impl FormatError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// Comprehensive error type for all tutorial operations.
#[derive(Error, Debug)]
pub enum TutorError {
    /// Library database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// No step with the given slug exists in the collection
    #[error("Step with slug '{slug}' not found")]
    StepNotFound { slug: String },
    /// The tutorial description text could not be parsed
    #[error("Tutorial format error: {0}")]
    Format(#[from] FormatError),
    /// Validation failures such as duplicate tutorial names
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// The editor emitted something that is not a document tree
    #[error("Invalid document tree: {message}")]
    DocumentTree { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> TutorError {
        TutorError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TutorError {
        TutorError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TutorError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    pub fn step_not_found(slug: impl Into<String>) -> Self {
        Self::StepNotFound { slug: slug.into() }
    }

    /// True for errors the user caused and can fix by changing their input.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::StepNotFound { .. }
                | Self::Format(_)
                | Self::InvalidInput { .. }
                | Self::DocumentTree { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TutorError::database(message).with_source(e))
    }
}

/// Result type alias for tutorial operations
pub type Result<T> = std::result::Result<T, TutorError>;
