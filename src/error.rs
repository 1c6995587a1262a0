//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use crate::selection::SelectionError;
use thiserror::Error;

/// Errors raised by strict address book lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// No record is stored under the name
    #[error("This user isn't in the Book")]
    NotFound(String),
}

/// Errors raised while editing a record's phone list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The disambiguation prompt did not yield an index
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// The resolved index points past the end of the phone list
    #[error("There is no phone at index {0}")]
    IndexOutOfRange(usize),
}

/// Coarse classification of a [`CommandError`], used for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    CommandNotFound,
    ContactNotFound,
    MissingArgument,
    WrongArity,
    Validation,
    Selection,
    Index,
}

/// Every way a command can fail. Handlers return this; the dispatcher turns
/// it into display text with [`CommandError::user_message`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// No alias matches the command word
    #[error("This command doesn't exist")]
    CommandNotFound(String),

    /// A required positional argument is missing
    #[error("You didn't enter the phone/birthday or a user")]
    MissingArgument,

    /// The command takes no arguments but some were given
    #[error("Sorry, this command doesn't exist")]
    WrongArity,

    /// Strict lookup failed
    #[error(transparent)]
    Book(#[from] BookError),

    /// Phone edit or delete failed
    #[error(transparent)]
    Record(#[from] RecordError),

    /// A field value was rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CommandError {
    /// The category this failure belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CommandNotFound(_) => ErrorKind::CommandNotFound,
            Self::MissingArgument => ErrorKind::MissingArgument,
            Self::WrongArity => ErrorKind::WrongArity,
            Self::Book(BookError::NotFound(_)) => ErrorKind::ContactNotFound,
            Self::Record(RecordError::Selection(_)) => ErrorKind::Selection,
            Self::Record(RecordError::IndexOutOfRange(_)) => ErrorKind::Index,
            Self::Validation(_) => ErrorKind::Validation,
        }
    }

    /// The text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<SelectionError> for CommandError {
    fn from(err: SelectionError) -> Self {
        Self::Record(RecordError::Selection(err))
    }
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the contacts file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
