//! Phone index disambiguation.
//!
//! When a record holds more than one phone, edits and deletions ask an
//! [`IndexResolver`] which phone is meant. The interactive terminal
//! implementation lives in [`terminal`]; tests supply scripted resolvers.

pub mod terminal;

pub use terminal::TerminalResolver;

use crate::domain::PhoneNumber;
use thiserror::Error;

/// Why a phone index could not be resolved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The chosen index does not point at a listed phone.
    #[error("Wrong index. Try again.")]
    OutOfRange,

    /// The answer was not an integer.
    #[error("Index should be a number. Try again.")]
    NotANumber,
}

/// Capability that picks one phone out of a record's ordered list.
pub trait IndexResolver {
    /// Choose an index into `phones` for the contact called `name`.
    ///
    /// Implementations return either a valid index into `phones` or a
    /// [`SelectionError`]; they never modify anything.
    fn resolve(&mut self, name: &str, phones: &[PhoneNumber]) -> Result<usize, SelectionError>;
}

/// Parse a user's answer against a list of `len` candidates.
///
/// Surrounding whitespace is ignored. Negative numbers count as out of range.
pub fn parse_index(answer: &str, len: usize) -> Result<usize, SelectionError> {
    let value: i64 = answer
        .trim()
        .parse()
        .map_err(|_| SelectionError::NotANumber)?;

    usize::try_from(value)
        .ok()
        .filter(|index| *index < len)
        .ok_or(SelectionError::OutOfRange)
}
