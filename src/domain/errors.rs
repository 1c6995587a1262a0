//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided contact name would break the storage line format.
    InvalidName(String),

    /// The phone number has fewer than the required digits.
    TooFewDigits(String),

    /// The phone number contains characters outside `[+0-9()-]` or has a bad length.
    InvalidPhoneChars(String),

    /// The birthday matches none of the accepted date formats.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "The name cannot be empty."),
            Self::InvalidName(name) => {
                write!(f, "The name '{}' cannot contain ': ' or ', '.", name)
            }
            Self::TooFewDigits(_) => write!(
                f,
                "The number wasn't added. It should have at least 7 digits."
            ),
            Self::InvalidPhoneChars(_) => write!(
                f,
                "The number wasn't added. It can contain only the following characters: digits 0-9, '-', '(', ')', '+'."
            ),
            Self::InvalidBirthday(_) => write!(
                f,
                "The birthday wasn't added, it should be in one of the formats: {}",
                super::birthday::DateFormat::listing()
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
