//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minimum number of digit characters a phone number must contain.
pub const MIN_DIGITS: usize = 7;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+0-9()\-]{7,18}$").expect("phone pattern is valid"));

/// A type-safe wrapper for phone numbers.
///
/// The stored value is exactly the input string; no normalization is applied.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+38(050)123-45-67").unwrap();
/// assert_eq!(phone.as_str(), "+38(050)123-45-67");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must contain at least 7 digits
    /// - Can contain only digits, `+`, `-`, `(` and `)`
    /// - Must be 7 to 18 characters long
    ///
    /// The digit-count rule is checked first, so its error wins when both fail.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
        if digits < MIN_DIGITS {
            return Err(ValidationError::TooFewDigits(phone));
        }
        if !PHONE_PATTERN.is_match(&phone) {
            return Err(ValidationError::InvalidPhoneChars(phone));
        }

        Ok(Self(phone))
    }

    /// Validate a replacement value, producing a new phone number.
    pub fn revalidate(&self, raw: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(raw)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
