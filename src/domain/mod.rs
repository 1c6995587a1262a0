//! Domain value objects and types.
//!
//! Type-safe wrappers for the fields of a contact: its name, phone numbers
//! and birthday. Each one validates at construction time so an invalid
//! value can never be stored in a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, DateFormat};
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;
