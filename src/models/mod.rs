//! Data models for contacts and the address book that holds them.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, Cursor, Page, DEFAULT_PAGE_SIZE, END_MARKER};
pub use record::Record;
