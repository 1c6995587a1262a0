//! Contact Book - an interactive command-line contact manager.
//!
//! Contacts (a name, any number of phones, an optional birthday) are kept in
//! an [`AddressBook`] that is loaded from a flat text file at startup and
//! written back when the session ends.
//!
//! # Architecture
//!
//! - **domain**: Validated field values (name, phone, birthday)
//! - **models**: Records and the paginated address book
//! - **selection**: Choosing which phone an edit or delete targets
//! - **repositories**: The text file format and its storage
//! - **commands**: Alias resolution, handlers and error translation
//! - **session**: The line-by-line input loop
//! - **config** / **error**: Environment configuration and error types

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod input;
pub mod models;
pub mod repositories;
pub mod selection;
pub mod session;

pub use commands::{Command, Dispatcher, Reply};
pub use config::Config;
pub use error::{BookError, CommandError, ConfigError, ErrorKind, RecordError, StorageError};
pub use input::SharedInput;
pub use models::{AddressBook, Record};
pub use repositories::{ContactRepository, FileContactRepository};
pub use selection::{IndexResolver, SelectionError, TerminalResolver};
