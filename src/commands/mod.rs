//! Command dispatch.
//!
//! A raw input line is split on whitespace; the first word selects a
//! [`Command`] by alias and the rest become its positional arguments.
//! [`Dispatcher::dispatch`] always produces displayable text: every
//! [`CommandError`] is translated here and nowhere else.

pub mod handlers;
pub mod registry;

pub use registry::Command;

use crate::error::{CommandError, CommandResult};
use crate::models::AddressBook;
use crate::selection::IndexResolver;
use tracing::debug;

/// What the session should print, and whether it should stop afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub exit: bool,
}

/// Owns the address book for the session and routes commands to handlers.
pub struct Dispatcher {
    book: AddressBook,
    resolver: Box<dyn IndexResolver>,
}

impl Dispatcher {
    pub fn new(book: AddressBook, resolver: Box<dyn IndexResolver>) -> Self {
        Self { book, resolver }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }

    /// Resolve and run one input line, keeping the failure as a typed error.
    pub fn execute(&mut self, line: &str) -> CommandResult<(Command, String)> {
        let (word, args) = split_line(line);
        let command = Command::resolve(word)?;
        let text = self.run(command, &args)?;
        Ok((command, text))
    }

    /// Run one input line and translate any failure into its message.
    ///
    /// A goodbye command ends the session even when its handler fails.
    pub fn dispatch(&mut self, line: &str) -> Reply {
        let (word, args) = split_line(line);
        let command = match Command::resolve(word) {
            Ok(command) => command,
            Err(err) => {
                debug!(kind = ?err.kind(), "Command failed: {}", err);
                return err.into();
            }
        };

        let exit = command.is_exit();
        match self.run(command, &args) {
            Ok(text) => Reply { text, exit },
            Err(err) => {
                debug!(kind = ?err.kind(), "Command failed: {}", err);
                Reply {
                    text: err.user_message(),
                    exit,
                }
            }
        }
    }

    fn run(&mut self, command: Command, args: &[&str]) -> CommandResult<String> {
        debug!(%command, ?args, "Dispatching command");
        handlers::run(command, &mut self.book, self.resolver.as_mut(), args)
    }
}

/// Split a line into its command word and positional arguments.
fn split_line(line: &str) -> (&str, Vec<&str>) {
    let mut words = line.split_whitespace();
    let word = words.next().unwrap_or_default();
    (word, words.collect())
}

impl From<CommandError> for Reply {
    fn from(err: CommandError) -> Self {
        Reply {
            text: err.user_message(),
            exit: false,
        }
    }
}
