//! Command words and their aliases.

use crate::error::{CommandError, CommandResult};
use std::fmt;

/// Every command the book understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Hello,
    Add,
    AddBirthday,
    AddPhone,
    Birthday,
    Show,
    Change,
    DeletePhone,
    Delete,
    Phone,
    ShowAll,
    Goodbye,
}

/// Alias sets, checked in order.
const ALIASES: &[(&[&str], Command)] = &[
    (&["hello", "hi", "hey"], Command::Hello),
    (&["add"], Command::Add),
    (&["add_birthday"], Command::AddBirthday),
    (&["add_phone"], Command::AddPhone),
    (&["birthday"], Command::Birthday),
    (&["show"], Command::Show),
    (&["change"], Command::Change),
    (&["delete_phone"], Command::DeletePhone),
    (&["delete"], Command::Delete),
    (&["phone"], Command::Phone),
    (&["showall"], Command::ShowAll),
    (&["goodbye", "close", "exit", "quit"], Command::Goodbye),
];

impl Command {
    /// Find the command whose alias set contains `word`, ignoring case.
    pub fn resolve(word: &str) -> CommandResult<Self> {
        let word = word.to_lowercase();
        ALIASES
            .iter()
            .find(|(aliases, _)| aliases.contains(&word.as_str()))
            .map(|(_, command)| *command)
            .ok_or(CommandError::CommandNotFound(word))
    }

    /// The accepted words for this command.
    pub fn aliases(self) -> &'static [&'static str] {
        ALIASES
            .iter()
            .find(|(_, command)| *command == self)
            .map(|(aliases, _)| *aliases)
            .unwrap_or(&[])
    }

    /// Whether running this command ends the session.
    pub fn is_exit(self) -> bool {
        self == Command::Goodbye
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.aliases().first().copied().unwrap_or("?"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_every_alias() {
        for (aliases, command) in ALIASES {
            for alias in *aliases {
                assert_eq!(Command::resolve(alias), Ok(*command), "alias {alias}");
            }
        }
    }

    #[test]
    fn test_resolve_ignores_case() {
        assert_eq!(Command::resolve("HeLLo"), Ok(Command::Hello));
        assert_eq!(Command::resolve("Add"), Ok(Command::Add));
        assert_eq!(Command::resolve("QUIT"), Ok(Command::Goodbye));
    }

    #[test]
    fn test_resolve_whole_word_only() {
        assert!(Command::resolve("ad").is_err());
        assert!(Command::resolve("add_").is_err());
        assert!(Command::resolve("birthdays").is_err());
        assert_eq!(Command::resolve("delete_phone"), Ok(Command::DeletePhone));
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(
            Command::resolve("frobnicate"),
            Err(CommandError::CommandNotFound("frobnicate".to_string()))
        );
        assert!(Command::resolve("").is_err());
    }

    #[test]
    fn test_display_uses_first_alias() {
        assert_eq!(Command::Hello.to_string(), "hello");
        assert_eq!(Command::ShowAll.to_string(), "showall");
        assert!(Command::Goodbye.is_exit());
        assert!(!Command::Hello.is_exit());
    }
}
