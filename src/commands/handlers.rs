//! Command handlers.
//!
//! Each handler receives the book, the index resolver and the positional
//! arguments that followed the command word, and returns either a reply or
//! a [`CommandError`]. None of them format errors themselves.

use super::registry::Command;
use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use crate::selection::IndexResolver;

pub const DONE: &str = "Done!";
pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Goodbye!";

/// Run `command` with `args`.
pub fn run(
    command: Command,
    book: &mut AddressBook,
    resolver: &mut dyn IndexResolver,
    args: &[&str],
) -> CommandResult<String> {
    match command {
        Command::Hello => hello(args),
        Command::Add => add_user(book, args),
        Command::AddBirthday => add_birthday(book, args),
        Command::AddPhone => add_phone(book, args),
        Command::Birthday => birthday(book, args),
        Command::Show => show(book, args),
        Command::Change => change(book, resolver, args),
        Command::DeletePhone => delete_phone(book, resolver, args),
        Command::Delete => delete_user(book, args),
        Command::Phone => phone(book, args),
        Command::ShowAll => show_all(book, args),
        Command::Goodbye => goodbye(book, args),
    }
}

fn arg<'a>(args: &[&'a str], index: usize) -> CommandResult<&'a str> {
    args.get(index).copied().ok_or(CommandError::MissingArgument)
}

fn no_args(args: &[&str]) -> CommandResult<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(CommandError::WrongArity)
    }
}

fn hello(args: &[&str]) -> CommandResult<String> {
    no_args(args)?;
    Ok(GREETING.to_string())
}

fn goodbye(book: &mut AddressBook, args: &[&str]) -> CommandResult<String> {
    no_args(args)?;
    book.reset_cursor();
    Ok(FAREWELL.to_string())
}

/// `add <name> [phone] [birthday]`
///
/// The contact is created even when the phone or birthday is rejected; the
/// validation messages are appended to the reply.
fn add_user(book: &mut AddressBook, args: &[&str]) -> CommandResult<String> {
    let name = ContactName::new(arg(args, 0)?)?;
    if book.contains(name.as_str()) {
        return Ok("This user already exists.".to_string());
    }

    let mut record = Record::new(name);
    let mut message = String::from("The user was added!");

    if let Some(raw) = args.get(1) {
        match PhoneNumber::new(*raw) {
            Ok(phone) => record.add_phone(phone),
            Err(e) => message = format!("{} {}", message, e),
        }
    }
    if let Some(raw) = args.get(2) {
        match Birthday::new(*raw) {
            Ok(birthday) => record.add_birthday(birthday),
            Err(e) => message = format!("{} {}", message, e),
        }
    }

    book.add_record(record);
    Ok(message)
}

fn add_birthday(book: &mut AddressBook, args: &[&str]) -> CommandResult<String> {
    let record = book.get_mut(arg(args, 0)?)?;
    record.add_birthday(Birthday::new(arg(args, 1)?)?);
    Ok(DONE.to_string())
}

fn add_phone(book: &mut AddressBook, args: &[&str]) -> CommandResult<String> {
    let record = book.get_mut(arg(args, 0)?)?;
    record.add_phone(PhoneNumber::new(arg(args, 1)?)?);
    Ok(DONE.to_string())
}

fn birthday(book: &AddressBook, args: &[&str]) -> CommandResult<String> {
    Ok(book.get(arg(args, 0)?)?.days_to_birthday())
}

fn show(book: &AddressBook, args: &[&str]) -> CommandResult<String> {
    Ok(book.get(arg(args, 0)?)?.show_record())
}

fn phone(book: &AddressBook, args: &[&str]) -> CommandResult<String> {
    Ok(book.get(arg(args, 0)?)?.show_phone())
}

fn change(
    book: &mut AddressBook,
    resolver: &mut dyn IndexResolver,
    args: &[&str],
) -> CommandResult<String> {
    let record = book.get_mut(arg(args, 0)?)?;
    let phone = PhoneNumber::new(arg(args, 1)?)?;
    record.edit_phone(phone, 0, resolver)?;
    Ok(DONE.to_string())
}

fn delete_phone(
    book: &mut AddressBook,
    resolver: &mut dyn IndexResolver,
    args: &[&str],
) -> CommandResult<String> {
    let record = book.get_mut(arg(args, 0)?)?;
    record.delete_phone(0, resolver)?;
    Ok(DONE.to_string())
}

fn delete_user(book: &mut AddressBook, args: &[&str]) -> CommandResult<String> {
    Ok(book.delete_record(arg(args, 0)?))
}

fn show_all(book: &mut AddressBook, args: &[&str]) -> CommandResult<String> {
    no_args(args)?;
    Ok(book.show_records())
}
