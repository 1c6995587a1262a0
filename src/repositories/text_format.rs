//! Line-oriented text format for the address book.
//!
//! One record per line:
//!
//! ```text
//! <name>: <phone1>, <phone2>, ...: <birthday-or-empty>
//! ```
//!
//! Fields are separated by `": "` and phones by `", "`. Blank lines are
//! skipped on read.

use crate::domain::{Birthday, ContactName};
use crate::models::{AddressBook, Cursor, Page, Record};
use tracing::{debug, warn};

const FIELD_SEPARATOR: &str = ": ";
const PHONE_SEPARATOR: &str = ", ";

/// Parse a single stored line.
///
/// Returns `None` when the line does not have exactly three fields or the
/// name is invalid. An invalid phone list or birthday is dropped and the
/// record is kept without it.
pub fn parse_line(line: &str) -> Option<Record> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let [name, phones, birthday] = fields.as_slice() else {
        warn!(line, "Skipping stored line without three fields");
        return None;
    };

    let name = match ContactName::new(*name) {
        Ok(name) => name,
        Err(e) => {
            warn!(line, "Skipping stored line: {}", e);
            return None;
        }
    };
    let mut record = Record::new(name);

    let phones: Vec<&str> = phones.split(PHONE_SEPARATOR).map(str::trim).collect();
    if let Err(e) = record.add_phones(&phones) {
        debug!(name = %record.name(), "Dropping stored phones: {}", e);
    }

    let birthday = birthday.trim();
    if !birthday.is_empty() {
        match Birthday::new(birthday) {
            Ok(birthday) => record.add_birthday(birthday),
            Err(e) => debug!(name = %record.name(), "Dropping stored birthday: {}", e),
        }
    }

    Some(record)
}

/// Parse a whole stored file into a book paginating `page_size` records at a time.
pub fn parse_book(text: &str, page_size: usize) -> AddressBook {
    let mut book = AddressBook::with_page_size(page_size);
    for line in text.lines().filter(|l| !l.trim().is_empty()) {
        if let Some(record) = parse_line(line) {
            book.add_record(record);
        }
    }
    book
}

/// Render every record, one per line, by walking the pages from a fresh cursor.
///
/// The book's own session cursor is left untouched.
pub fn render_book(book: &AddressBook) -> String {
    let mut out = String::new();
    let mut cursor = Cursor::start();
    while let Page::Records { records, next } = book.page_at(cursor) {
        for record in records {
            out.push_str(&record.show_record());
            out.push('\n');
        }
        cursor = next;
    }
    out
}
