//! The address book: every record keyed by name, plus the browsing cursor.

use super::record::Record;
use crate::error::BookError;
use std::collections::BTreeMap;

/// Records shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 2;

/// Text returned by [`AddressBook::show_records`] once every page was shown.
pub const END_MARKER: &str = "the end";

/// Offset into the sorted key space of an [`AddressBook`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor(usize);

impl Cursor {
    /// A cursor at the first record.
    pub fn start() -> Self {
        Self(0)
    }

    pub fn offset(self) -> usize {
        self.0
    }
}

/// Result of one pagination step.
#[derive(Debug, PartialEq)]
pub enum Page<'a> {
    /// Up to one page of records in name order, and the cursor for the next step.
    Records { records: Vec<&'a Record>, next: Cursor },
    /// The cursor is past the last record; the caller should restart from [`Cursor::start`].
    End,
}

/// All contacts keyed by name. Iteration is always in sorted name order.
#[derive(Debug, Clone)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
    page_size: usize,
    cursor: Cursor,
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// An empty book paginating `page_size` records at a time (minimum 1).
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            records: BTreeMap::new(),
            page_size: page_size.max(1),
            cursor: Cursor::start(),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Insert or replace the record stored under its name.
    pub fn add_record(&mut self, record: Record) {
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    /// Remove a record, returning a message either way.
    pub fn delete_record(&mut self, name: &str) -> String {
        match self.records.remove(name) {
            Some(_) => format!("{} was removed", name),
            None => BookError::NotFound(name.to_string()).to_string(),
        }
    }

    /// Strict lookup.
    pub fn get(&self, name: &str) -> Result<&Record, BookError> {
        self.records
            .get(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))
    }

    /// Strict mutable lookup.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Record, BookError> {
        self.records
            .get_mut(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))
    }

    /// The page starting at `cursor`, or [`Page::End`] when nothing is left.
    pub fn page_at(&self, cursor: Cursor) -> Page<'_> {
        if cursor.0 >= self.records.len() {
            return Page::End;
        }
        let records = self
            .records
            .values()
            .skip(cursor.0)
            .take(self.page_size)
            .collect();
        Page::Records {
            records,
            next: Cursor(cursor.0 + self.page_size),
        }
    }

    /// The session cursor used by [`AddressBook::show_records`].
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = Cursor::start();
    }

    /// Render the next page at the session cursor and advance it.
    ///
    /// Once past the last record this resets the cursor and returns [`END_MARKER`].
    pub fn show_records(&mut self) -> String {
        let (text, next) = match self.page_at(self.cursor) {
            Page::Records { records, next } => (render(&records), next),
            Page::End => (END_MARKER.to_string(), Cursor::start()),
        };
        self.cursor = next;
        text
    }
}

fn render(records: &[&Record]) -> String {
    records
        .iter()
        .map(|r| r.show_record())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContactName, PhoneNumber};

    fn record(name: &str) -> Record {
        Record::with_details(
            ContactName::new(name).unwrap(),
            Some(PhoneNumber::new("1234567").unwrap()),
            None,
        )
    }

    fn book(names: &[&str]) -> AddressBook {
        let mut book = AddressBook::new();
        for name in names {
            book.add_record(record(name));
        }
        book
    }

    fn page_len(page: &Page<'_>) -> Option<usize> {
        match page {
            Page::Records { records, .. } => Some(records.len()),
            Page::End => None,
        }
    }

    #[test]
    fn test_add_then_get() {
        let book = book(&["Ann"]);
        let rec = book.get("Ann").unwrap();
        assert_eq!(rec.name().as_str(), "Ann");
    }

    #[test]
    fn test_add_overwrites_same_name() {
        let mut book = book(&["Ann"]);
        book.add_record(Record::new(ContactName::new("Ann").unwrap()));
        assert_eq!(book.len(), 1);
        assert!(book.get("Ann").unwrap().phones().is_empty());
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let book = book(&[]);
        assert_eq!(
            book.get("Bob").unwrap_err(),
            BookError::NotFound("Bob".to_string())
        );
    }

    #[test]
    fn test_delete_record() {
        let mut book = book(&["Ann"]);
        assert_eq!(book.delete_record("Ann"), "Ann was removed");
        assert_eq!(book.delete_record("Ann"), "This user isn't in the Book");
        assert!(book.is_empty());
    }

    #[test]
    fn test_page_at_walks_sorted_keys() {
        let book = book(&["Eve", "Bob", "Dan", "Ann", "Cid"]);

        let first = book.page_at(Cursor::start());
        let Page::Records { records, next } = first else {
            panic!("expected a page");
        };
        let names: Vec<&str> = records.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Ann", "Bob"]);
        assert_eq!(next.offset(), 2);

        assert_eq!(page_len(&book.page_at(next)), Some(2));
        assert_eq!(page_len(&book.page_at(Cursor(4))), Some(1));
        assert_eq!(book.page_at(Cursor(6)), Page::End);
    }

    #[test]
    fn test_show_records_pages_then_wraps() {
        let mut book = book(&["Eve", "Bob", "Dan", "Ann", "Cid"]);

        let first = book.show_records();
        assert_eq!(first, "Ann: 1234567: \nBob: 1234567: ");
        assert_eq!(book.show_records(), "Cid: 1234567: \nDan: 1234567: ");
        assert_eq!(book.show_records(), "Eve: 1234567: ");
        assert_eq!(book.cursor().offset(), 6);

        assert_eq!(book.show_records(), END_MARKER);
        assert_eq!(book.cursor(), Cursor::start());

        assert_eq!(book.show_records(), first);
    }

    #[test]
    fn test_show_records_on_empty_book() {
        let mut book = book(&[]);
        assert_eq!(book.show_records(), END_MARKER);
        assert_eq!(book.cursor(), Cursor::start());
    }

    #[test]
    fn test_custom_page_size() {
        let mut book = AddressBook::with_page_size(3);
        for name in ["Ann", "Bob", "Cid", "Dan"] {
            book.add_record(record(name));
        }
        assert_eq!(book.show_records().lines().count(), 3);
        assert_eq!(book.show_records().lines().count(), 1);
        assert_eq!(book.show_records(), END_MARKER);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        assert_eq!(AddressBook::with_page_size(0).page_size(), 1);
    }

    #[test]
    fn test_reset_cursor() {
        let mut book = book(&["Ann", "Bob", "Cid"]);
        book.show_records();
        book.reset_cursor();
        assert_eq!(book.show_records(), "Ann: 1234567: \nBob: 1234567: ");
    }
}
