use contact_book::error::StorageResult;
use contact_book::models::AddressBook;
use contact_book::repositories::{parse_book, render_book, ContactRepository};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Keeps the stored text in memory, so loads and saves go through the real
/// line format, and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    contents: Arc<Mutex<String>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository whose stored file holds `text`.
    pub fn with_contents(text: &str) -> Self {
        let repo = Self::new();
        *repo.contents.lock().unwrap() = text.to_string();
        repo
    }

    /// The text written by the last save.
    pub fn contents(&self) -> String {
        self.contents.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");
        Ok(parse_book(&self.contents.lock().unwrap(), 2))
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");
        *self.contents.lock().unwrap() = render_book(book);
        Ok(())
    }
}
