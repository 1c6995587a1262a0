use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for loading and saving the whole address book.
///
/// Provides abstraction over contact storage, enabling different
/// implementations (flat file, in-memory for tests).
pub trait ContactRepository {
    /// Load every stored contact into a fresh address book.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored contacts with the contents of `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
