use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use crate::repositories::text_format::{parse_book, render_book};
use crate::repositories::traits::ContactRepository;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Contact repository backed by one flat text file.
///
/// A missing file loads as an empty book. Saving writes the whole book to a
/// temporary sibling file and renames it over the target.
pub struct FileContactRepository {
    path: PathBuf,
    page_size: usize,
}

impl FileContactRepository {
    /// Create a repository for `path`; loaded books paginate `page_size` records at a time.
    pub fn new(path: impl Into<PathBuf>, page_size: usize) -> Self {
        Self {
            path: path.into(),
            page_size,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ContactRepository for FileContactRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No contacts file at {}, starting empty", self.path.display());
                String::new()
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let book = parse_book(&text, self.page_size);
        info!(
            "Loaded {} contacts from {}",
            book.len(),
            self.path.display()
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let temp = self.temp_path();
        fs::write(&temp, render_book(book)).map_err(|e| self.io_error(e))?;
        if let Err(e) = fs::rename(&temp, &self.path) {
            if let Err(cleanup) = fs::remove_file(&temp) {
                warn!(
                    "Failed to remove temporary file {}: {}",
                    temp.display(),
                    cleanup
                );
            }
            return Err(self.io_error(e));
        }

        info!("Saved {} contacts to {}", book.len(), self.path.display());
        Ok(())
    }
}
