mod file_contact_repository;
pub mod text_format;
mod traits;

pub use file_contact_repository::FileContactRepository;
pub use text_format::{parse_book, parse_line, render_book};
pub use traits::ContactRepository;
