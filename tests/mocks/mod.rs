mod mock_contact_repository;
mod mock_index_resolver;

#[allow(unused_imports)]
pub use mock_contact_repository::MockContactRepository;
#[allow(unused_imports)]
pub use mock_index_resolver::ScriptedResolver;
