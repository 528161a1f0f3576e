pub mod author_repository;
pub mod in_memory_author_repository;

pub use author_repository::AuthorRepository;
pub use in_memory_author_repository::InMemoryAuthorRepository;
