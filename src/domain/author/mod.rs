use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppResult;

pub mod error;
pub mod model;
pub mod service;

pub use error::AuthorServiceError;
pub use model::Author;
pub use service::{AuthorService, AuthorServiceApi};

/// Response shape for all author endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorResponse {
    pub author_id: Uuid,
    pub firstname: String,
    pub lastname: String,
}

/// Request body for create and update: the id never travels in the body, it
/// comes from the URL path on update and from the store on create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorData {
    pub firstname: String,
    pub lastname: String,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        Self {
            author_id: author.author_id,
            firstname: author.firstname,
            lastname: author.lastname,
        }
    }
}

/// Store trait for author rows. Implemented by the Postgres repository and by
/// the in-memory repository used in tests.
#[async_trait]
pub trait AuthorStore: Send + Sync {
    /// All rows, in whatever order the store returns them
    async fn find_all(&self) -> AppResult<Vec<Author>>;

    async fn find_by_id(&self, author_id: Uuid) -> AppResult<Option<Author>>;

    /// Rows whose firstname or lastname contains the given substring.
    /// Case sensitivity follows the store's collation.
    async fn search_by_name(&self, name: &str) -> AppResult<Vec<Author>>;

    /// Insert a new row; the store assigns the id and returns the persisted row
    async fn insert(&self, firstname: &str, lastname: &str) -> AppResult<Author>;

    /// Full replace keyed by `author.author_id`. Returns false when no row was
    /// written, i.e. the target row is absent or was removed concurrently.
    async fn replace(&self, author: &Author) -> AppResult<bool>;

    /// Remove a row; returns whether anything was deleted
    async fn delete(&self, author_id: Uuid) -> AppResult<bool>;
}
