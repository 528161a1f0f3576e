use super::error::AuthorServiceError;
use crate::domain::author::{Author, AuthorData, AuthorResponse, AuthorStore};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub struct AuthorService {
    store: Arc<dyn AuthorStore>,
}

impl AuthorService {
    pub fn new(store: Arc<dyn AuthorStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
pub trait AuthorServiceApi: Send + Sync {
    async fn list_authors(&self) -> Result<Vec<AuthorResponse>, AuthorServiceError>;

    async fn create_author(&self, data: AuthorData) -> Result<AuthorResponse, AuthorServiceError>;

    async fn get_author(&self, author_id: Uuid) -> Result<AuthorResponse, AuthorServiceError>;

    async fn update_author(
        &self,
        author_id: Uuid,
        data: AuthorData,
    ) -> Result<AuthorResponse, AuthorServiceError>;

    async fn delete_author(&self, author_id: Uuid) -> Result<(), AuthorServiceError>;

    async fn search_authors(&self, name: &str) -> Result<Vec<AuthorResponse>, AuthorServiceError>;
}

#[async_trait]
impl AuthorServiceApi for AuthorService {
    async fn list_authors(&self) -> Result<Vec<AuthorResponse>, AuthorServiceError> {
        let authors = self
            .store
            .find_all()
            .await
            .map_err(|e| AuthorServiceError::Dependency(e.to_string()))?;
        Ok(authors.into_iter().map(AuthorResponse::from).collect())
    }

    async fn create_author(&self, data: AuthorData) -> Result<AuthorResponse, AuthorServiceError> {
        // TODO check that the author is unique before inserting
        let author = self
            .store
            .insert(&data.firstname, &data.lastname)
            .await
            .map_err(|e| AuthorServiceError::Dependency(e.to_string()))?;

        Ok(AuthorResponse::from(author))
    }

    async fn get_author(&self, author_id: Uuid) -> Result<AuthorResponse, AuthorServiceError> {
        let author = self
            .store
            .find_by_id(author_id)
            .await
            .map_err(|e| AuthorServiceError::Dependency(e.to_string()))?
            .ok_or(AuthorServiceError::NotFound)?;

        Ok(AuthorResponse::from(author))
    }

    async fn update_author(
        &self,
        author_id: Uuid,
        data: AuthorData,
    ) -> Result<AuthorResponse, AuthorServiceError> {
        // Path id plus body fields form the replacement row. There is no
        // existence pre-check: a replace that writes nothing is a conflict
        // (row absent or removed between read and write).
        let author = Author {
            author_id,
            firstname: data.firstname,
            lastname: data.lastname,
        };

        let replaced = self
            .store
            .replace(&author)
            .await
            .map_err(|e| AuthorServiceError::Dependency(e.to_string()))?;

        if !replaced {
            return Err(AuthorServiceError::Conflict);
        }

        Ok(AuthorResponse::from(author))
    }

    async fn delete_author(&self, author_id: Uuid) -> Result<(), AuthorServiceError> {
        let deleted = self
            .store
            .delete(author_id)
            .await
            .map_err(|e| AuthorServiceError::Dependency(e.to_string()))?;

        // Absent rows answer 400 here, unlike get_author's 404
        if !deleted {
            return Err(AuthorServiceError::Invalid("Author not found".to_string()));
        }

        Ok(())
    }

    async fn search_authors(&self, name: &str) -> Result<Vec<AuthorResponse>, AuthorServiceError> {
        if name.trim().is_empty() {
            return Err(AuthorServiceError::Invalid("Invalid value".to_string()));
        }

        let authors = self
            .store
            .search_by_name(name)
            .await
            .map_err(|e| AuthorServiceError::Dependency(e.to_string()))?;

        Ok(authors.into_iter().map(AuthorResponse::from).collect())
    }
}
