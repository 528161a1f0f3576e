use crate::domain::author::{Author, AuthorStore};
use crate::error::AppResult;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory author store, used by the e2e test harness in place of Postgres.
/// Matching and iteration order mirror what the SQL repository produces
/// closely enough for the API contract: substring search is case-sensitive
/// and listing carries no ordering guarantee.
#[derive(Default)]
pub struct InMemoryAuthorRepository {
    rows: RwLock<HashMap<Uuid, Author>>,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuthorStore for InMemoryAuthorRepository {
    async fn find_all(&self) -> AppResult<Vec<Author>> {
        let rows = self.rows.read().await;
        Ok(rows.values().cloned().collect())
    }

    async fn find_by_id(&self, author_id: Uuid) -> AppResult<Option<Author>> {
        let rows = self.rows.read().await;
        Ok(rows.get(&author_id).cloned())
    }

    async fn search_by_name(&self, name: &str) -> AppResult<Vec<Author>> {
        let rows = self.rows.read().await;
        Ok(rows
            .values()
            .filter(|a| a.firstname.contains(name) || a.lastname.contains(name))
            .cloned()
            .collect())
    }

    async fn insert(&self, firstname: &str, lastname: &str) -> AppResult<Author> {
        let author = Author {
            author_id: Uuid::new_v4(),
            firstname: firstname.to_string(),
            lastname: lastname.to_string(),
        };

        let mut rows = self.rows.write().await;
        rows.insert(author.author_id, author.clone());
        Ok(author)
    }

    async fn replace(&self, author: &Author) -> AppResult<bool> {
        let mut rows = self.rows.write().await;
        if !rows.contains_key(&author.author_id) {
            return Ok(false);
        }
        rows.insert(author.author_id, author.clone());
        Ok(true)
    }

    async fn delete(&self, author_id: Uuid) -> AppResult<bool> {
        let mut rows = self.rows.write().await;
        Ok(rows.remove(&author_id).is_some())
    }
}
