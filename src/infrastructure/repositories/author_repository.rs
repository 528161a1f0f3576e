use crate::domain::author::{Author, AuthorStore};
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Postgres-backed author store
pub struct AuthorRepository {
    pool: Arc<DbPool>,
}

impl AuthorRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorStore for AuthorRepository {
    async fn find_all(&self) -> AppResult<Vec<Author>> {
        let pool = self.pool.as_ref();
        let authors = sqlx::query_as::<_, Author>(
            r#"
            SELECT author_id, firstname, lastname
            FROM authors
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(authors)
    }

    async fn find_by_id(&self, author_id: Uuid) -> AppResult<Option<Author>> {
        let pool = self.pool.as_ref();
        let author = sqlx::query_as::<_, Author>(
            r#"
            SELECT author_id, firstname, lastname
            FROM authors
            WHERE author_id = $1
            "#,
        )
        .bind(author_id)
        .fetch_optional(pool)
        .await?;

        Ok(author)
    }

    async fn search_by_name(&self, name: &str) -> AppResult<Vec<Author>> {
        // strpos keeps %, _ and \ in the term literal, unlike a LIKE pattern.
        // Case sensitivity follows the column collation.
        let pool = self.pool.as_ref();
        let authors = sqlx::query_as::<_, Author>(
            r#"
            SELECT author_id, firstname, lastname
            FROM authors
            WHERE strpos(firstname, $1) > 0
               OR strpos(lastname, $1) > 0
            "#,
        )
        .bind(name)
        .fetch_all(pool)
        .await?;

        Ok(authors)
    }

    async fn insert(&self, firstname: &str, lastname: &str) -> AppResult<Author> {
        // The table default generates the id
        let pool = self.pool.as_ref();
        let author = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (firstname, lastname)
            VALUES ($1, $2)
            RETURNING author_id, firstname, lastname
            "#,
        )
        .bind(firstname)
        .bind(lastname)
        .fetch_one(pool)
        .await?;

        Ok(author)
    }

    async fn replace(&self, author: &Author) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query(
            r#"
            UPDATE authors
            SET firstname = $1, lastname = $2
            WHERE author_id = $3
            "#,
        )
        .bind(&author.firstname)
        .bind(&author.lastname)
        .bind(author.author_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, author_id: Uuid) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query(
            r#"
            DELETE FROM authors
            WHERE author_id = $1
            "#,
        )
        .bind(author_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
