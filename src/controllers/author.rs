use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::author::{AuthorData, AuthorResponse};
use crate::{
    domain::author::{AuthorService, AuthorServiceApi},
    error::AppResult,
};

pub struct AuthorController {
    author_service: Arc<AuthorService>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub name: String,
}

impl AuthorController {
    pub fn new(author_service: Arc<AuthorService>) -> Self {
        Self { author_service }
    }

    /// GET /api/author - List all authors
    pub async fn list_authors(
        State(controller): State<Arc<AuthorController>>,
    ) -> AppResult<Json<Vec<AuthorResponse>>> {
        let authors = controller.author_service.list_authors().await?;
        Ok(Json(authors))
    }

    /// POST /api/author - Create a new author
    pub async fn create_author(
        State(controller): State<Arc<AuthorController>>,
        Json(data): Json<AuthorData>,
    ) -> AppResult<Json<AuthorResponse>> {
        let author = controller.author_service.create_author(data).await?;
        Ok(Json(author))
    }

    /// GET /api/author/{authorId} - Get one author by id
    pub async fn get_author(
        State(controller): State<Arc<AuthorController>>,
        Path(author_id): Path<Uuid>,
    ) -> AppResult<Json<AuthorResponse>> {
        let author = controller.author_service.get_author(author_id).await?;
        Ok(Json(author))
    }

    /// PUT /api/author/{authorId} - Replace an author's fields
    pub async fn update_author(
        State(controller): State<Arc<AuthorController>>,
        Path(author_id): Path<Uuid>,
        Json(data): Json<AuthorData>,
    ) -> AppResult<Json<AuthorResponse>> {
        let author = controller
            .author_service
            .update_author(author_id, data)
            .await?;
        Ok(Json(author))
    }

    /// DELETE /api/author/{authorId} - Delete an author
    pub async fn delete_author(
        State(controller): State<Arc<AuthorController>>,
        Path(author_id): Path<Uuid>,
    ) -> AppResult<StatusCode> {
        controller.author_service.delete_author(author_id).await?;
        Ok(StatusCode::NO_CONTENT)
    }

    /// GET /api/author/search?name= - Search authors by name substring
    pub async fn search_authors(
        State(controller): State<Arc<AuthorController>>,
        Query(params): Query<SearchParams>,
    ) -> AppResult<Json<Vec<AuthorResponse>>> {
        let authors = controller
            .author_service
            .search_authors(&params.name)
            .await?;
        Ok(Json(authors))
    }
}
