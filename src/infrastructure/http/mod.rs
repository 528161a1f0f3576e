use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{author::AuthorController, health};
use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;

pub mod request_id;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

/// Author routes under /api/author. Shared between the server and the e2e
/// test harness.
pub fn author_routes(author_controller: Arc<AuthorController>) -> Router {
    // /search must stay distinct from the :authorId segment
    Router::new()
        .route(
            "/api/author",
            get(AuthorController::list_authors).post(AuthorController::create_author),
        )
        .route("/api/author/search", get(AuthorController::search_authors))
        .route(
            "/api/author/:authorId",
            get(AuthorController::get_author)
                .put(AuthorController::update_author)
                .delete(AuthorController::delete_author),
        )
        .with_state(author_controller)
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    pool: Arc<DbPool>,
    config: Arc<Config>,
    author_controller: Arc<AuthorController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(pool.clone())
        .merge(author_routes(author_controller))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http());

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
