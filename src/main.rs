use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use author_backend::controllers::author::AuthorController;
use author_backend::domain::author::AuthorService;
use author_backend::infrastructure::config::{Config, LogFormat};
use author_backend::infrastructure::db::{check_connection, create_pool};
use author_backend::infrastructure::http::start_http_server;
use author_backend::infrastructure::repositories::AuthorRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    init_logging(&config);

    tracing::info!(
        "Starting Author Backend on {}:{}",
        config.host,
        config.port
    );

    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    let pool = Arc::new(pool);
    let config = Arc::new(config);

    // Explicit wiring: repository -> service -> controller
    let author_repo = Arc::new(AuthorRepository::new(pool.clone()));
    let author_service = Arc::new(AuthorService::new(author_repo));
    let author_controller = Arc::new(AuthorController::new(author_service));

    start_http_server(pool, config, author_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "author_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "author_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
