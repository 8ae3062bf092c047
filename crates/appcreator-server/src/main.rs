//! App Creator template API server
//!
//! Stores and serves the layout templates offered by the app creator's
//! template picker, and optionally serves the editor client itself.

use appcreator_store::{MemoryStorage, SqliteStorage, TemplateStore};
use axum::{Router, extract::DefaultBodyLimit, routing::get};
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

mod config;
mod error;
mod routes;
mod seed;

use config::{ServerConfig, StoreBackend};
use error::{ApiError, Result};

/// Main application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TemplateStore>,
    pub config: ServerConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "appcreator_server=debug,tower_http=debug".to_string()),
        )
        .init();

    // Load configuration
    let config = ServerConfig::from_env()?;
    info!(
        "Starting App Creator server {} (templates v{}) on {}:{}",
        env!("CARGO_PKG_VERSION"),
        appcreator::version(),
        config.host,
        config.port
    );

    let store = open_store(&config).await?;

    if let Some(seed_file) = &config.seed_file {
        seed::seed_templates(store.as_ref(), seed_file).await?;
    }

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|_| ApiError::Config(format!("Invalid bind address {}", config.host)))?;

    let app = create_router(AppState { store, config });

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Open the configured template backend
async fn open_store(config: &ServerConfig) -> Result<Arc<dyn TemplateStore>> {
    match config.store_backend {
        StoreBackend::Memory => {
            info!("Using in-memory template store");
            Ok(Arc::new(MemoryStorage::new()))
        }
        StoreBackend::Sqlite => {
            let storage = SqliteStorage::with_kind(&config.database_url, &config.datastore_kind)
                .await
                .map_err(|e| ApiError::store("Failed to open template store", e))?;
            info!(
                "Using SQLite template store at {} (kind {})",
                config.database_url,
                storage.kind()
            );
            Ok(Arc::new(storage))
        }
    }
}

/// Create the main application router
fn create_router(state: AppState) -> Router {
    let router = Router::new()
        // Health check
        .route("/health", get(routes::health::health_check))
        // API routes
        .nest("/api/v1", api_routes());

    // Editor client bundle
    let router = match &state.config.static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(state.config.max_body_bytes)),
        )
        .with_state(state)
}

/// API routes
fn api_routes() -> Router<AppState> {
    routes::templates::router()
}
