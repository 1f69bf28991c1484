//! Cable Expert API /v1: REST endpoints
//!
//! Stateless JSON service over the sizing and weight-check engines. Reference
//! tables are loaded once at startup and shared read-only by every request.
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use metrics::Metrics;

use axum::{
    routing::{get, post},
    Router,
};
use cable_tables::ReferenceTables;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
pub struct AppState {
    pub tables: ReferenceTables,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(tables: ReferenceTables) -> Result<Self, prometheus::Error> {
        Ok(Self {
            tables,
            metrics: Metrics::new()?,
        })
    }
}

pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/v1/health", get(handlers::health))
        .route("/api/v1/calculate/sizing", post(handlers::calculate_sizing))
        .route("/api/v1/check/fake", post(handlers::check_fake))
        .route("/api/v1/reference/sizes", get(handlers::reference_sizes))
        .route("/metrics", get(handlers::metrics))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::cors())
                .layer(axum::middleware::from_fn(middleware::request_logging)),
        )
        .with_state(state)
}

pub async fn run(config: ServiceConfig) -> anyhow::Result<()> {
    let tables = config.tables()?;
    let state = Arc::new(AppState::new(tables)?);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    tracing::info!("Cable Expert API listening on {}", config.addr);
    axum::serve(listener, app).await?;
    Ok(())
}
