//! Kitchen Inventory Management - API Gateway
//!
//! Sits between the browser and the inventory backend / prediction service.
//! Holds the session cookie, forwards the caller's token upstream and shapes
//! backend payloads for the UI (FIFO progress, urgency badges, notification
//! labels, spoilage alerts and purchase recommendations).

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod middleware;
mod routes;
mod services;

pub use config::Config;

use external::{InventoryApiClient, PredictionClient};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub inventory_api: InventoryApiClient,
    pub prediction: PredictionClient,
}

impl AppState {
    pub fn new(config: Config) -> error::AppResult<Self> {
        Ok(Self {
            inventory_api: InventoryApiClient::new(&config.backend)?,
            prediction: PredictionClient::new(&config.prediction)?,
            config: Arc::new(config),
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kim_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Kitchen Inventory gateway");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Inventory backend: {}", config.backend.base_url);
    tracing::info!("Prediction service: {}", config.prediction.base_url);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let state = AppState::new(config)?;

    let app = create_app(state);

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Kitchen Inventory Management Gateway"
}
