//! Route definitions for the Kitchen Inventory gateway

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Auth routes (public)
        .nest("/auth", auth_routes())
        // Protected routes - session profile
        .route("/user", get(handlers::get_user))
        // Protected routes - unit membership
        .nest("/units", unit_routes())
        // Protected routes - batch inventory
        .route(
            "/batches",
            get(handlers::list_batches).post(handlers::create_batch),
        )
        // Protected routes - FIFO and usage
        .nest("/fifo", fifo_routes())
        .route("/menus", get(handlers::list_menus))
        .route("/usage", post(handlers::record_usage))
        // Protected routes - notifications
        .nest("/notifications", notification_routes())
        // Protected routes - dashboard
        .nest("/dashboard", dashboard_routes())
        // Protected routes - freshness predictions
        .nest("/predictions", prediction_routes())
        // Forecasting (prediction service)
        .nest("/forecast", forecast_routes())
}

/// Authentication routes (public)
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::login))
        .route("/register", post(handlers::register))
        .route("/logout", post(handlers::logout))
}

fn unit_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::create_unit))
        .route("/join", post(handlers::join_unit))
        .route("/invite", post(handlers::accept_invite))
}

fn fifo_routes() -> Router<AppState> {
    Router::new()
        .route("/batches", get(handlers::fifo_batches))
        .route("/priority", get(handlers::fifo_priority))
        .route("/use-for-menu", post(handlers::use_for_menu))
        .route("/use-manual", post(handlers::use_manual))
}

fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_notifications))
        .route("/summary", get(handlers::get_notification_summary))
        .route("/read-all", put(handlers::mark_all_read))
        .route("/read", put(handlers::mark_read))
        .route("/:id", delete(handlers::delete_notification))
}

fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_dashboard))
        .route("/summary", get(handlers::get_dashboard_summary))
        .route("/expiry-alerts", get(handlers::get_expiry_alerts))
        .route("/waste-loss", get(handlers::get_waste_loss))
}

fn prediction_routes() -> Router<AppState> {
    Router::new()
        .route("/freshness", get(handlers::get_freshness_summary))
        .route("/spoilage-alerts", get(handlers::get_spoilage_alerts))
}

fn forecast_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_forecast))
        .route("/dashboard", get(handlers::get_forecast_dashboard))
        .route("/usage", get(handlers::get_forecast_usage))
        .route("/recommendations", get(handlers::get_purchase_recommendations))
}
