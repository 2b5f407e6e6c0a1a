//! ecosave-server library root.
//!
//! Exposes the router and its state so integration tests can drive the API
//! in-process with a substitute model.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the API router over `state`.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Customer portal
        .route("/advice", post(routes::advice::generate_advice))
        // Staff portal
        .route("/audits", get(routes::audits::list_audits))
        .route("/audits", post(routes::audits::create_audit))
        .route("/audits/{id}", get(routes::audits::get_audit))
        .route("/audits/{id}/analyze", post(routes::audits::analyze_audit))
        // Assistant widget
        .route("/chat", post(routes::chat::send_message))
        .layer(axum_mw::from_fn(middleware::request_log::log_request))
        .layer(cors)
        .with_state(state)
}
