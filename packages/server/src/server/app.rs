//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use product_qa::ProductQa;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::server::routes::{ask_handler, health_handler, reload_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ProductQa>,
}

/// Build the Axum application router
pub fn build_app(engine: Arc<ProductQa>) -> Router {
    let state = AppState { engine };

    Router::new()
        .route("/health", get(health_handler))
        .route("/reload", post(reload_handler))
        .route("/ask", post(ask_handler))
        .layer(Extension(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
