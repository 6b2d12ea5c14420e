use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub mode: String,
    pub products: usize,
}

/// Health check endpoint
///
/// Reports the catalog source and how many products are currently indexed.
/// An empty catalog is still healthy; the source may come back on reload.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        mode: state.engine.source_name().to_string(),
        products: state.engine.snapshot().len(),
    })
}
