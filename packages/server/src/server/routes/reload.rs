use axum::{extract::Extension, Json};
use serde::Serialize;
use tracing::info;

use crate::server::app::AppState;

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub ok: bool,
    pub message: String,
    pub products: usize,
}

/// Rebuild the catalog from its source and swap it in.
pub async fn reload_handler(Extension(state): Extension<AppState>) -> Json<ReloadResponse> {
    let products = state.engine.reload().await;
    info!(products, "Catalog reloaded via HTTP");

    Json(ReloadResponse {
        ok: true,
        message: "Data reloaded".to_string(),
        products,
    })
}
