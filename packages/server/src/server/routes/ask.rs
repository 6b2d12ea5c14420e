use axum::{extract::Extension, Json};
use product_qa::AnswerResult;
use serde::Deserialize;
use tracing::debug;

use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// Answer a product question against the current catalog snapshot.
pub async fn ask_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<AskRequest>,
) -> Json<AnswerResult> {
    let result = state.engine.answer(&request.question);
    debug!(
        ok = result.ok,
        product = result.product.as_deref().unwrap_or("-"),
        confidence = result.confidence.unwrap_or(0),
        "Answered question"
    );

    Json(result)
}
