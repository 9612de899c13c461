//! Chat request handler.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use tracing::{debug, warn};

use crate::error::AppResult;
use crate::models::{ChatRequest, ChatResponse};

/// `POST /api/chat` — answer a single question.
///
/// A body that is not JSON, or lacks a string `question`, is rejected with a
/// validation error and no answer.
pub async fn chat_handler(
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    let Json(request) = payload.inspect_err(|e| warn!("rejected chat request: {e}"))?;

    let resolution = quokka_core::resolve_detailed(&request.question);
    debug!(
        matched = %resolution.matched,
        question_len = request.question.len(),
        "answered question"
    );

    Ok(Json(ChatResponse {
        answer: resolution.answer,
    }))
}
