use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use ecosave_core::models::chat::ChatTurn;
use ecosave_gemini::outcome::Source;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub history: Vec<ChatTurn>,
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub source: Source,
}

/// Answer the newest message of a conversation the caller keeps.
pub async fn send_message(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = payload?;
    if req.message.trim().is_empty() {
        return Err(ApiError::BadRequest("message must not be empty".to_string()));
    }

    let outcome = ecosave_gemini::chat::send_chat_message(
        state.model.as_ref(),
        &state.models.chat,
        &req.history,
        &req.message,
    )
    .await;

    Ok(Json(ChatResponse {
        reply: outcome.value,
        source: outcome.source,
    }))
}
