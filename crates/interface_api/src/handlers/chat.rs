//! Chat handler
//!
//! Stateless: the reply comes from the rule table and nothing is persisted.

use axum::{extract::State, Json};

use crate::dto::chat::*;
use crate::{error::ApiError, AppState};

/// Answers a visitor question from the response rule table
pub async fn respond(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if request.message.trim().is_empty() {
        return Err(ApiError::Validation("message must not be empty".to_string()));
    }

    let reply = state.chat_rules.respond(&request.message);
    Ok(Json(ChatResponse {
        reply: reply.to_string(),
    }))
}
