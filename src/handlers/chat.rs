use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Utc;

use crate::errors::AppError;
use crate::models::{ChatMessage, ChatRequest, ChatResponse, UnstructuredMessage};
use crate::state::AppState;

/// Intake endpoint: forward the user's utterance to the
/// conversational-understanding service and wrap its reply in the chat
/// envelope.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let Some(first) = request.messages.first() else {
        return Err(AppError::BadRequest("empty messages array".to_string()));
    };

    let text = first.unstructured.text.trim().to_lowercase();
    let user_id = first
        .unstructured
        .id
        .clone()
        .unwrap_or_else(|| state.config.default_user_id.clone());

    tracing::info!(user_id = %user_id, text = %text, "incoming chat message");

    let reply = state
        .bot
        .post_text(&user_id, &text)
        .await
        .map_err(|e| AppError::Bot(e.to_string()))?;

    let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
    Ok(Json(ChatResponse {
        messages: vec![ChatMessage {
            kind: "string".to_string(),
            unstructured: UnstructuredMessage {
                id: Some("1".to_string()),
                text: reply,
                timestamp: Some(timestamp),
            },
        }],
    }))
}
