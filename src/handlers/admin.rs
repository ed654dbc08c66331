use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::db::queries;
use crate::errors::AppError;
use crate::services::fulfillment;
use crate::state::AppState;

/// Stored suggestion records, newest first.
pub async fn get_suggestions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let suggestions = {
        let db = state.db.lock().unwrap();
        queries::list_suggestions(&db).map_err(|e| AppError::Internal(e.to_string()))?
    };
    Ok(Json(json!(suggestions)))
}

pub async fn queue_status(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let pending = state
        .queue
        .depth()
        .await
        .map_err(|e| AppError::Queue(e.to_string()))?;
    Ok(Json(json!({ "pending": pending })))
}

/// Drain one batch immediately instead of waiting for the next worker tick.
pub async fn run_worker(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let processed = fulfillment::drain_batch(&state)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(Json(json!({ "processed": processed })))
}
