use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::errors::AppError;
use crate::models::IntentRequest;
use crate::services::dialog;
use crate::state::AppState;

fn valid_signature(secret: &str, signature: &str, body: &str) -> bool {
    let mut mac = match Hmac::<Sha1>::new_from_slice(secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => return false,
    };
    mac.update(body.as_bytes());
    let expected = base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes());

    expected == signature
}

/// Dialog-engine webhook: one intent request per turn, one dialog action
/// back.
pub async fn dialog_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    // Verify the engine's signature over the raw body (skip if the secret
    // is unset, dev mode)
    if !state.config.dialog_webhook_secret.is_empty() {
        let signature = headers
            .get("x-dialog-signature")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if signature.is_empty() {
            tracing::warn!("missing X-Dialog-Signature header");
            return (StatusCode::FORBIDDEN, "Missing signature").into_response();
        }

        if !valid_signature(&state.config.dialog_webhook_secret, signature, &body) {
            tracing::warn!("invalid dialog webhook signature");
            return (StatusCode::FORBIDDEN, "Invalid signature").into_response();
        }
    }

    let request: IntentRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(e) => {
            return AppError::BadRequest(format!("malformed intent request: {e}")).into_response()
        }
    };

    match dialog::dispatch(&state, request).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => e.into_response(),
    }
}
