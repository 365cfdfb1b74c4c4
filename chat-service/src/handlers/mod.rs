//! HTTP handlers for the chat relay.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use serde_json::json;
use service_core::error::AppError;

use crate::AppState;
use crate::services::providers::ProviderError;

/// Public service metadata.
///
/// GET /
pub async fn root(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "service": "chat-service",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "Operational",
        "model": state.config.model,
        "endpoints": {
            "/": "Service information",
            "/chat": "POST a message, receive generated text",
        },
    }))
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Relay one user message to the text-generation provider.
///
/// POST /chat
///
/// Always answers 200: upstream failures become user-visible text in the
/// response body, never a server error.
#[tracing::instrument(skip_all)]
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let message = request.message.trim();
    if message.is_empty() {
        return Json(ChatResponse {
            response: "Please enter a message.".to_string(),
        });
    }

    let response = match state.provider.generate(message).await {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(error = %err, "Upstream generation failed");
            fallback_message(&err)
        }
    };

    Json(ChatResponse { response })
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound(anyhow::anyhow!("Endpoint not found"))
}

/// User-facing text for each upstream failure shape.
fn fallback_message(err: &ProviderError) -> String {
    match err {
        ProviderError::Timeout => "Request timeout. Please try again.".to_string(),
        ProviderError::Api { status, body } => format!("API Error {}: {}", status, body),
        ProviderError::EmptyResponse => {
            "I couldn't generate a response. Please try again.".to_string()
        }
        ProviderError::Network(detail) => format!("Connection error: {}", detail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_failure_shape_has_a_user_facing_message() {
        assert_eq!(
            fallback_message(&ProviderError::Timeout),
            "Request timeout. Please try again."
        );
        assert_eq!(
            fallback_message(&ProviderError::Api {
                status: 403,
                body: "quota exceeded".to_string()
            }),
            "API Error 403: quota exceeded"
        );
        assert_eq!(
            fallback_message(&ProviderError::EmptyResponse),
            "I couldn't generate a response. Please try again."
        );
        assert_eq!(
            fallback_message(&ProviderError::Network("dns failure".to_string())),
            "Connection error: dns failure"
        );
    }
}
