use axum::{
    Json,
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::IntoResponse,
};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Tier label of the credential that authorized the request.
///
/// Descriptive only; every valid key grants the same access.
#[derive(Debug, Clone)]
pub struct ClientTier(pub String);

/// Middleware requiring a valid API key on every protected route.
///
/// Expects `Authorization: Bearer <token>` with the token present in the
/// static credential map. Anything else is a 401 with no further processing.
pub async fn require_api_key(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let tier = match token.and_then(|token| state.config.api_keys.get(token)) {
        Some(tier) => tier.clone(),
        None => {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse {
                    error: "Invalid API Key".to_string(),
                }),
            ));
        }
    };

    tracing::debug!(tier = %tier, "API key accepted");

    // Store the tier in request extensions so handlers can access it
    req.extensions_mut().insert(ClientTier(tier));

    Ok(next.run(req).await)
}
