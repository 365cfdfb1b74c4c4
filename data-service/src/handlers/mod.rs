//! HTTP handlers for the data API.
//!
//! Every handler reads from the immutable record store in `AppState`; the
//! access gate runs as middleware before any of the protected handlers.

pub mod insights;

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use service_core::error::AppError;

use crate::AppState;
use crate::services::query::{self, QueryParams};
use crate::services::stats::{self, StatsSummary};
use crate::services::store::Record;

/// Public service metadata and endpoint directory.
///
/// GET /
pub async fn root(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "service": "data-service",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "Operational",
        "records_loaded": state.store.len(),
        "endpoints": {
            "/": "Service information",
            "/api/schema": "Data structure",
            "/api/data": "Query transactions",
            "/api/stats": "Descriptive statistics",
            "/api/ai/basket-analysis": "Product associations",
            "/api/ai/customer-segments": "Customer segmentation",
            "/api/ai/insights": "Strategic insights",
        },
    }))
}

#[derive(Debug, Serialize)]
pub struct FieldSchema {
    pub field_name: String,
    pub data_type: &'static str,
}

/// Field names of the loaded table, in header order.
///
/// GET /api/schema
pub async fn schema(State(state): State<AppState>) -> Result<Json<Vec<FieldSchema>>, AppError> {
    ensure_data(&state)?;

    let schema = state
        .store
        .headers()
        .iter()
        .map(|header| FieldSchema {
            field_name: header.clone(),
            data_type: "string",
        })
        .collect();

    Ok(Json(schema))
}

/// Query params for /api/data.
///
/// All three are optional; numeric fields arrive as strings so that
/// unparseable input is ignored instead of rejected.
#[derive(Debug, Deserialize)]
pub struct DataQuery {
    pub category: Option<String>,
    pub min_rating: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DataResponse {
    pub count: usize,
    pub data: Vec<Record>,
}

/// Filtered, limited view of the record store.
///
/// GET /api/data
#[tracing::instrument(skip(state))]
pub async fn query_data(
    State(state): State<AppState>,
    Query(params): Query<DataQuery>,
) -> Result<Json<DataResponse>, AppError> {
    ensure_data(&state)?;

    let params = QueryParams {
        category: params.category,
        min_rating: params.min_rating,
        limit: params.limit,
    };
    let results = query::query(state.store.records(), &params);

    Ok(Json(DataResponse {
        count: results.len(),
        data: results.into_iter().cloned().collect(),
    }))
}

/// Descriptive statistics over the full record set.
///
/// GET /api/stats
#[tracing::instrument(skip_all)]
pub async fn stats(State(state): State<AppState>) -> Result<Json<StatsSummary>, AppError> {
    ensure_data(&state)?;

    Ok(Json(stats::stats(state.store.records())?))
}

/// Fallback for unknown routes; runs behind the access gate like every
/// other non-root path.
pub async fn not_found() -> AppError {
    AppError::NotFound(anyhow::anyhow!("Endpoint not found"))
}

fn ensure_data(state: &AppState) -> Result<(), AppError> {
    if state.store.is_empty() {
        return Err(AppError::ServiceUnavailable("No data available".to_string()));
    }
    Ok(())
}
