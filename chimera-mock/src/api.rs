//! HTTP surface of the mock scoring API

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::Deserialize;
use shared::{
    ActionResponse, CryptoKey, KeyInventoryResponse, RiskInput, ScoredLogsPage,
    VulnerabilityResponse,
};

use crate::{logs, scoring, state::AppState};

/// Build the mock API router. Tests serve this in-process; the bin wraps
/// it with trace/CORS layers.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/keys/inventory", get(key_inventory))
        .route("/predict_vulnerability", post(predict_vulnerability))
        .route("/logs/scored", get(scored_logs))
        .route("/get_action", post(get_action))
        .with_state(state)
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Project Chimera API is running." }))
}

async fn key_inventory(State(state): State<Arc<AppState>>) -> Json<KeyInventoryResponse> {
    Json(KeyInventoryResponse {
        keys: state.keys.clone(),
    })
}

async fn predict_vulnerability(
    State(state): State<Arc<AppState>>,
    Json(key): Json<CryptoKey>,
) -> Result<Json<VulnerabilityResponse>, (StatusCode, Json<serde_json::Value>)> {
    // Keys named key-fail-* simulate the model rejecting a single key, the
    // way the real backend answers 503 when a model is not loaded. Lets
    // consumers exercise per-key failure isolation.
    if key.key_id.starts_with("key-fail") {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({ "detail": "SRAE model not loaded." })),
        ));
    }

    let score = scoring::vulnerability_score(&key, state.now);
    tracing::debug!(key_id = %key.key_id, score, "scored key");
    Ok(Json(VulnerabilityResponse {
        predicted_vulnerability_score: score,
    }))
}

#[derive(Debug, Deserialize)]
struct LogsQuery {
    #[serde(default = "default_page")]
    page: u32,
    #[serde(default = "default_limit")]
    limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    50
}

async fn scored_logs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LogsQuery>,
) -> Json<ScoredLogsPage> {
    Json(logs::page(&state, query.page, query.limit))
}

/// Loose request shape so "neither field" and "both fields" can be
/// rejected explicitly instead of failing untagged-enum deserialization
/// with an opaque message.
#[derive(Debug, Deserialize)]
struct ActionRequest {
    vulnerability_score: Option<f64>,
    anomaly_score: Option<f64>,
}

async fn get_action(
    Json(request): Json<ActionRequest>,
) -> Result<Json<ActionResponse>, (StatusCode, Json<serde_json::Value>)> {
    let input = match (request.vulnerability_score, request.anomaly_score) {
        (Some(score), None) => RiskInput::vulnerability(score),
        (None, Some(score)) => RiskInput::anomaly(score),
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "detail": "Provide exactly one of vulnerability_score or anomaly_score."
                })),
            ));
        }
    };

    let action = scoring::recommend(input);
    tracing::debug!(score = input.score(), action = %action, "recommended action");
    Ok(Json(ActionResponse {
        recommended_action: action.as_str().to_string(),
    }))
}
