//! HTTP route handlers for the screening insights API.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;

use crate::analysis::core::report::ConversationAnalysis;
use crate::upstream::error::UpstreamError;

use super::state::AppState;

/// Create the API router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/analyze", post(analyze_messages))
        .route("/api/screenings/{id}/analysis", get(analyze_screening))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "screening-insights",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Analyze messages posted by the caller.
///
/// Accepts a bare message array or an object with a `messages` array.
async fn analyze_messages(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Json<ConversationAnalysis> {
    Json(state.analyzer.analyze_value(&payload))
}

/// Screening analysis response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningAnalysisResponse {
    /// Screening identifier from the path.
    pub screening_id: String,
    /// Messages returned upstream, before validity filtering.
    pub message_count: usize,
    /// Analysis of those messages.
    pub analysis: ConversationAnalysis,
}

/// Fetch a screening transcript and analyze it.
async fn analyze_screening(
    State(state): State<Arc<AppState>>,
    Path(screening_id): Path<String>,
) -> Result<Json<ScreeningAnalysisResponse>, (StatusCode, String)> {
    let Some(source) = state.transcripts.as_ref() else {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Screening lookups are not configured".to_string(),
        ));
    };

    let messages = source
        .fetch_messages(&screening_id)
        .await
        .map_err(|e| upstream_failure(&e))?;

    let analysis = state.analyzer.analyze(&messages);
    Ok(Json(ScreeningAnalysisResponse {
        screening_id,
        message_count: messages.len(),
        analysis,
    }))
}

fn upstream_failure(err: &UpstreamError) -> (StatusCode, String) {
    tracing::warn!("Screening lookup failed: {err}");
    let status = if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::BAD_GATEWAY
    };
    (status, err.to_string())
}
