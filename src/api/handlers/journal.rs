//! Mood analysis and insight handlers

use axum::extract::State;
use axum::Extension;
use axum::Json;
use tracing::error;
use tracing::info;

use super::AppState;
use crate::api::auth::AuthenticatedOwner;
use crate::api::types::ApiError;
use crate::api::types::ApiResponse;
use crate::api::types::ApiResult;
use crate::assistant::JournalInsights;
use crate::assistant::MoodAnalysis;

/// Analyze mood of recent entries (POST /api/ai/analyze-mood)
pub async fn analyze_mood(
    State(state): State<AppState>,
    Extension(AuthenticatedOwner(owner)): Extension<AuthenticatedOwner>,
) -> ApiResult<MoodAnalysis> {
    info!("POST /api/ai/analyze-mood");

    match state.assistant.analyze_mood(owner).await {
        Ok(analysis) => Ok(Json(ApiResponse::success(analysis))),
        Err(e) => {
            error!("Mood analysis error for {}: {}", owner, e);
            Err(ApiError::internal("Failed to analyze mood"))
        }
    }
}

/// Summarize journaling habits (GET /api/ai/insights)
pub async fn journal_insights(
    State(state): State<AppState>,
    Extension(AuthenticatedOwner(owner)): Extension<AuthenticatedOwner>,
) -> ApiResult<JournalInsights> {
    info!("GET /api/ai/insights");

    state
        .assistant
        .insights(owner)
        .await
        .map(|insights| Json(ApiResponse::success(insights)))
        .map_err(|e| {
            error!("Insights error for {}: {}", owner, e);
            ApiError::internal("Failed to get journal insights")
        })
}
