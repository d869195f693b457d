//! Chat and writing prompt handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::Query;
use axum::extract::State;
use axum::Extension;
use axum::Json;
use chrono::Utc;
use tracing::debug;
use tracing::info;

use super::AppState;
use crate::api::auth::AuthenticatedOwner;
use crate::api::types::ApiError;
use crate::api::types::ApiResponse;
use crate::api::types::ApiResult;
use crate::api::types::ChatRequest;
use crate::api::types::ChatResponse;
use crate::api::types::FieldError;
use crate::api::types::PromptsQuery;
use crate::assistant::PromptList;

/// Reply to a chat message (POST /api/ai/chat)
pub async fn chat(
    State(state): State<AppState>,
    Extension(AuthenticatedOwner(owner)): Extension<AuthenticatedOwner>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<ChatResponse> {
    info!("POST /api/ai/chat");

    let Json(req) = payload.map_err(|rejection| {
        debug!("Unreadable chat body: {}", rejection.body_text());
        ApiError::validation(vec![FieldError {
            field: "message".to_string(),
            message: "Request body must be JSON with a message field".to_string(),
        }])
    })?;

    let max_chars = state.assistant.config().max_message_chars;
    let message = req.validate(max_chars).map_err(ApiError::validation)?;

    let response = state.assistant.chat(owner, message).await;

    Ok(Json(ApiResponse::success(ChatResponse {
        response,
        timestamp: Utc::now(),
    })))
}

/// List writing prompts (GET /api/ai/prompts?category=)
pub async fn list_prompts(
    State(state): State<AppState>,
    Query(query): Query<PromptsQuery>,
) -> ApiResult<PromptList> {
    info!("GET /api/ai/prompts: category={:?}", query.category);

    Ok(Json(ApiResponse::success(
        state.assistant.prompts(query.category.as_deref()),
    )))
}
