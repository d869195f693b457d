//! Journal entry handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use tracing::debug;
use tracing::error;
use tracing::info;
use uuid::Uuid;

use super::AppState;
use crate::api::auth::AuthenticatedOwner;
use crate::api::types::ApiError;
use crate::api::types::ApiResponse;
use crate::api::types::ApiResult;
use crate::api::types::CreateEntryRequest;
use crate::api::types::FieldError;
use crate::errors::JournalError;
use crate::models::JournalEntry;
use crate::models::NewJournalEntry;

/// Create an entry (POST /api/entries)
pub async fn create_entry(
    State(state): State<AppState>,
    Extension(AuthenticatedOwner(owner)): Extension<AuthenticatedOwner>,
    payload: Result<Json<CreateEntryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<JournalEntry>>), ApiError> {
    info!("POST /api/entries");

    let Json(req) = payload.map_err(|rejection| {
        debug!("Unreadable entry body: {}", rejection.body_text());
        ApiError::validation(vec![FieldError {
            field: "body".to_string(),
            message: "Request body must be JSON with title and content fields".to_string(),
        }])
    })?;
    let (title, content) = req.validate().map_err(ApiError::validation)?;

    let entry = state
        .assistant
        .store()
        .create_entry(NewJournalEntry::new(owner, title, content))
        .await
        .map_err(|e| {
            error!("Create entry error for {}: {}", owner, e);
            ApiError::internal("Failed to create entry")
        })?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(entry))))
}

/// Active entries, newest first (GET /api/entries)
pub async fn list_entries(
    State(state): State<AppState>,
    Extension(AuthenticatedOwner(owner)): Extension<AuthenticatedOwner>,
) -> ApiResult<Vec<JournalEntry>> {
    info!("GET /api/entries");
    list_with_flag(&state, owner, false).await
}

/// Soft-deleted entries, newest first (GET /api/entries/deleted)
pub async fn list_deleted_entries(
    State(state): State<AppState>,
    Extension(AuthenticatedOwner(owner)): Extension<AuthenticatedOwner>,
) -> ApiResult<Vec<JournalEntry>> {
    info!("GET /api/entries/deleted");
    list_with_flag(&state, owner, true).await
}

async fn list_with_flag(state: &AppState, owner: Uuid, deleted: bool) -> ApiResult<Vec<JournalEntry>> {
    state
        .assistant
        .store()
        .list_entries(owner, deleted)
        .await
        .map(|entries| Json(ApiResponse::success(entries)))
        .map_err(|e| {
            error!("List entries error for {}: {}", owner, e);
            ApiError::internal("Failed to fetch entries")
        })
}

/// Soft-delete an entry (DELETE /api/entries/:id)
pub async fn delete_entry(
    State(state): State<AppState>,
    Extension(AuthenticatedOwner(owner)): Extension<AuthenticatedOwner>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = entry_id(id)?;
    info!("DELETE /api/entries/{}", id);

    state
        .assistant
        .store()
        .soft_delete_entry(owner, id)
        .await
        .map_err(|e| entry_error(owner, "Failed to delete entry", e))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Bring a soft-deleted entry back (PATCH /api/restore/:id)
pub async fn restore_entry(
    State(state): State<AppState>,
    Extension(AuthenticatedOwner(owner)): Extension<AuthenticatedOwner>,
    id: Result<Path<Uuid>, PathRejection>,
) -> ApiResult<Uuid> {
    let id = entry_id(id)?;
    info!("PATCH /api/restore/{}", id);

    state
        .assistant
        .store()
        .restore_entry(owner, id)
        .await
        .map_err(|e| entry_error(owner, "Failed to restore entry", e))?;

    Ok(Json(ApiResponse::success(id)))
}

fn entry_id(id: Result<Path<Uuid>, PathRejection>) -> Result<Uuid, ApiError> {
    id.map(|Path(id)| id).map_err(|rejection| {
        ApiError::validation(vec![FieldError {
            field: "id".to_string(),
            message: rejection.body_text(),
        }])
    })
}

fn entry_error(owner: Uuid, message: &str, e: JournalError) -> ApiError {
    match e {
        JournalError::EntryNotFound(_) => ApiError::new(StatusCode::NOT_FOUND, "Entry not found"),
        e => {
            error!("{} for {}: {}", message, owner, e);
            ApiError::internal(message)
        }
    }
}
