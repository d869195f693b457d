//! API request handlers

use std::sync::Arc;

use axum::Json;

use crate::api::types::ApiResponse;
use crate::api::types::HealthResponse;
use crate::assistant::JournalAssistant;
use crate::database::Authenticator;

pub mod chat;
pub mod entries;
pub mod journal;

pub use chat::*;
pub use entries::*;
pub use journal::*;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<JournalAssistant>,
    pub authenticator: Arc<dyn Authenticator>,
}

impl AppState {
    pub fn new(assistant: JournalAssistant, authenticator: Arc<dyn Authenticator>) -> Self {
        Self {
            assistant: Arc::new(assistant),
            authenticator,
        }
    }
}

/// Health check handler
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
