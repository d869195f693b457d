//! API request and response types

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::models::MAX_CONTENT_CHARS;
use crate::models::MAX_TITLE_CHARS;

/// Standard API response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            errors: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            errors: Vec::new(),
        }
    }
}

/// A single rejected request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Error returned from handlers and middleware
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub errors: Vec<FieldError>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            errors: Vec::new(),
        }
    }

    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "Validation failed".to_string(),
            errors,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(self.message),
            errors: self.errors,
        };
        (self.status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Chat request
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

impl ChatRequest {
    /// Trimmed message, or the reasons it was rejected
    pub fn validate(&self, max_chars: usize) -> Result<&str, Vec<FieldError>> {
        let message = self.message.trim();
        let chars = message.chars().count();
        if chars == 0 || chars > max_chars {
            return Err(vec![FieldError {
                field: "message".to_string(),
                message: format!("Message must be between 1 and {max_chars} characters"),
            }]);
        }
        Ok(message)
    }
}

/// Entry creation request
#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl CreateEntryRequest {
    /// Trimmed title and content, or every field that is out of bounds
    pub fn validate(&self) -> Result<(&str, &str), Vec<FieldError>> {
        let title = self.title.trim();
        let content = self.content.trim();

        let errors: Vec<FieldError> = [
            ("title", title, MAX_TITLE_CHARS),
            ("content", content, MAX_CONTENT_CHARS),
        ]
        .into_iter()
        .filter(|(_, value, max)| value.is_empty() || value.chars().count() > *max)
        .map(|(field, _, max)| FieldError {
            field: field.to_string(),
            message: format!("{} must be between 1 and {max} characters", capitalize(field)),
        })
        .collect();

        if errors.is_empty() {
            Ok((title, content))
        } else {
            Err(errors)
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

/// Chat response
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

/// Prompt listing query parameters
#[derive(Debug, Default, Deserialize)]
pub struct PromptsQuery {
    #[serde(default)]
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_trims() {
        let req = ChatRequest {
            message: "  hello  ".to_string(),
        };
        assert_eq!(req.validate(1000).unwrap(), "hello");
    }

    #[test]
    fn test_chat_request_rejects_blank_and_long() {
        let blank = ChatRequest {
            message: " \n ".to_string(),
        };
        assert_eq!(blank.validate(1000).unwrap_err()[0].field, "message");

        let long = ChatRequest {
            message: "a".repeat(11),
        };
        assert!(long.validate(10).is_err());
    }

    #[test]
    fn test_create_entry_request_reports_each_bad_field() {
        let req = CreateEntryRequest {
            title: "   ".to_string(),
            content: "x".repeat(MAX_CONTENT_CHARS + 1),
        };
        let errors = req.validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["title", "content"]);
        assert_eq!(errors[0].message, "Title must be between 1 and 200 characters");

        let ok = CreateEntryRequest {
            title: " Morning ".to_string(),
            content: "Coffee".to_string(),
        };
        assert_eq!(ok.validate().unwrap(), ("Morning", "Coffee"));
    }

    #[test]
    fn test_error_body_omits_empty_field_errors() {
        let json = serde_json::to_value(ApiResponse::<()>::error("nope")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "nope");
        assert!(json.get("errors").is_none());
    }
}
