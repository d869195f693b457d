//! Bearer token authentication middleware

use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use tracing::error;
use tracing::warn;
use uuid::Uuid;

use super::handlers::AppState;
use super::types::ApiError;

pub const NO_TOKEN_MESSAGE: &str = "Access denied. No token provided.";
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid token. Please log in again.";

/// Owner resolved from the request's bearer token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedOwner(pub Uuid);

/// Extract the token from an `Authorization: Bearer <token>` header value
pub fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Resolve the bearer token and attach [`AuthenticatedOwner`] to the request
pub async fn require_bearer(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(bearer_token)
        .ok_or_else(|| ApiError::unauthorized(NO_TOKEN_MESSAGE))?;

    let owner = match state.authenticator.authenticate(token).await {
        Ok(Some(owner)) => owner,
        Ok(None) => {
            warn!("Rejected unknown bearer token on {}", request.uri().path());
            return Err(ApiError::unauthorized(INVALID_TOKEN_MESSAGE));
        }
        Err(e) => {
            error!("Token verification error: {}", e);
            return Err(ApiError::unauthorized(INVALID_TOKEN_MESSAGE));
        }
    };

    request.extensions_mut().insert(AuthenticatedOwner(owner));
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token("Bearer abc123"), Some("abc123"));
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Basic abc123"), None);
        assert_eq!(bearer_token("abc123"), None);
    }
}
