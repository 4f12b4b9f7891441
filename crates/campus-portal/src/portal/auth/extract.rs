use std::sync::Arc;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use super::domain::Student;
use super::service::{AuthError, Authenticator};

/// Extractor resolving the `Authorization: Bearer` header to the student it
/// names. Handlers that take it are unreachable without a valid token.
pub struct CurrentStudent(pub Student);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentStudent
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let authenticator = parts
            .extensions
            .get::<Arc<dyn Authenticator>>()
            .cloned()
            .ok_or_else(|| {
                reject(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "authenticator not configured",
                )
            })?;

        let token = bearer_token(parts)
            .ok_or_else(|| reject(StatusCode::UNAUTHORIZED, "access token required"))?;

        match authenticator.authenticate(&token) {
            Ok(student) => Ok(CurrentStudent(student)),
            Err(AuthError::InvalidToken) => Err(reject(StatusCode::FORBIDDEN, "invalid token")),
            Err(AuthError::UnknownStudent) => {
                Err(reject(StatusCode::UNAUTHORIZED, "invalid token"))
            }
            Err(AuthError::Unavailable(detail)) => {
                Err(reject(StatusCode::INTERNAL_SERVER_ERROR, &detail))
            }
        }
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    let header = parts.headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?;
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

fn reject(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(json!({ "message": message }))).into_response()
}
