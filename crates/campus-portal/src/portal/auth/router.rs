use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{ChangePasswordRequest, LoginRequest};
use super::extract::CurrentStudent;
use super::repository::StudentDirectory;
use super::service::{AuthService, AuthServiceError};

/// Router builder exposing the identity endpoints.
pub fn auth_router<D>(service: Arc<AuthService<D>>) -> Router
where
    D: StudentDirectory + 'static,
{
    Router::new()
        .route("/api/auth/login", post(login_handler::<D>))
        .route(
            "/api/auth/change-password",
            post(change_password_handler::<D>),
        )
        .route("/api/auth/me", get(me_handler))
        .with_state(service)
}

pub(crate) async fn login_handler<D>(
    State(service): State<Arc<AuthService<D>>>,
    axum::Json(request): axum::Json<LoginRequest>,
) -> Response
where
    D: StudentDirectory + 'static,
{
    match service.login(request) {
        Ok(response) => (StatusCode::OK, axum::Json(response)).into_response(),
        Err(AuthServiceError::InvalidCredentials) => {
            let payload = json!({ "message": "invalid credentials" });
            (StatusCode::UNAUTHORIZED, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "message": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn change_password_handler<D>(
    State(service): State<Arc<AuthService<D>>>,
    CurrentStudent(student): CurrentStudent,
    axum::Json(request): axum::Json<ChangePasswordRequest>,
) -> Response
where
    D: StudentDirectory + 'static,
{
    match service.change_password(&student, request) {
        Ok(()) => {
            let payload = json!({ "message": "password changed successfully" });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(
            err @ (AuthServiceError::CurrentPasswordIncorrect
            | AuthServiceError::PasswordMismatch
            | AuthServiceError::WeakPassword),
        ) => {
            let payload = json!({ "message": err.to_string() });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "message": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn me_handler(CurrentStudent(student): CurrentStudent) -> Response {
    (StatusCode::OK, axum::Json(student.profile())).into_response()
}
