use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::repository::ClearanceStore;
use super::service::{ClearanceError, ClearanceService};
use crate::portal::auth::CurrentStudent;

/// Router builder exposing the no-due clearance endpoints.
pub fn clearance_router<S>(service: Arc<ClearanceService<S>>) -> Router
where
    S: ClearanceStore + 'static,
{
    Router::new()
        .route("/api/examination/no-due", get(fetch_handler::<S>))
        .route(
            "/api/examination/no-due/request",
            post(request_handler::<S>),
        )
        .route(
            "/api/examination/no-due/approve/:department",
            post(approve_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn fetch_handler<S>(
    State(service): State<Arc<ClearanceService<S>>>,
    CurrentStudent(student): CurrentStudent,
) -> Response
where
    S: ClearanceStore + 'static,
{
    match service.fetch_or_initialize(&student.student_id) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn request_handler<S>(
    State(service): State<Arc<ClearanceService<S>>>,
    CurrentStudent(student): CurrentStudent,
) -> Response
where
    S: ClearanceStore + 'static,
{
    match service.request(&student.student_id) {
        Ok(record) => {
            let payload = json!({
                "message": "no-due clearance requested",
                "noDue": record,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn approve_handler<S>(
    State(service): State<Arc<ClearanceService<S>>>,
    CurrentStudent(student): CurrentStudent,
    Path(department): Path<String>,
) -> Response
where
    S: ClearanceStore + 'static,
{
    match service.approve_department(&student.student_id, &department) {
        Ok(record) => {
            let payload = json!({
                "message": "department approved",
                "noDue": record,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

fn error_response(err: ClearanceError) -> Response {
    let status = match &err {
        ClearanceError::RecordNotFound | ClearanceError::DepartmentNotFound => {
            StatusCode::NOT_FOUND
        }
        ClearanceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "message": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
