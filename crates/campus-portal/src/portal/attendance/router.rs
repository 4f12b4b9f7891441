use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::repository::AttendanceLog;
use super::service::{AttendanceError, AttendanceService};
use crate::portal::auth::CurrentStudent;
use crate::portal::courses::{CourseCatalog, CourseId, EnrollmentLedger};

/// Router builder exposing the attendance endpoints.
pub fn attendance_router<C, E, L>(service: Arc<AttendanceService<C, E, L>>) -> Router
where
    C: CourseCatalog + 'static,
    E: EnrollmentLedger + 'static,
    L: AttendanceLog + 'static,
{
    Router::new()
        .route("/api/attendance", get(overview_handler::<C, E, L>))
        .route(
            "/api/attendance/:course_id",
            get(course_handler::<C, E, L>),
        )
        .with_state(service)
}

pub(crate) async fn overview_handler<C, E, L>(
    State(service): State<Arc<AttendanceService<C, E, L>>>,
    CurrentStudent(student): CurrentStudent,
) -> Response
where
    C: CourseCatalog + 'static,
    E: EnrollmentLedger + 'static,
    L: AttendanceLog + 'static,
{
    match service.overview(&student.student_id) {
        Ok(views) => (StatusCode::OK, axum::Json(views)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn course_handler<C, E, L>(
    State(service): State<Arc<AttendanceService<C, E, L>>>,
    CurrentStudent(student): CurrentStudent,
    Path(course_id): Path<String>,
) -> Response
where
    C: CourseCatalog + 'static,
    E: EnrollmentLedger + 'static,
    L: AttendanceLog + 'static,
{
    let course_id = CourseId(course_id);
    match service.for_course(&student.student_id, &course_id) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: AttendanceError) -> Response {
    let status = match &err {
        AttendanceError::CourseNotFound => StatusCode::NOT_FOUND,
        AttendanceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "message": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
