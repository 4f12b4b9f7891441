use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::SubmissionRequest;
use super::repository::{AssignmentBoard, SubmissionStore};
use super::service::{AssignmentError, AssignmentService};
use crate::portal::auth::CurrentStudent;
use crate::portal::courses::{CourseCatalog, CourseId, EnrollmentLedger};

/// Router builder exposing assignment listing and submission endpoints.
pub fn assignments_router<B, S, C, E>(service: Arc<AssignmentService<B, S, C, E>>) -> Router
where
    B: AssignmentBoard + 'static,
    S: SubmissionStore + 'static,
    C: CourseCatalog + 'static,
    E: EnrollmentLedger + 'static,
{
    Router::new()
        .route(
            "/api/assignments/courses/enrolled",
            get(enrolled_courses_handler::<B, S, C, E>),
        )
        .route(
            "/api/assignments/submit",
            post(submit_handler::<B, S, C, E>),
        )
        .route(
            "/api/assignments/:course_id",
            get(list_handler::<B, S, C, E>),
        )
        .with_state(service)
}

pub(crate) async fn list_handler<B, S, C, E>(
    State(service): State<Arc<AssignmentService<B, S, C, E>>>,
    CurrentStudent(student): CurrentStudent,
    Path(course_id): Path<String>,
) -> Response
where
    B: AssignmentBoard + 'static,
    S: SubmissionStore + 'static,
    C: CourseCatalog + 'static,
    E: EnrollmentLedger + 'static,
{
    let course_id = CourseId(course_id);
    match service.list_for_course(&student.student_id, &course_id) {
        Ok(views) => (StatusCode::OK, axum::Json(views)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn submit_handler<B, S, C, E>(
    State(service): State<Arc<AssignmentService<B, S, C, E>>>,
    CurrentStudent(student): CurrentStudent,
    axum::Json(request): axum::Json<SubmissionRequest>,
) -> Response
where
    B: AssignmentBoard + 'static,
    S: SubmissionStore + 'static,
    C: CourseCatalog + 'static,
    E: EnrollmentLedger + 'static,
{
    match service.submit(&student.student_id, request) {
        Ok(_) => {
            let payload = json!({ "message": "assignment submitted successfully" });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn enrolled_courses_handler<B, S, C, E>(
    State(service): State<Arc<AssignmentService<B, S, C, E>>>,
    CurrentStudent(student): CurrentStudent,
) -> Response
where
    B: AssignmentBoard + 'static,
    S: SubmissionStore + 'static,
    C: CourseCatalog + 'static,
    E: EnrollmentLedger + 'static,
{
    match service.enrolled_courses(&student.student_id) {
        Ok(courses) => (StatusCode::OK, axum::Json(courses)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: AssignmentError) -> Response {
    let status = match &err {
        AssignmentError::NotEnrolled => StatusCode::FORBIDDEN,
        AssignmentError::AssignmentNotFound => StatusCode::NOT_FOUND,
        AssignmentError::DeadlinePassed | AssignmentError::MissingFile => StatusCode::BAD_REQUEST,
        AssignmentError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "message": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
