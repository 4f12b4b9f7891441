use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{CourseId, EnrollmentId, Slot};
use super::repository::{CourseCatalog, EnrollmentLedger};
use super::service::{CourseService, CourseServiceError};
use crate::portal::auth::CurrentStudent;

/// Router builder exposing catalog browsing and enrollment endpoints.
pub fn courses_router<C, E>(service: Arc<CourseService<C, E>>) -> Router
where
    C: CourseCatalog + 'static,
    E: EnrollmentLedger + 'static,
{
    Router::new()
        .route("/api/courses/current", get(current_handler::<C, E>))
        .route("/api/courses/completed", get(completed_handler::<C, E>))
        .route("/api/courses/feedback", post(feedback_handler::<C, E>))
        .route("/api/courses/enrollment/:slot", get(by_slot_handler::<C, E>))
        .route("/api/courses/enroll", post(enroll_handler::<C, E>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FeedbackRequest {
    pub(crate) enrollment_id: String,
    pub(crate) feedback: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EnrollRequest {
    pub(crate) course_id: String,
}

pub(crate) async fn current_handler<C, E>(
    State(service): State<Arc<CourseService<C, E>>>,
    CurrentStudent(student): CurrentStudent,
) -> Response
where
    C: CourseCatalog + 'static,
    E: EnrollmentLedger + 'static,
{
    match service.current_courses(&student.student_id) {
        Ok(views) => (StatusCode::OK, axum::Json(views)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn completed_handler<C, E>(
    State(service): State<Arc<CourseService<C, E>>>,
    CurrentStudent(student): CurrentStudent,
) -> Response
where
    C: CourseCatalog + 'static,
    E: EnrollmentLedger + 'static,
{
    match service.completed_courses(&student.student_id) {
        Ok(views) => (StatusCode::OK, axum::Json(views)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn feedback_handler<C, E>(
    State(service): State<Arc<CourseService<C, E>>>,
    CurrentStudent(student): CurrentStudent,
    axum::Json(request): axum::Json<FeedbackRequest>,
) -> Response
where
    C: CourseCatalog + 'static,
    E: EnrollmentLedger + 'static,
{
    let enrollment_id = EnrollmentId(request.enrollment_id);
    match service.submit_feedback(&student.student_id, &enrollment_id, &request.feedback) {
        Ok(()) => {
            let payload = json!({ "message": "feedback submitted successfully" });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn by_slot_handler<C, E>(
    State(service): State<Arc<CourseService<C, E>>>,
    CurrentStudent(student): CurrentStudent,
    Path(slot): Path<String>,
) -> Response
where
    C: CourseCatalog + 'static,
    E: EnrollmentLedger + 'static,
{
    let Some(slot) = Slot::from_path(&slot) else {
        let payload = json!({ "message": "slot not found" });
        return (StatusCode::NOT_FOUND, axum::Json(payload)).into_response();
    };

    match service.available_for_slot(&student.student_id, slot) {
        Ok(courses) => (StatusCode::OK, axum::Json(courses)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn enroll_handler<C, E>(
    State(service): State<Arc<CourseService<C, E>>>,
    CurrentStudent(student): CurrentStudent,
    axum::Json(request): axum::Json<EnrollRequest>,
) -> Response
where
    C: CourseCatalog + 'static,
    E: EnrollmentLedger + 'static,
{
    let course_id = CourseId(request.course_id);
    match service.enroll(&student.student_id, &course_id) {
        Ok(_) => {
            let payload = json!({ "message": "successfully enrolled in course" });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

fn error_response(err: CourseServiceError) -> Response {
    let status = match &err {
        CourseServiceError::EnrollmentNotFound | CourseServiceError::CourseNotFound => {
            StatusCode::NOT_FOUND
        }
        CourseServiceError::AlreadyEnrolled | CourseServiceError::EmptyFeedback => {
            StatusCode::BAD_REQUEST
        }
        CourseServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "message": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
