use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::repository::AnnouncementBoard;
use super::service::{DashboardError, DashboardService};
use crate::portal::assignments::AssignmentBoard;
use crate::portal::auth::CurrentStudent;
use crate::portal::courses::{CourseCatalog, EnrollmentLedger};

/// Router builder exposing the dashboard endpoints.
pub fn dashboard_router<A, C, E, B>(service: Arc<DashboardService<A, C, E, B>>) -> Router
where
    A: AnnouncementBoard + 'static,
    C: CourseCatalog + 'static,
    E: EnrollmentLedger + 'static,
    B: AssignmentBoard + 'static,
{
    Router::new()
        .route("/api/dashboard", get(overview_handler::<A, C, E, B>))
        .route(
            "/api/dashboard/announcements",
            get(announcements_handler::<A, C, E, B>),
        )
        .with_state(service)
}

pub(crate) async fn overview_handler<A, C, E, B>(
    State(service): State<Arc<DashboardService<A, C, E, B>>>,
    CurrentStudent(student): CurrentStudent,
) -> Response
where
    A: AnnouncementBoard + 'static,
    C: CourseCatalog + 'static,
    E: EnrollmentLedger + 'static,
    B: AssignmentBoard + 'static,
{
    match service.overview(&student.student_id) {
        Ok(overview) => (StatusCode::OK, axum::Json(overview)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn announcements_handler<A, C, E, B>(
    State(service): State<Arc<DashboardService<A, C, E, B>>>,
    CurrentStudent(_student): CurrentStudent,
) -> Response
where
    A: AnnouncementBoard + 'static,
    C: CourseCatalog + 'static,
    E: EnrollmentLedger + 'static,
    B: AssignmentBoard + 'static,
{
    match service.announcements() {
        Ok(announcements) => (StatusCode::OK, axum::Json(announcements)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: DashboardError) -> Response {
    let status = match &err {
        DashboardError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "message": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
