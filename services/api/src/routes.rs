use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use campus_portal::config::AuthConfig;
use campus_portal::portal::assignments::{assignments_router, AssignmentService};
use campus_portal::portal::attendance::{attendance_router, AttendanceService};
use campus_portal::portal::auth::{auth_router, AuthService, Authenticator};
use campus_portal::portal::courses::{courses_router, CourseService};
use campus_portal::portal::dashboard::{dashboard_router, DashboardService};
use campus_portal::portal::examination::{
    clearance_router, marks_router, ClearanceService, MarksService,
};
use serde_json::json;

use crate::infra::{AppState, PortalStores};

/// Build the full portal surface: every area router merged behind one shared
/// authenticator, plus the operational endpoints.
pub(crate) fn with_portal_routes(stores: &PortalStores, auth_config: AuthConfig) -> axum::Router {
    let auth_service = Arc::new(AuthService::new(stores.students.clone(), auth_config));
    let authenticator: Arc<dyn Authenticator> = auth_service.clone();

    let course_service = Arc::new(CourseService::new(
        stores.catalog.clone(),
        stores.enrollments.clone(),
    ));
    let attendance_service = Arc::new(AttendanceService::new(
        stores.catalog.clone(),
        stores.enrollments.clone(),
        stores.attendance.clone(),
    ));
    let assignment_service = Arc::new(AssignmentService::new(
        stores.assignments.clone(),
        stores.submissions.clone(),
        stores.catalog.clone(),
        stores.enrollments.clone(),
    ));
    let marks_service = Arc::new(MarksService::new(
        stores.marks.clone(),
        stores.catalog.clone(),
        stores.enrollments.clone(),
    ));
    let clearance_service = Arc::new(ClearanceService::new(stores.clearance.clone()));
    let dashboard_service = Arc::new(DashboardService::new(
        stores.announcements.clone(),
        stores.catalog.clone(),
        stores.enrollments.clone(),
        stores.assignments.clone(),
    ));

    auth_router(auth_service)
        .merge(courses_router(course_service))
        .merge(attendance_router(attendance_service))
        .merge(assignments_router(assignment_service))
        .merge(marks_router(marks_service))
        .merge(clearance_router(clearance_service))
        .merge(dashboard_router(dashboard_service))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .layer(Extension(authenticator))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use campus_portal::portal::auth::{Student, StudentDirectory, StudentId};
    use chrono::{NaiveDate, Utc};
    use tower::ServiceExt;

    fn test_auth_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "routes-test-secret".to_string(),
            token_ttl_hours: 1,
        }
    }

    fn seed_student(stores: &PortalStores) {
        let hash = bcrypt::hash("changeme", 4).expect("hash");
        stores
            .students
            .insert(Student {
                student_id: StudentId("S100".to_string()),
                password_hash: hash,
                name: "Asha Nair".to_string(),
                email: "asha.nair@campus.edu".to_string(),
                address: "12 College Road".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(2003, 4, 17).expect("valid date"),
                father_name: "Ravi Nair".to_string(),
                phone_number: "9000000001".to_string(),
                parent_phone_number: "9000000002".to_string(),
                degree: "B.Tech CSE".to_string(),
                profile_picture: "uploads/s100.png".to_string(),
                created_at: Utc::now(),
            })
            .expect("seed student");
    }

    async fn read_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 8192)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let stores = PortalStores::default();
        let router = with_portal_routes(&stores, test_auth_config());

        let response = router
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn login_then_no_due_walkthrough() {
        let stores = PortalStores::default();
        seed_student(&stores);
        let router = with_portal_routes(&stores, test_auth_config());

        let login = router
            .clone()
            .oneshot(
                Request::post("/api/auth/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({ "studentId": "S100", "password": "changeme" }).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(login.status(), StatusCode::OK);
        let payload = read_json(login).await;
        let token = payload["token"].as_str().expect("token issued").to_string();

        let response = router
            .oneshot(
                Request::get("/api/examination/no-due")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        let record = read_json(response).await;
        assert_eq!(record["status"], "pending");
        assert_eq!(record["departments"].as_array().map(Vec::len), Some(5));
    }

    #[tokio::test]
    async fn portal_routes_reject_missing_tokens() {
        let stores = PortalStores::default();
        let router = with_portal_routes(&stores, test_auth_config());

        let response = router
            .oneshot(
                Request::get("/api/courses/current")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
