use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use super::common::*;

fn authed(request: axum::http::request::Builder) -> axum::http::request::Builder {
    request.header(header::AUTHORIZATION, format!("Bearer {BEARER_TOKEN}"))
}

async fn send(router: axum::Router, request: Request<Body>) -> axum::response::Response {
    router.oneshot(request).await.expect("route executes")
}

#[tokio::test]
async fn fetch_requires_a_bearer_token() {
    let (service, _) = build_service();
    let router = clearance_router_with_auth(service);

    let response = send(
        router,
        Request::get("/api/examination/no-due")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn fetch_rejects_an_invalid_token() {
    let (service, _) = build_service();
    let router = clearance_router_with_auth(service);

    let response = send(
        router,
        Request::get("/api/examination/no-due")
            .header(header::AUTHORIZATION, "Bearer forged")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn fetch_initializes_the_record() {
    let (service, _) = build_service();
    let router = clearance_router_with_auth(service);

    let response = send(
        router,
        authed(Request::get("/api/examination/no-due"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["status"], "pending");
    let departments = payload["departments"].as_array().expect("roster array");
    assert_eq!(departments.len(), 5);
    assert!(departments
        .iter()
        .all(|entry| entry["status"] == "pending"));
    assert!(payload.get("approvalDate").is_none());
}

#[tokio::test]
async fn request_returns_message_and_record() {
    let (service, _) = build_service();
    let router = clearance_router_with_auth(service);

    let response = send(
        router,
        authed(Request::post("/api/examination/no-due/request"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["message"], "no-due clearance requested");
    assert_eq!(payload["noDue"]["status"], "pending");
}

#[tokio::test]
async fn approve_matches_departments_case_insensitively() {
    let (service, _) = build_service();
    let router = clearance_router_with_auth(service);

    send(
        router.clone(),
        authed(Request::get("/api/examination/no-due"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    let response = send(
        router,
        authed(Request::post("/api/examination/no-due/approve/library"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["message"], "department approved");
    let departments = payload["noDue"]["departments"]
        .as_array()
        .expect("roster array");
    let library = departments
        .iter()
        .find(|entry| entry["name"] == "Library")
        .expect("library entry");
    assert_eq!(library["status"], "approved");
    assert_eq!(payload["noDue"]["status"], "pending");
}

#[tokio::test]
async fn approve_unknown_department_is_not_found() {
    let (service, _) = build_service();
    let router = clearance_router_with_auth(service);

    send(
        router.clone(),
        authed(Request::get("/api/examination/no-due"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    let response = send(
        router,
        authed(Request::post("/api/examination/no-due/approve/Cafeteria"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn approve_without_a_record_is_not_found() {
    let (service, _) = build_service();
    let router = clearance_router_with_auth(service);

    let response = send(
        router,
        authed(Request::post("/api/examination/no-due/approve/Library"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn full_clearance_walkthrough_over_http() {
    let (service, _) = build_service();
    let router = clearance_router_with_auth(service);

    let response = send(
        router.clone(),
        authed(Request::get("/api/examination/no-due"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    let payload = read_json_body(response).await;
    assert_eq!(payload["status"], "pending");

    let mut last: Option<Value> = None;
    for department in ["library", "Hostel", "Laboratory", "Sports", "Finance"] {
        let response = send(
            router.clone(),
            authed(Request::post(format!(
                "/api/examination/no-due/approve/{department}"
            )))
            .body(Body::empty())
            .unwrap(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        last = Some(read_json_body(response).await);
    }

    let payload = last.expect("final approval payload");
    assert_eq!(payload["noDue"]["status"], "approved");
    assert!(payload["noDue"]["approvalDate"].is_string());

    let response = send(
        router,
        authed(Request::post("/api/examination/no-due/request"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    let payload = read_json_body(response).await;
    assert_eq!(payload["noDue"]["status"], "pending");
    let departments = payload["noDue"]["departments"]
        .as_array()
        .expect("roster array");
    assert!(departments
        .iter()
        .all(|entry| entry["status"] == "pending"));
    assert!(payload["noDue"].get("approvalDate").is_none());
}
