use std::{fs, path::PathBuf};

use api::{endpoints, AdminData, SubmissionRecord};
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use server::{api_router, router, state::AppState};
use tower::ServiceExt;

const BODY_LIMIT: usize = 1024 * 1024;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();
    (status, headers, body.to_vec())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn full_submission() -> Value {
    json!({
        "age": 31,
        "gender": "Female",
        "education": "Master",
        "occupation": "Designer",
        "income": "50k-75k",
        "country": "Czechia",
        "aiKnowledge": "Basic",
        "awareness1": 5,
        "awareness2": "3",
        "prague_wtp1": 4,
        "newyork_wtp1": 2,
        "pragueAiPrice": 12.5,
        "pragueHumanPrice": "18",
        "newYorkAiPrice": 10,
        "newYorkHumanPrice": 20
    })
}

#[tokio::test]
async fn submission_shows_up_in_dashboard_and_detail() {
    let app = api_router(AppState::in_memory());

    let (status, _, body) = send(&app, post_json(endpoints::SUBMIT_SURVEY, &full_submission())).await;
    assert_eq!(status, StatusCode::OK);
    let ack: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(ack, json!({ "success": true }));

    let (status, _, body) = send(&app, get(endpoints::ADMIN_DATA)).await;
    assert_eq!(status, StatusCode::OK);
    let data: AdminData = serde_json::from_slice(&body).unwrap();
    assert_eq!(data.submissions.len(), 1);
    let summary = &data.submissions[0];
    assert_eq!(summary.age, Some(31));
    assert_eq!(summary.gender.as_deref(), Some("Female"));
    assert_eq!(data.aggregates["awareness"][0], 5.0);
    assert_eq!(data.aggregates["awareness"][1], 3.0);
    assert_eq!(data.aggregates["prague_wtp"][0], 4.0);

    let (status, _, body) = send(&app, get(&endpoints::admin_response(summary.id))).await;
    assert_eq!(status, StatusCode::OK);
    let record: SubmissionRecord = serde_json::from_slice(&body).unwrap();
    assert_eq!(record.id(), Some(summary.id));
    assert_eq!(record.get("ai_knowledge"), Some(&json!("Basic")));
    assert_eq!(record.number("prague_human_price"), Some(18.0));
    assert_eq!(record.get("awareness3"), None);
}

#[tokio::test]
async fn unknown_response_is_not_found() {
    let app = api_router(AppState::in_memory());

    for uri in [endpoints::admin_response(999), "/api/admin/response/abc".to_string()] {
        let (status, _, body) = send(&app, get(&uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        let error: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error, json!({ "error": "Not found" }));
    }
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let app = api_router(AppState::in_memory());

    let request = Request::builder()
        .method("POST")
        .uri(endpoints::SUBMIT_SURVEY)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, _, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert!(error["error"].as_str().unwrap().starts_with("Malformed payload"));

    let (status, _, _) = send(&app, post_json(endpoints::SUBMIT_SURVEY, &json!([1, 2]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, _, body) = send(&app, get(endpoints::ADMIN_DATA)).await;
    let data: AdminData = serde_json::from_slice(&body).unwrap();
    assert!(data.submissions.is_empty());
}

#[tokio::test]
async fn empty_export_says_no_data() {
    let app = api_router(AppState::in_memory());

    let (status, headers, body) = send(&app, get(endpoints::ADMIN_EXPORT)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "text/csv; charset=utf-8");
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=survey_export.csv"
    );
    assert!(String::from_utf8(body).unwrap().starts_with("No data"));
}

#[tokio::test]
async fn export_has_one_line_per_submission() {
    let app = api_router(AppState::in_memory());
    for _ in 0..2 {
        send(&app, post_json(endpoints::SUBMIT_SURVEY, &full_submission())).await;
    }

    let (_, _, body) = send(&app, get(endpoints::ADMIN_EXPORT)).await;
    let csv = String::from_utf8(body).unwrap();
    let lines: Vec<&str> = csv.split("\r\n").filter(|line| !line.is_empty()).collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("id,created_at,"));
    assert!(lines[0].contains("ai_knowledge"));
}

#[tokio::test]
async fn cross_origin_callers_are_allowed() {
    let app = api_router(AppState::in_memory());

    let request = Request::builder()
        .uri(endpoints::ADMIN_DATA)
        .header(header::ORIGIN, "http://localhost:8080")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

    let preflight = Request::builder()
        .method("OPTIONS")
        .uri(endpoints::SUBMIT_SURVEY)
        .header(header::ORIGIN, "http://localhost:8080")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send(&app, preflight).await;
    assert!(status.is_success());
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(headers[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap()
        .contains("POST"));
}

fn site_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("mugsurvey-{name}-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("index.html"), "<html>mugsurvey</html>").unwrap();
    fs::write(dir.join("app.js"), "console.log(1)").unwrap();
    dir
}

#[tokio::test]
async fn client_routes_fall_back_to_index() {
    let dir = site_dir("spa");
    let app = router(AppState::in_memory(), &dir);

    let (status, _, body) = send(&app, get("/admin")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<html>mugsurvey</html>");

    let (_, _, body) = send(&app, get("/app.js")).await;
    assert_eq!(body, b"console.log(1)");

    let (status, _, _) = send(&app, get(endpoints::ADMIN_DATA)).await;
    assert_eq!(status, StatusCode::OK);

    let _ = fs::remove_dir_all(dir);
}
