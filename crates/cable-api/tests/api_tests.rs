//! HTTP tests against the router, without binding a socket

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use cable_api::{create_app, AppState};
use cable_tables::ReferenceTables;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let state = AppState::new(ReferenceTables::standard().clone()).unwrap();
    create_app(Arc::new(state))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_root_probe() {
    let (status, body) = send(app(), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Cable Expert API is running");
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(app(), get("/api/v1/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_sizing_reference_scenario() {
    let request = post_json(
        "/api/v1/calculate/sizing",
        json!({
            "power": 5,
            "power_unit": "kw",
            "voltage_type": "220v",
            "distance": 50,
            "material": "cu",
            "cable_type": "yjv",
            "temperature": 40,
            "max_voltage_drop": 5
        }),
    );
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recommended_size"], "4.0");
    assert_eq!(body["current_amps"], 22.7);
    assert_eq!(body["safe_ampacity"], 34.6);
    assert_eq!(body["mcb_rating"], "25A");
    assert_eq!(body["voltage_drop_percent"], 4.5);
    assert_eq!(body["governed_by"], "voltage_drop");
    assert!(body["selection_reason"].as_str().unwrap().contains("voltage drop"));
}

#[tokio::test]
async fn test_sizing_defaults_applied() {
    let request = post_json(
        "/api/v1/calculate/sizing",
        json!({ "power": 5, "power_unit": "kw", "voltage_type": "220v", "distance": 50 }),
    );
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recommended_size"], "4.0");
}

#[tokio::test]
async fn test_unknown_power_unit_is_validation() {
    let request = post_json(
        "/api/v1/calculate/sizing",
        json!({ "power": 5, "power_unit": "watts", "voltage_type": "220v", "distance": 50 }),
    );
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["kind"], "validation");
}

#[tokio::test]
async fn test_negative_power_names_field() {
    let request = post_json(
        "/api/v1/calculate/sizing",
        json!({ "power": -1, "power_unit": "kw", "voltage_type": "220v", "distance": 50 }),
    );
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "power");
}

#[tokio::test]
async fn test_malformed_json_is_validation() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/calculate/sizing")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"power\": "))
        .unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["kind"], "validation");
}

#[tokio::test]
async fn test_extreme_load_is_no_conforming_size() {
    let request = post_json(
        "/api/v1/calculate/sizing",
        json!({ "power": 500, "power_unit": "amps", "voltage_type": "380v", "distance": 10 }),
    );
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["kind"], "no_conforming_size");
}

#[tokio::test]
async fn test_check_fake_client_payload() {
    let request = post_json(
        "/api/v1/check/fake",
        json!({ "nominal_size": "2.5", "measured_weight": 2.5, "cable_type": "bv" }),
    );
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["risk_level"], "danger");
    assert_eq!(body["standard_weight"], 3.1);
    assert_eq!(body["is_pass"], false);
}

#[tokio::test]
async fn test_check_fake_unknown_size_is_lookup() {
    let request = post_json(
        "/api/v1/check/fake",
        json!({ "nominal_size": "25", "measured_weight": 20.0 }),
    );
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["kind"], "lookup");
}

#[tokio::test]
async fn test_reference_sizes() {
    let (status, body) = send(app(), get("/api/v1/reference/sizes")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["weighed_sizes"], json!(["1.5", "2.5", "4.0", "6.0", "10", "16"]));
    assert_eq!(body["breakers"][0], "6A");
    assert_eq!(body["sizes"].as_array().unwrap().len(), 11);
}

#[tokio::test]
async fn test_request_id_header() {
    let response = app().oneshot(get("/api/v1/health")).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));

    let request = Request::builder()
        .uri("/api/v1/health")
        .header("x-request-id", "field-tablet-7")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "field-tablet-7");
}

#[tokio::test]
async fn test_metrics_count_outcomes() {
    let app = app();
    let ok = post_json(
        "/api/v1/calculate/sizing",
        json!({ "power": 5, "power_unit": "kw", "voltage_type": "220v", "distance": 50 }),
    );
    let missing = post_json(
        "/api/v1/check/fake",
        json!({ "nominal_size": "25", "measured_weight": 20.0 }),
    );
    app.clone().oneshot(ok).await.unwrap();
    app.clone().oneshot(missing).await.unwrap();

    let response = app.oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains(r#"cable_requests_total{endpoint="sizing",outcome="ok"} 1"#));
    assert!(text.contains(r#"cable_requests_total{endpoint="check_fake",outcome="lookup"} 1"#));
}
