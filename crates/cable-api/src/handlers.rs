//! API Handlers
use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use cable_antifake::AntiFakeEngine;
use cable_core::{
    AntiFakeRequest, AntiFakeResult, BreakerRating, CableSize, CableType, Material, SizingRequest,
    SizingResult,
};
use cable_sizing::SizingEngine;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Serialize)]
pub struct ReferenceSizesResponse {
    /// Every size in any conductor table
    pub sizes: Vec<CableSize>,
    /// Sizes the weight check accepts
    pub weighed_sizes: Vec<CableSize>,
    pub breakers: Vec<BreakerRating>,
}

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Cable Expert API is running" }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn calculate_sizing(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SizingRequest>, JsonRejection>,
) -> Result<Json<SizingResult>, ApiError> {
    let started = Instant::now();
    let result = payload.map_err(ApiError::from).and_then(|Json(request)| {
        SizingEngine::new(&state.tables)
            .size(&request)
            .map_err(ApiError::from)
    });
    record(&state, "sizing", started, &result);
    result.map(Json)
}

pub async fn check_fake(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AntiFakeRequest>, JsonRejection>,
) -> Result<Json<AntiFakeResult>, ApiError> {
    let started = Instant::now();
    let result = payload.map_err(ApiError::from).and_then(|Json(request)| {
        AntiFakeEngine::new(&state.tables)
            .check(&request)
            .map_err(ApiError::from)
    });
    record(&state, "check_fake", started, &result);
    result.map(Json)
}

pub async fn reference_sizes(State(state): State<Arc<AppState>>) -> Json<ReferenceSizesResponse> {
    let tables = &state.tables;
    Json(ReferenceSizesResponse {
        sizes: tables.published_sizes(),
        weighed_sizes: tables.weighed_sizes(Material::Cu, CableType::Bv),
        breakers: tables
            .breaker_ladder()
            .iter()
            .copied()
            .map(BreakerRating)
            .collect(),
    })
}

pub async fn metrics(State(state): State<Arc<AppState>>) -> Response {
    match state.metrics.encode() {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to encode metrics");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn record<T>(state: &AppState, endpoint: &str, started: Instant, result: &Result<T, ApiError>) {
    let outcome = match result {
        Ok(_) => "ok",
        Err(e) => e.kind().as_str(),
    };
    state
        .metrics
        .observe(endpoint, outcome, started.elapsed().as_secs_f64());
}
