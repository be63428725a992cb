use axum::Json;
use serde::Serialize;

use crate::config;

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// `GET /` — welcome payload.
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        status: "success",
        message: "Welcome to the vocadia dialog & vocabulary API",
    })
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// `GET /health` — liveness check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: config::APP_VERSION,
    })
}
