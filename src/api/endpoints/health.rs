//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::types::ApiContext;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub database_configured: bool,
    pub version: &'static str,
}

/// `GET /api/health`: liveness check. Does not touch the database.
pub async fn check(State(ctx): State<ApiContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        database_configured: ctx.core.is_configured(),
        version: crate::config::APP_VERSION,
    })
}
