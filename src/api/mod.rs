//! HTTP API handlers

use axum::Json;
use serde::Serialize;

/// General status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
}

/// GET /api/status - service health check
pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "euqsarosa-site",
        version: env!("SITE_VERSION"),
        git_sha: env!("SITE_GIT_SHA"),
    })
}
