//! Liveness and status routes.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::context::AppContext;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub catalog: &'static str,
    /// Whether a catalog credential is configured. Catalog routes return 500
    /// while this is false.
    pub configured: bool,
}

/// GET /health
pub async fn health_check() -> &'static str {
    "ok"
}

/// GET /api/health
pub async fn status(State(ctx): State<AppContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        catalog: ctx.catalog.name(),
        configured: ctx.catalog.is_configured(),
    })
}
