//! Health endpoint — liveness check.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::models::HealthResponse;

/// `GET /api/health` — reports liveness, the core version, and the bind address.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: quokka_core::version().into(),
        bind_addr: state.config.bind_addr,
    })
}
