use axum::{Json, Router, extract::State, routing::get};
use core_config::AppInfo;
use serde::Serialize;
use std::time::Instant;
use utoipa::ToSchema;

/// Body of `GET /health`
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
    /// Seconds since the router was built
    pub uptime_secs: u64,
}

#[derive(Clone, Copy)]
struct HealthState {
    app: AppInfo,
    started: Instant,
}

async fn health(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        name: state.app.name,
        version: state.app.version,
        uptime_secs: state.started.elapsed().as_secs(),
    })
}

/// Router serving `/health` with the binary's name, version and uptime.
///
/// Merge it next to the output of [`create_router`](super::create_router) so
/// it stays outside the `/api` prefix:
///
/// ```ignore
/// let app = create_router::<ApiDoc>(api_routes).merge(health_router(app_info!()));
/// ```
pub fn health_router(app: AppInfo) -> Router {
    Router::new().route("/health", get(health)).with_state(HealthState {
        app,
        started: Instant::now(),
    })
}
