use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// Liveness probe for Docker/K8s: the process is up and serving.
pub async fn liveness() -> impl IntoResponse {
    Json(json!({ "status": "live" }))
}

/// Readiness probe. Always reports ready: database connectivity degrades
/// planet lookups but never takes the service out of rotation, since the
/// static page, docs, and system info keep working without it.
pub async fn readiness() -> impl IntoResponse {
    Json(json!({ "status": "ready" }))
}
