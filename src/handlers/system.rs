use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::startup::AppState;

/// Reports the hostname serving this request, which under Kubernetes is the
/// pod name. The `env` field only appears when an environment is configured.
pub async fn os_info(State(state): State<AppState>) -> Json<Value> {
    let hostname = gethostname::gethostname().to_string_lossy().into_owned();

    match &state.config.environment {
        Some(environment) => Json(json!({ "os": hostname, "env": environment })),
        None => Json(json!({ "os": hostname })),
    }
}
