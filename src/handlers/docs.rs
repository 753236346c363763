use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::error::AppError;
use crate::startup::AppState;

/// Serves the OpenAPI document, re-read from disk on every request so a
/// redeployed file takes effect without a restart.
pub async fn api_docs(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let path = &state.config.assets.api_docs_path;

    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        tracing::error!("Failed to read API docs from {}: {}", path, e);
        AppError::ApiDocs(e.into())
    })?;

    let docs = serde_json::from_str(&raw).map_err(|e| {
        tracing::error!("Failed to parse API docs at {}: {}", path, e);
        AppError::ApiDocs(e.into())
    })?;

    Ok(Json(docs))
}
