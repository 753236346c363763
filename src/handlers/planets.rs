use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::error::AppError;
use crate::models::Planet;
use crate::startup::AppState;

#[derive(Debug, Deserialize)]
pub struct PlanetLookupRequest {
    // Optional so that a body without an id reaches the store as a null
    // filter and comes back as a miss, not as a rejected request.
    pub id: Option<i64>,
}

#[tracing::instrument(skip(state))]
pub async fn find_planet(
    State(state): State<AppState>,
    Json(request): Json<PlanetLookupRequest>,
) -> Result<Json<Planet>, AppError> {
    match state.store.find_by_id(request.id).await? {
        Some(planet) => Ok(Json(planet)),
        None => Err(AppError::PlanetNotFound),
    }
}
