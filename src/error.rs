use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("planet not found")]
    PlanetNotFound,

    #[error("planet data error: {0}")]
    PlanetData(anyhow::Error),

    #[error("api docs error: {0}")]
    ApiDocs(anyhow::Error),

    #[error("configuration error: {0}")]
    Config(anyhow::Error),

    #[error("internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Response bodies are fixed strings; error detail is logged at the
        // failure site and never leaves the process.
        let (status, body) = match self {
            AppError::PlanetNotFound => (StatusCode::NOT_FOUND, "Planet not found"),
            AppError::PlanetData(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Error in Planet Data"),
            AppError::ApiDocs(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Error reading file"),
            AppError::Config(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, body).into_response()
    }
}
