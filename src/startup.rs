//! Application startup and lifecycle management.

use std::sync::Arc;

use axum::http::{header, Method, Request};
use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::AppError;
use crate::handlers;
use crate::middleware::{request_id_middleware, REQUEST_ID_HEADER};
use crate::services::{MongoPlanetStore, PlanetStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn PlanetStore>,
}

/// Application container for managing the server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Builds the application against MongoDB, connecting in the background
    /// so the listener is up before the database answers.
    pub async fn build(config: Config) -> Result<Self, AppError> {
        let store = MongoPlanetStore::connect_in_background(config.mongo.clone());
        Self::build_with_store(config, Arc::new(store)).await
    }

    /// Builds the application with an explicit store. Tests inject in-memory
    /// implementations here.
    pub async fn build_with_store(
        config: Config,
        store: Arc<dyn PlanetStore>,
    ) -> Result<Self, AppError> {
        let state = AppState {
            config: config.clone(),
            store,
        };

        let router = Router::new()
            .route("/planet", post(handlers::find_planet))
            .route("/api-docs", get(handlers::api_docs))
            .route("/os", get(handlers::os_info))
            .route("/live", get(handlers::liveness))
            .route("/ready", get(handlers::readiness))
            // Everything else, the landing page included, comes off disk.
            .fallback_service(ServeDir::new(&config.assets.static_dir))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("-");

                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                }),
            )
            .layer(from_fn(request_id_middleware))
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods([Method::GET, Method::POST])
                    .allow_headers([header::CONTENT_TYPE]),
            )
            .with_state(state);

        let address = format!("{}:{}", config.server.host, config.server.port);
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Server listening on port {}", port);

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// The port actually bound, which differs from the configured one when
    /// the configuration asked for port 0.
    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router).await
    }
}
