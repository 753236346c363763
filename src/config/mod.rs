use secrecy::Secret;
use serde::Deserialize;
use std::env;

use crate::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub mongo: MongoConfig,
    pub assets: AssetConfig,
    /// Deployment environment name, reported verbatim by `GET /os`.
    pub environment: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub username: Option<String>,
    pub password: Option<Secret<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetConfig {
    /// Directory served for the landing page and any other static files.
    pub static_dir: String,
    /// Path of the OpenAPI document read back by `GET /api-docs`.
    pub api_docs_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let host = env::var("PLANET_SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PLANET_SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|e| AppError::Config(anyhow::anyhow!("invalid PLANET_SERVICE_PORT: {}", e)))?;

        // A missing URI is not a startup failure: the background connect task
        // logs the error and planet lookups answer 500 until it is fixed.
        let uri = env::var("MONGO_URI").unwrap_or_default();
        let username = env::var("MONGO_USERNAME").ok();
        let password = env::var("MONGO_PASSWORD").ok().map(Secret::new);

        let static_dir =
            env::var("PLANET_SERVICE_STATIC_DIR").unwrap_or_else(|_| "static".to_string());
        let api_docs_path =
            env::var("PLANET_SERVICE_API_DOCS").unwrap_or_else(|_| "oas.json".to_string());

        // The deployment manifests set NODE_ENV; /os reports it verbatim.
        let environment = env::var("NODE_ENV").ok();

        Ok(Self {
            server: ServerConfig { host, port },
            mongo: MongoConfig {
                uri,
                username,
                password,
            },
            assets: AssetConfig {
                static_dir,
                api_docs_path,
            },
            environment,
        })
    }
}
