use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::{ClientOptions, Credential};
use mongodb::{Client, Database};
use secrecy::ExposeSecret;
use tokio::sync::RwLock;

use crate::config::MongoConfig;
use crate::error::AppError;
use crate::models::Planet;

const PLANETS_COLLECTION: &str = "planets";

/// Read access to the planet collection.
#[async_trait]
pub trait PlanetStore: Send + Sync {
    /// Looks up the planet whose `id` matches. A `None` id becomes a null
    /// filter, which matches nothing in a properly seeded collection.
    async fn find_by_id(&self, id: Option<i64>) -> Result<Option<Planet>, AppError>;
}

/// Where the background connection attempt currently stands. Lookups only
/// succeed in the `Connected` state; the other two answer with an error.
enum ConnectionState {
    Connecting,
    Connected(Database),
    Failed,
}

#[derive(Clone)]
pub struct MongoPlanetStore {
    state: Arc<RwLock<ConnectionState>>,
}

impl MongoPlanetStore {
    /// Kicks off the connection attempt without blocking startup. The HTTP
    /// listener comes up immediately; until the attempt resolves, planet
    /// lookups report the database as unavailable.
    pub fn connect_in_background(config: MongoConfig) -> Self {
        let store = Self {
            state: Arc::new(RwLock::new(ConnectionState::Connecting)),
        };

        let task = store.clone();
        tokio::spawn(async move {
            match Self::establish(&config).await {
                Ok(db) => {
                    tracing::info!(database = %db.name(), "MongoDB connection successful");
                    *task.state.write().await = ConnectionState::Connected(db);
                }
                Err(e) => {
                    tracing::error!("MongoDB connection error: {}", e);
                    *task.state.write().await = ConnectionState::Failed;
                }
            }
        });

        store
    }

    async fn establish(config: &MongoConfig) -> Result<Database, mongodb::error::Error> {
        let mut options = ClientOptions::parse(&config.uri).await?;
        options.app_name = Some("planet-service".to_string());

        if let Some(username) = &config.username {
            let mut credential = Credential::builder().username(username.clone()).build();
            credential.password = config
                .password
                .as_ref()
                .map(|password| password.expose_secret().clone());
            options.credential = Some(credential);
        }

        let client = Client::with_options(options)?;

        // `with_options` does no I/O; the ping forces a round trip so the
        // outcome is known and logged now rather than on the first lookup.
        client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;

        Ok(client
            .default_database()
            .unwrap_or_else(|| client.database("test")))
    }
}

#[async_trait]
impl PlanetStore for MongoPlanetStore {
    async fn find_by_id(&self, id: Option<i64>) -> Result<Option<Planet>, AppError> {
        let db = match &*self.state.read().await {
            ConnectionState::Connected(db) => db.clone(),
            ConnectionState::Connecting => {
                tracing::error!("Planet lookup before the MongoDB connection was established");
                return Err(AppError::PlanetData(anyhow::anyhow!(
                    "MongoDB connection not established yet"
                )));
            }
            ConnectionState::Failed => {
                tracing::error!("Planet lookup against a failed MongoDB connection");
                return Err(AppError::PlanetData(anyhow::anyhow!(
                    "MongoDB connection failed"
                )));
            }
        };

        db.collection::<Planet>(PLANETS_COLLECTION)
            .find_one(lookup_filter(id), None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to query planet {:?}: {}", id, e);
                AppError::PlanetData(anyhow::anyhow!(e.to_string()))
            })
    }
}

fn lookup_filter(id: Option<i64>) -> Document {
    match id {
        Some(id) => doc! { "id": id },
        None => doc! { "id": Bson::Null },
    }
}
