#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use planet_service::config::{AssetConfig, Config, MongoConfig, ServerConfig};
use planet_service::error::AppError;
use planet_service::models::Planet;
use planet_service::services::PlanetStore;
use planet_service::startup::Application;

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Spawns the application with the full solar system seeded in memory.
    pub async fn spawn() -> Self {
        Self::spawn_with_store(Arc::new(InMemoryPlanetStore::new(solar_system()))).await
    }

    pub async fn spawn_with_store(store: Arc<dyn PlanetStore>) -> Self {
        Self::spawn_with(test_config(), store).await
    }

    pub async fn spawn_with(config: Config, store: Arc<dyn PlanetStore>) -> Self {
        let app = Application::build_with_store(config, store)
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the listener before handing the app to the test.
        let client = reqwest::Client::new();
        let live_url = format!("{}/live", address);
        for _ in 0..50 {
            if client.get(&live_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp { address }
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        mongo: MongoConfig {
            uri: String::new(),
            username: None,
            password: None,
        },
        assets: AssetConfig {
            static_dir: "static".to_string(),
            api_docs_path: "oas.json".to_string(),
        },
        environment: Some("test".to_string()),
    }
}

/// Store backed by a fixed in-memory collection.
pub struct InMemoryPlanetStore {
    planets: Vec<Planet>,
}

impl InMemoryPlanetStore {
    pub fn new(planets: Vec<Planet>) -> Self {
        Self { planets }
    }
}

#[async_trait]
impl PlanetStore for InMemoryPlanetStore {
    async fn find_by_id(&self, id: Option<i64>) -> Result<Option<Planet>, AppError> {
        Ok(id.and_then(|id| self.planets.iter().find(|p| p.id == id).cloned()))
    }
}

/// Store that fails every lookup, the way a disconnected one does.
pub struct UnavailablePlanetStore;

#[async_trait]
impl PlanetStore for UnavailablePlanetStore {
    async fn find_by_id(&self, _id: Option<i64>) -> Result<Option<Planet>, AppError> {
        Err(AppError::PlanetData(anyhow::anyhow!("store offline")))
    }
}

pub fn solar_system() -> Vec<Planet> {
    vec![
        planet(
            1,
            "Mercury",
            "The smallest planet and nearest to the sun, with a cratered surface.",
            "https://assets.solar.example/mercury.png",
            "47.4 km/s",
            "57.9M km",
        ),
        planet(
            2,
            "Venus",
            "Spins slowly backwards beneath a crushing carbon dioxide atmosphere.",
            "https://assets.solar.example/venus.png",
            "35.0 km/s",
            "108.2M km",
        ),
        planet(
            3,
            "Earth",
            "The only known world to harbour life, two thirds covered by ocean.",
            "https://assets.solar.example/earth.png",
            "29.8 km/s",
            "149.6M km",
        ),
        planet(
            4,
            "Mars",
            "A cold desert world with the largest volcano in the solar system.",
            "https://assets.solar.example/mars.png",
            "24.1 km/s",
            "227.9M km",
        ),
        planet(
            5,
            "Jupiter",
            "More than twice the mass of all the other planets combined.",
            "https://assets.solar.example/jupiter.png",
            "13.1 km/s",
            "778.6M km",
        ),
        planet(
            6,
            "Saturn",
            "Ringed gas giant adorned with thousands of icy ringlets.",
            "https://assets.solar.example/saturn.png",
            "9.7 km/s",
            "1433.5M km",
        ),
        planet(
            7,
            "Uranus",
            "An ice giant rotating at a near 90-degree tilt to its orbit.",
            "https://assets.solar.example/uranus.png",
            "6.8 km/s",
            "2872.5M km",
        ),
        planet(
            8,
            "Neptune",
            "Dark, cold, and whipped by supersonic winds on the system's edge.",
            "https://assets.solar.example/neptune.png",
            "5.4 km/s",
            "4495.1M km",
        ),
    ]
}

fn planet(
    id: i64,
    name: &str,
    description: &str,
    image: &str,
    velocity: &str,
    distance: &str,
) -> Planet {
    Planet {
        id,
        name: name.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        velocity: velocity.to_string(),
        distance: distance.to_string(),
    }
}
