pub mod database;

pub use database::{MongoPlanetStore, PlanetStore};
