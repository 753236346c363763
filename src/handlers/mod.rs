pub mod docs;
pub mod health;
pub mod planets;
pub mod system;

pub use docs::api_docs;
pub use health::{liveness, readiness};
pub use planets::find_planet;
pub use system::os_info;
