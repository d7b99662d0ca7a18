pub mod adaptive;
pub mod config;
pub mod error;
pub mod logging;
pub mod services;

pub use adaptive::{AdaptiveConfig, AdaptivePathEngine, AdaptivePathView, PathRequest};
pub use error::{PathError, PathResult};

/// Engine configured from the process environment (and `.env`, if present).
pub fn engine_from_env() -> AdaptivePathEngine {
    let config = config::Config::load();
    AdaptivePathEngine::new(config.adaptive)
}
