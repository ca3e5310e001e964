mod autoplay;
pub mod config;
mod engine;
mod shared;

pub use autoplay::AutoPlay;
pub use config::LifeConfig;
pub use engine::LifeEngine;
pub use shared::SharedEngine;
