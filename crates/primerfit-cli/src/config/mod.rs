mod builder;
mod file;
mod models;

pub use builder::{build_config, build_scoring_config};
pub use models::AppConfig;
