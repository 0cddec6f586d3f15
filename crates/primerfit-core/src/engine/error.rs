use thiserror::Error;

use super::config::ConfigError;
use crate::core::scoring::scorer::ScoringError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Primer selection failed for input '{key}': {source}")]
    Request {
        key: String,
        #[source]
        source: ScoringError,
    },
}

impl EngineError {
    pub(crate) fn request(key: &str, source: ScoringError) -> Self {
        Self::Request {
            key: key.to_string(),
            source,
        }
    }
}
