use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading and building a scenario.
/// Stepping the model never fails.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("failed to read scenario file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid scenario: {0}")]
    InvalidScenario(String),
}
