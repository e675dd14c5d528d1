use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DefaultsError {
    #[error("required defaults file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read defaults file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse defaults file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to deserialize field defaults: {0}")]
    DeserializeError(#[from] toml::de::Error),
}
