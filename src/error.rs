use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid {field}: expected one of [{options}], got {value:?}")]
    InvalidInput {
        field: &'static str,
        value: String,
        options: &'static str,
    },

    #[error("failed to resolve keystore path {path:?}: {reason}")]
    PathResolution { path: String, reason: String },

    #[error("failed to download keystore from {url}: {reason}")]
    Download { url: String, reason: String },

    #[error("failed to serialize build config: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Persistence {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to export {key}: {reason}")]
    Publish { key: &'static str, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
