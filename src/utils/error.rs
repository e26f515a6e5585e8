use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvError {
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Malformed JSON in {}: {source}", .path.display())]
    MalformedData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Heuristic plugin not found: {identifier}")]
    PluginNotFound { identifier: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Timestamp parse error: {0}")]
    Timestamp(#[from] chrono::format::ParseError),
}

pub type Result<T> = std::result::Result<T, ConvError>;
