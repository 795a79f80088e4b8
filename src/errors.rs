use thiserror::Error;

/// Error type that captures common record-loading failures.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Source not found: {0}")]
    NotFound(String),
}
