use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptimizerError {
    #[error("lookup request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("lookup returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("no results for \"{0}\"")]
    NoResults(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("resolver task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, OptimizerError>;
