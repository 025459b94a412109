use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("message text is empty")]
    EmptyText,
    #[error("message {0} not found")]
    NotFound(String),
    #[error("failed to serialize messages: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to save messages: {0}")]
    Write(#[from] std::io::Error),
}
