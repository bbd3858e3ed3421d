use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
