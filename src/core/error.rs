use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuestError {
    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    #[error("Unknown item: {0}")]
    UnknownItem(String),

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuestError>;
