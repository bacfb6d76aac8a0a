use crate::validate::Violation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum LibrisError {
    #[error("Book not found: {0}")]
    BookNotFound(Uuid),

    #[error("Partner not found: {0}")]
    PartnerNotFound(Uuid),

    #[error("{0}")]
    Validation(#[from] Violation),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, LibrisError>;
