use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("topic must not be empty")]
    EmptyTopic,

    #[error("notes must not be empty")]
    EmptyNotes,

    #[error("invalid image type: {0}")]
    UnsupportedImageType(String),

    #[error("image too large: {size} bytes (limit 5 MiB)")]
    ImageTooLarge { size: usize },

    #[error("malformed data URI: {0}")]
    MalformedDataUri(String),

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
