use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("upstream returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid content block: {0}")]
    Block(#[from] notefolio_core::error::CoreError),
}
