use thiserror::Error;

/// Errors raised by the surfaces around the codec.
///
/// The codec itself is total and never produces one of these.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid token id at position {position}: {token:?}")]
    InvalidTokenId { position: usize, token: String },

    #[error("Unknown vocabulary kind: {0}")]
    UnknownKind(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CodecError>;
