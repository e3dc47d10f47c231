use thiserror::Error;

/// Everything that can go wrong while servicing one resize. All variants are
/// terminal for the current request; nothing is retried internally.
#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
    #[error("failed to decode source image: {0}")]
    Decode(String),
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to encode output image: {0}")]
    Encode(String),
}
