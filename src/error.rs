//! Error type shared by rendering, style loading and variant generation.

use thiserror::Error;

/// Errors produced while rendering or persisting icons.
///
/// Nothing in the crate retries or recovers from these; they are returned
/// to the caller as-is and, in the binary, end the process.
#[derive(Debug, Error)]
pub enum IconError {
    /// PNG encoding or decoding failed, including the file write performed
    /// by the encoder (missing directory, permission denied, disk full).
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Filesystem failure outside the image encoder.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A style profile or manifest could not be (de)serialized.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A color string was not a hex code.
    #[error("invalid color {0:?}: expected a hex code like \"#10b981\"")]
    InvalidColor(String),

    /// A style profile parsed but holds unusable values.
    #[error("invalid style: {0}")]
    InvalidStyle(String),
}

pub type Result<T> = std::result::Result<T, IconError>;
