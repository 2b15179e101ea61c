//! Unified error type definition

use thiserror::Error;

/// Pack assembly error type
#[derive(Error, Debug)]
pub enum PackError {
    /// Creating, removing or writing the output file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The zip container rejected an entry
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// The sound document could not be parsed or serialized
    #[error("Sound document error: {0}")]
    Document(#[from] serde_json::Error),

    /// An asset required by the manifest is absent (fail-fast policy only)
    #[error("Source asset missing: {key}")]
    SourceMissing { key: String },
}

/// Pack Result type alias
pub type PackResult<T> = std::result::Result<T, PackError>;
