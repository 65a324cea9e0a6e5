//! Error types for board operations
//!
//! Every failure in the board core is local and recoverable: the operation
//! is aborted, the item store is left as it was, and the message is shown to
//! the user.

use crate::types::ItemId;
use thiserror::Error;

/// Errors that can occur while manipulating, ingesting or persisting a board
#[derive(Error, Debug)]
pub enum BoardError {
    /// Image bytes could not be decoded
    #[error("could not decode image: {0}")]
    Decode(String),

    /// Image or document could not be encoded
    #[error("could not encode: {0}")]
    Encode(String),

    /// Saved board is not valid JSON or does not match the record layout
    #[error("malformed board file: {0}")]
    Parse(#[from] serde_json::Error),

    /// Saved board parsed but breaks the document contract
    #[error("invalid board file: {0}")]
    InvalidDocument(String),

    /// Operation referenced an item that is not on the board
    #[error("item {0} not found")]
    NotFound(ItemId),

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for board operations
pub type BoardResult<T> = Result<T, BoardError>;

impl BoardError {
    /// Whether this error means the loaded document was unusable.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, BoardError::Parse(_) | BoardError::InvalidDocument(_))
    }
}

impl From<image::ImageError> for BoardError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::Encoding(e) => BoardError::Encode(e.to_string()),
            image::ImageError::IoError(e) => BoardError::Io(e),
            other => BoardError::Decode(other.to_string()),
        }
    }
}
