//! Errors raised while turning a source document into a content item

use thiserror::Error;

/// Why a single source document was rejected.
///
/// These never abort a catalog load: the loader logs them and moves on to
/// the next document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Header block opened with --- is never closed")]
    UnterminatedHeader,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Document has no body")]
    EmptyBody,

    #[error("Invalid embedded record: {0}")]
    InvalidRecord(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
