pub mod document;
pub mod format;

pub use document::*;
pub use format::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StagingError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not read document source: {0}")]
    SourceUnreadable(String),

    #[error("Document is empty: {0}")]
    EmptyDocument(String),
}
