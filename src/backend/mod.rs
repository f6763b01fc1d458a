pub mod client;
pub mod types;

pub use client::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Backend is not reachable at {0}")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Backend returned error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
