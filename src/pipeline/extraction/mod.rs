pub mod orchestrator;
pub mod types;

pub use orchestrator::*;
pub use types::*;

use thiserror::Error;

use crate::pipeline::staging::StagingError;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Staging error: {0}")]
    Staging(#[from] StagingError),
}
