use std::io;

use thiserror::Error;

/// The only way the graph algorithms can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    /// Neither a spanning tree nor a cycle exists over zero points
    #[error("point set is empty")]
    EmptyPointSet,
}

/// Errors surfaced by the command line driver
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to render: {0}")]
    Render(#[from] cairo::Error),
}
