//! Error types for request handling.

use slot_engine::SlotError;
use thiserror::Error;

/// Anything that turns a request into the generic failure response.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// The body was not JSON, or not one of the accepted shapes.
    #[error("Malformed request body: {0}")]
    Payload(#[from] serde_json::Error),

    /// A busy interval carried an unusable timestamp.
    #[error("Malformed busy interval: {0}")]
    Interval(#[from] SlotError),
}

pub type Result<T> = std::result::Result<T, HandlerError>;
