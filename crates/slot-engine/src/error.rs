//! Error types for slot-engine operations.

use thiserror::Error;

/// Errors raised while building a working day or reading busy intervals.
#[derive(Error, Debug)]
pub enum SlotError {
    /// A busy-interval timestamp was neither RFC 3339 nor a naive ISO 8601 datetime.
    #[error("Invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The working-day configuration cannot produce a slot grid.
    #[error("Invalid workday configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
