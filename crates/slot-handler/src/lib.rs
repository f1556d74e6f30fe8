//! # slot-handler
//!
//! The request boundary for single-calendar availability. Accepts an
//! invocation event carrying an optional JSON body of busy intervals and returns
//! a `text/plain` availability sentence, or a generic 500 on failure.
//!
//! ## Modules
//!
//! - [`event`] — Invocation event and response envelope
//! - [`payload`] — Tolerated body shapes and busy-interval extraction
//! - [`handler`] — Orchestration and error-to-response mapping
//! - [`error`] — Error types

pub mod error;
pub mod event;
pub mod handler;
pub mod payload;

pub use error::HandlerError;
pub use event::{InvocationEvent, InvocationResponse, STATUS_INTERNAL_ERROR, STATUS_OK};
pub use handler::{compute_message, handle, handle_with, ERROR_BODY};
pub use payload::{extract_busy, Payload, RawBusy};
