//! Request orchestration: body in, availability sentence (or failure) out.
//!
//! Every error is caught here and turned into a 500 with a fixed body. The
//! cause is logged, never returned to the caller.

use slot_engine::{availability_message, BusyInterval, WorkdayConfig};
use tracing::{debug, error, info};

use crate::error::Result;
use crate::event::{InvocationEvent, InvocationResponse, STATUS_INTERNAL_ERROR, STATUS_OK};
use crate::payload::{extract_busy, RawBusy};

/// Body of every failure response.
pub const ERROR_BODY: &str = "Unable to compute availability.";

/// Handle one request with the default working day.
pub fn handle(event: &InvocationEvent) -> InvocationResponse {
    handle_with(event, &WorkdayConfig::default())
}

/// Handle one request against an explicit working day.
pub fn handle_with(event: &InvocationEvent, config: &WorkdayConfig) -> InvocationResponse {
    let body = event.body.as_deref();
    match compute_message(body, config) {
        Ok(message) => InvocationResponse::text(STATUS_OK, message),
        Err(err) => {
            error!(body = body.unwrap_or_default(), error = %err, "availability request failed");
            InvocationResponse::text(STATUS_INTERNAL_ERROR, ERROR_BODY)
        }
    }
}

/// Parse the body, match busy intervals, and render the sentence.
///
/// # Errors
/// Returns `HandlerError` if the body is malformed or a timestamp is unparseable.
pub fn compute_message(body: Option<&str>, config: &WorkdayConfig) -> Result<String> {
    let raw = extract_busy(body)?;
    debug!(busy = raw.len(), "busy intervals extracted");

    let intervals = parse_intervals(&raw).inspect_err(|err| {
        debug!(busy = ?raw, error = %err, "busy interval rejected");
    })?;

    let message = availability_message(config, &intervals);
    info!(busy = intervals.len(), "availability computed");
    Ok(message)
}

fn parse_intervals(raw: &[RawBusy]) -> Result<Vec<BusyInterval>> {
    raw.iter().map(RawBusy::parse).collect()
}
