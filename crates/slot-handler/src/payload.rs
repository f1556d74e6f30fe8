//! Tolerant extraction of busy intervals from the request body.
//!
//! The calendar lookup upstream has delivered two shapes over time:
//!
//! ```text
//! { "calendars": { "<key>": { "busy": [ { "start": "...", "end": "..." } ] } } }
//! [ { "body": { "calendars": { ... } } } ]
//! ```
//!
//! Missing layers at any depth mean "no busy intervals". Anything else is an
//! error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use slot_engine::BusyInterval;

use crate::error::Result;

/// The accepted body shapes.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    /// A single-element array wrapping `{ "body": <calendar envelope> }`.
    Wrapped(Vec<WrappedBody>),
    /// The calendar envelope itself.
    Direct(CalendarEnvelope),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WrappedBody {
    #[serde(default)]
    pub body: Option<CalendarEnvelope>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarEnvelope {
    #[serde(default)]
    pub calendars: Option<BTreeMap<String, CalendarEntry>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarEntry {
    #[serde(default)]
    pub busy: Option<Vec<RawBusy>>,
}

/// A busy interval exactly as the upstream sent it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBusy {
    pub start: String,
    pub end: String,
}

impl RawBusy {
    /// # Errors
    /// Returns `HandlerError::Interval` if either timestamp is unparseable.
    pub fn parse(&self) -> Result<BusyInterval> {
        Ok(BusyInterval::parse(&self.start, &self.end)?)
    }
}

impl Payload {
    /// Flatten every calendar's busy list.
    pub fn into_busy(self) -> Vec<RawBusy> {
        let envelope = match self {
            Self::Direct(envelope) => Some(envelope),
            Self::Wrapped(items) => items.into_iter().next().and_then(|item| item.body),
        };
        envelope.map(CalendarEnvelope::into_busy).unwrap_or_default()
    }
}

impl CalendarEnvelope {
    fn into_busy(self) -> Vec<RawBusy> {
        self.calendars
            .unwrap_or_default()
            .into_values()
            .flat_map(|entry| entry.busy.unwrap_or_default())
            .collect()
    }
}

/// Pull the raw busy intervals out of a request body.
///
/// An absent, blank or `null` body yields no intervals.
///
/// # Errors
/// Returns `HandlerError::Payload` if the body is not JSON or matches neither
/// accepted shape.
pub fn extract_busy(body: Option<&str>) -> Result<Vec<RawBusy>> {
    let Some(body) = body.filter(|b| !b.trim().is_empty()) else {
        return Ok(Vec::new());
    };
    let payload: Option<Payload> = serde_json::from_str(body)?;
    Ok(payload.map(Payload::into_busy).unwrap_or_default())
}
