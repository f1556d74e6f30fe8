//! # slot-engine
//!
//! Free-time availability for one fixed working day.
//!
//! The day is a grid of equal slots (9am–6pm in half hours by default). Busy
//! intervals from a calendar service are mapped onto that grid in a fixed
//! canonical UTC offset, the touched slots are removed, and what remains is
//! rendered as a single English sentence.
//!
//! ```rust
//! use slot_engine::{availability_message, BusyInterval, WorkdayConfig};
//!
//! let busy = vec![BusyInterval::parse("2025-01-01T13:00:00Z", "2025-01-01T21:30:00Z").unwrap()];
//! let message = availability_message(&WorkdayConfig::default(), &busy);
//! assert_eq!(message, "These are the available time slots 5:30pm to 6pm.");
//! ```
//!
//! ## Modules
//!
//! - [`config`] — Working-day shape and canonical offset
//! - [`time`] — `TimeOfDay` minutes and `Slot` intervals, with 12-hour rendering
//! - [`grid`] — The ordered slot grid for the day
//! - [`busy`] — Busy-interval parsing and grid matching
//! - [`availability`] — Grid minus busy slots
//! - [`render`] — Sentence rendering with list grammar
//! - [`error`] — Error types

pub mod availability;
pub mod busy;
pub mod config;
pub mod error;
pub mod grid;
pub mod render;
pub mod time;

pub use availability::{compute_availability, resolve_free_slots, Availability};
pub use busy::{match_slots, parse_timestamp, to_local_minutes, BusyInterval, MatchPolicy};
pub use config::WorkdayConfig;
pub use error::SlotError;
pub use grid::generate_grid;
pub use render::{join_list, render_message, NO_SLOTS_MESSAGE};
pub use time::{Slot, TimeOfDay};

/// Compute and render availability with the default (overlap) matching policy.
pub fn availability_message(config: &WorkdayConfig, intervals: &[BusyInterval]) -> String {
    let availability = compute_availability(config, intervals, MatchPolicy::default());
    render_message(&availability.free)
}
