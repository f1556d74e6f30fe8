//! The fixed slot grid for one working day.

use crate::config::WorkdayConfig;
use crate::time::{Slot, TimeOfDay};

/// Generate the ordered, gap-free slots covering the working day.
///
/// The grid depends only on the configuration, so the same config always yields
/// the same grid regardless of the host's timezone.
pub fn generate_grid(config: &WorkdayConfig) -> Vec<Slot> {
    let length = config.slot_minutes();

    (config.day_start().minutes()..config.day_end().minutes())
        .step_by(usize::from(length))
        .map(|start| Slot::new(TimeOfDay::from_minutes_wrapping(i64::from(start)), length))
        .collect()
}

/// Index of the grid slot starting at `start`, if any.
pub(crate) fn slot_index(config: &WorkdayConfig, start: TimeOfDay) -> Option<usize> {
    let day_start = config.day_start().minutes();
    let minutes = start.minutes();
    if minutes < day_start || minutes >= config.day_end().minutes() {
        return None;
    }
    let since_start = minutes - day_start;
    if since_start % config.slot_minutes() != 0 {
        return None;
    }
    Some(usize::from(since_start / config.slot_minutes()))
}
