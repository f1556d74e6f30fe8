//! Free slots are the grid minus every slot a busy interval touched.
//!
//! A slot is either fully free or fully busy; partial overlap was already
//! resolved to "busy" while matching.

use std::collections::BTreeSet;

use crate::busy::{match_slots, BusyInterval, MatchPolicy};
use crate::config::WorkdayConfig;
use crate::grid::generate_grid;
use crate::time::Slot;

/// The grid split into free and busy slots, each in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Availability {
    pub free: Vec<Slot>,
    pub busy: Vec<Slot>,
}

/// Subtract `busy` from `grid`, keeping grid order.
pub fn resolve_free_slots(grid: &[Slot], busy: &BTreeSet<Slot>) -> Vec<Slot> {
    grid.iter().filter(|slot| !busy.contains(slot)).copied().collect()
}

/// Run the whole pipeline: grid, busy matching, subtraction.
///
/// `free` and `busy` always partition the grid.
pub fn compute_availability(
    config: &WorkdayConfig,
    intervals: &[BusyInterval],
    policy: MatchPolicy,
) -> Availability {
    let grid = generate_grid(config);
    let matched: BTreeSet<Slot> = intervals
        .iter()
        .flat_map(|interval| match_slots(interval, config, policy))
        .collect();

    let free = resolve_free_slots(&grid, &matched);
    let busy = grid.iter().filter(|slot| matched.contains(slot)).copied().collect();

    Availability { free, busy }
}
