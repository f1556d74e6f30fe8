//! Tests for free-slot resolution and the full message pipeline.

use std::collections::BTreeSet;

use slot_engine::{
    availability_message, compute_availability, generate_grid, resolve_free_slots, BusyInterval,
    MatchPolicy, WorkdayConfig, NO_SLOTS_MESSAGE,
};

fn busy(start: &str, end: &str) -> BusyInterval {
    BusyInterval::parse(start, end).unwrap()
}

// ── Resolution ──────────────────────────────────────────────────────────────

#[test]
fn resolve_keeps_grid_order() {
    let grid = generate_grid(&WorkdayConfig::default());
    let removed: BTreeSet<_> = [grid[3], grid[0], grid[10]].into_iter().collect();

    let free = resolve_free_slots(&grid, &removed);

    assert_eq!(free.len(), 15);
    assert!(free.windows(2).all(|pair| pair[0].start < pair[1].start));
    assert!(!free.contains(&grid[0]));
    assert!(!free.contains(&grid[3]));
    assert!(!free.contains(&grid[10]));
}

#[test]
fn no_busy_intervals_leaves_the_whole_grid_free() {
    let config = WorkdayConfig::default();
    let availability = compute_availability(&config, &[], MatchPolicy::Overlap);

    assert_eq!(availability.free, generate_grid(&config));
    assert!(availability.busy.is_empty());
}

#[test]
fn overlapping_busy_intervals_count_each_slot_once() {
    let intervals = vec![
        busy("2025-01-01T14:00:00Z", "2025-01-01T15:00:00Z"),
        busy("2025-01-01T14:30:00Z", "2025-01-01T15:30:00Z"),
    ];
    let availability =
        compute_availability(&WorkdayConfig::default(), &intervals, MatchPolicy::Overlap);

    assert_eq!(availability.busy.len(), 3);
    assert_eq!(availability.free.len(), 15);
}

#[test]
fn unaligned_interval_claims_both_touched_slots() {
    let intervals = vec![busy("2025-01-01T09:10:00-04:00", "2025-01-01T09:50:00-04:00")];
    let availability =
        compute_availability(&WorkdayConfig::default(), &intervals, MatchPolicy::Overlap);

    // 9:10-9:50 touches both 9:00 and 9:30.
    assert_eq!(availability.busy.len(), 2);
    assert_eq!(availability.free.len(), 16);
    assert_eq!(availability.free[0].start.to_string(), "10am");
}

#[test]
fn interval_within_the_first_slot_leaves_seventeen_free() {
    let intervals = vec![busy("2025-01-01T09:10:00-04:00", "2025-01-01T09:25:00-04:00")];
    let availability =
        compute_availability(&WorkdayConfig::default(), &intervals, MatchPolicy::Overlap);

    assert_eq!(availability.free.len(), 17);
    assert_eq!(availability.free[0].start.to_string(), "9:30am");
}

// ── Messages ────────────────────────────────────────────────────────────────

#[test]
fn full_day_message_lists_all_slots() {
    let message = availability_message(&WorkdayConfig::default(), &[]);

    assert!(message.starts_with("These are the available time slots 9am to 9:30am, 9:30am to 10am, "));
    assert!(message.ends_with(", and 5:30pm to 6pm."));
    assert_eq!(message.matches(" to ").count(), 18);
}

#[test]
fn fully_booked_day_has_no_slots() {
    let intervals = vec![busy("2025-01-01T13:00:00Z", "2025-01-01T22:00:00Z")];
    assert_eq!(
        availability_message(&WorkdayConfig::default(), &intervals),
        NO_SLOTS_MESSAGE
    );
}

#[test]
fn single_free_slot_uses_the_singular_form() {
    let intervals = vec![busy("2025-01-01T13:30:00Z", "2025-01-01T22:00:00Z")];
    assert_eq!(
        availability_message(&WorkdayConfig::default(), &intervals),
        "These are the available time slots 9am to 9:30am."
    );
}

#[test]
fn two_free_slots_join_without_a_comma() {
    let intervals = vec![busy("2025-01-01T13:30:00Z", "2025-01-01T21:30:00Z")];
    assert_eq!(
        availability_message(&WorkdayConfig::default(), &intervals),
        "These are the available time slots 9am to 9:30am and 5:30pm to 6pm."
    );
}

#[test]
fn utc_hour_at_minus_four_removes_ten_and_ten_thirty() {
    let intervals = vec![busy("2025-01-01T14:00:00Z", "2025-01-01T15:00:00Z")];
    let message = availability_message(&WorkdayConfig::default(), &intervals);

    let expected = "These are the available time slots \
        9am to 9:30am, 9:30am to 10am, 11am to 11:30am, 11:30am to 12pm, \
        12pm to 12:30pm, 12:30pm to 1pm, 1pm to 1:30pm, 1:30pm to 2pm, \
        2pm to 2:30pm, 2:30pm to 3pm, 3pm to 3:30pm, 3:30pm to 4pm, \
        4pm to 4:30pm, 4:30pm to 5pm, 5pm to 5:30pm, and 5:30pm to 6pm.";
    assert_eq!(message, expected);
}
