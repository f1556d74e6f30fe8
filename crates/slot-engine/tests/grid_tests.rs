//! Tests for slot grid generation.

use chrono::FixedOffset;
use slot_engine::{generate_grid, TimeOfDay, WorkdayConfig};

#[test]
fn default_grid_has_eighteen_half_hour_slots() {
    let grid = generate_grid(&WorkdayConfig::default());

    assert_eq!(grid.len(), 18);
    assert_eq!(grid[0].start.minutes(), 540);
    assert_eq!(grid[17].start.minutes(), 1050);
    assert_eq!(grid[17].end.minutes(), 1080);
}

#[test]
fn grid_has_no_gaps_or_overlaps() {
    let grid = generate_grid(&WorkdayConfig::default());

    for pair in grid.windows(2) {
        assert_eq!(pair[0].end, pair[1].start, "slots must be contiguous");
        assert_eq!(pair[1].start.minutes() - pair[0].start.minutes(), 30);
    }
}

#[test]
fn grid_ignores_the_canonical_offset() {
    let default = generate_grid(&WorkdayConfig::default());
    let tokyo = generate_grid(
        &WorkdayConfig::default().with_offset(FixedOffset::east_opt(9 * 3600).unwrap()),
    );

    assert_eq!(default, tokyo);
}

#[test]
fn grid_follows_a_custom_day() {
    let config = WorkdayConfig::new(
        TimeOfDay::from_hm(8, 0),
        TimeOfDay::from_hm(12, 0),
        60,
        FixedOffset::east_opt(0).unwrap(),
    )
    .unwrap();

    let rendered: Vec<String> = generate_grid(&config).iter().map(|s| s.to_string()).collect();

    assert_eq!(
        rendered,
        vec!["8am to 9am", "9am to 10am", "10am to 11am", "11am to 12pm"]
    );
}
