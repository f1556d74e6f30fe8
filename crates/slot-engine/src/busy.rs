//! Map externally reported busy intervals onto the slot grid.
//!
//! Timestamps are read in the configuration's canonical offset. The host
//! timezone is never consulted, so the same payload produces the same slots on
//! every machine.

use chrono::{
    DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike,
};
use tracing::trace;

use crate::config::WorkdayConfig;
use crate::error::{Result, SlotError};
use crate::grid::{generate_grid, slot_index};
use crate::time::{Slot, TimeOfDay, MINUTES_PER_DAY};

/// One occupied period reported by the calendar service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusyInterval {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl BusyInterval {
    /// Parse a busy interval from two ISO 8601 timestamps.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidTimestamp` if either timestamp is unparseable.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self {
            start: parse_timestamp(start)?,
            end: parse_timestamp(end)?,
        })
    }
}

/// How a busy interval claims grid slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// Every slot the interval overlaps, however briefly, is busy.
    #[default]
    Overlap,
    /// Only slots whose start the interval's own half-hour walk lands on exactly.
    /// An interval starting at 9:10 never claims the 9:00 slot.
    ExactStart,
}

/// Parse an ISO 8601 timestamp.
///
/// Accepts RFC 3339 (`2025-01-01T14:00:00Z`, `2025-01-01T10:00:00-04:00`) and a
/// naive `2025-01-01T14:00:00[.fff]`, which is read as UTC.
///
/// # Errors
/// Returns `SlotError::InvalidTimestamp` carrying the RFC 3339 parse failure.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    let trimmed = value.trim();
    match DateTime::parse_from_rfc3339(trimmed) {
        Ok(dt) => Ok(dt),
        Err(source) => NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|ndt| ndt.and_utc().fixed_offset())
            .map_err(|_| SlotError::InvalidTimestamp {
                value: value.to_string(),
                source,
            }),
    }
}

/// Wall-clock time of `instant` in `offset`, as minutes since midnight.
pub fn to_local_minutes(instant: &DateTime<FixedOffset>, offset: FixedOffset) -> TimeOfDay {
    let local = instant.with_timezone(&offset);
    TimeOfDay::from_minutes_wrapping(i64::from(local.hour() * 60 + local.minute()))
}

/// The grid slots claimed by `interval`, in ascending order.
///
/// Only the time of day matters: a slot is claimed if it overlaps the interval
/// on any calendar day the interval covers, so an interval crossing midnight
/// wraps onto the start of the day and one lasting a full day or more claims
/// the whole grid. Intervals with `end <= start` claim nothing.
pub fn match_slots(
    interval: &BusyInterval,
    config: &WorkdayConfig,
    policy: MatchPolicy,
) -> Vec<Slot> {
    if interval.end <= interval.start {
        trace!(start = %interval.start, end = %interval.end, "empty busy interval ignored");
        return Vec::new();
    }

    let matched = match policy {
        MatchPolicy::Overlap => overlapping_slots(interval, config),
        MatchPolicy::ExactStart => exact_start_slots(interval, config),
    };
    trace!(
        start = %interval.start,
        end = %interval.end,
        matched = matched.len(),
        "busy interval mapped onto grid"
    );
    matched
}

/// Grid slots overlapping the interval on any local day it touches.
fn overlapping_slots(interval: &BusyInterval, config: &WorkdayConfig) -> Vec<Slot> {
    let grid = generate_grid(config);
    if interval.end - interval.start >= Duration::days(1) {
        return grid;
    }

    let offset = config.offset();
    let first_day = interval.start.with_timezone(&offset).date_naive();
    let last_day = interval.end.with_timezone(&offset).date_naive();
    let days: Vec<NaiveDate> = first_day
        .iter_days()
        .take_while(|day| *day <= last_day)
        .collect();

    grid.into_iter()
        .filter(|slot| days.iter().any(|day| overlaps_on(slot, *day, interval, offset)))
        .collect()
}

/// Whether `slot`, placed on local `day`, overlaps the interval.
fn overlaps_on(slot: &Slot, day: NaiveDate, interval: &BusyInterval, offset: FixedOffset) -> bool {
    let midnight = day.and_time(NaiveTime::MIN);
    let start = midnight + Duration::minutes(i64::from(slot.start.minutes()));
    let end = midnight + Duration::minutes(i64::from(slot.end.minutes()));
    match (
        offset.from_local_datetime(&start).single(),
        offset.from_local_datetime(&end).single(),
    ) {
        (Some(start), Some(end)) => start < interval.end && interval.start < end,
        _ => false,
    }
}

/// Walk from the raw interval start in slot-length steps, claiming a slot only
/// when a step lands exactly on its start.
fn exact_start_slots(interval: &BusyInterval, config: &WorkdayConfig) -> Vec<Slot> {
    let offset = config.offset();
    let length = config.slot_minutes();
    let step = Duration::minutes(i64::from(length));
    let mut cursor = interval.start.with_timezone(&offset);

    let max_steps = MINUTES_PER_DAY.div_ceil(length);
    let mut matched = Vec::new();
    for _ in 0..max_steps {
        if cursor >= interval.end {
            break;
        }
        let local = to_local_minutes(&cursor, offset);
        if cursor.second() == 0 && cursor.nanosecond() == 0 && slot_index(config, local).is_some() {
            matched.push(Slot::new(local, length));
        }
        cursor += step;
    }

    matched.sort();
    matched.dedup();
    matched
}
