//! Wall-clock minutes and the half-open slots built from them.

use std::fmt;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u16 = 1440;

/// Minutes since local midnight in the canonical offset.
///
/// Values are `0..=1440`; `1440` only appears as the exclusive end of a slot
/// that closes at midnight and renders as `12am`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Midnight at the end of the day.
    pub const END_OF_DAY: Self = Self(MINUTES_PER_DAY);

    /// Build from an hour and minute. Out-of-range input wraps around the day.
    pub const fn from_hm(hour: u16, minute: u16) -> Self {
        // u16::MAX * 60 + u16::MAX fits comfortably in u32.
        let total = (hour as u32 * 60 + minute as u32) % MINUTES_PER_DAY as u32;
        Self(total as u16)
    }

    /// Wrap any signed minute count onto the 24-hour clock.
    pub fn from_minutes_wrapping(minutes: i64) -> Self {
        let wrapped = minutes.rem_euclid(i64::from(MINUTES_PER_DAY));
        // rem_euclid keeps the value in 0..1440.
        Self(u16::try_from(wrapped).unwrap_or_default())
    }

    pub const fn minutes(self) -> u16 {
        self.0
    }

    /// This time shifted forward, wrapping past midnight.
    pub fn plus_minutes(self, minutes: u16) -> Self {
        Self::from_minutes_wrapping(i64::from(self.0) + i64::from(minutes))
    }
}

/// 12-hour clock: no leading zero, minutes only when non-zero, `am`/`pm` suffix.
///
/// `9:00` → `9am`, `9:30` → `9:30am`, `12:00` → `12pm`, `0:00` → `12am`.
impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.0 % MINUTES_PER_DAY;
        let hour = minutes / 60;
        let minute = minutes % 60;

        let display_hour = match hour {
            0 => 12,
            h if h > 12 => h - 12,
            h => h,
        };
        write!(f, "{display_hour}")?;
        if minute != 0 {
            write!(f, ":{minute:02}")?;
        }
        f.write_str(if hour < 12 { "am" } else { "pm" })
    }
}

/// A half-open bookable interval `[start, end)` on the working-day grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl Slot {
    pub fn new(start: TimeOfDay, length_minutes: u16) -> Self {
        let end = start.minutes() + length_minutes;
        let end = if end == MINUTES_PER_DAY {
            TimeOfDay::END_OF_DAY
        } else {
            start.plus_minutes(length_minutes)
        };
        Self { start, end }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}
