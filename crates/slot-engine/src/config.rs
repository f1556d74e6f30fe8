//! Working-day configuration.
//!
//! The day boundaries, slot length and canonical offset are plain values passed
//! into every computation. Nothing reads the host clock or the host timezone.

use chrono::FixedOffset;

use crate::error::{Result, SlotError};
use crate::time::{TimeOfDay, MINUTES_PER_DAY};

/// Default day start: 9:00.
pub const DEFAULT_DAY_START: TimeOfDay = TimeOfDay::from_hm(9, 0);
/// Default day end: 18:00.
pub const DEFAULT_DAY_END: TimeOfDay = TimeOfDay::from_hm(18, 0);
/// Default slot length in minutes.
pub const DEFAULT_SLOT_MINUTES: u16 = 30;
/// Default canonical offset: UTC−4, in seconds east of UTC.
pub const DEFAULT_OFFSET_SECONDS: i32 = -4 * 3600;

/// The fixed shape of one bookable working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkdayConfig {
    day_start: TimeOfDay,
    day_end: TimeOfDay,
    slot_minutes: u16,
    offset: FixedOffset,
}

impl WorkdayConfig {
    /// Build a validated configuration.
    ///
    /// `day_end` is exclusive and may be midnight only when expressed as
    /// [`TimeOfDay::END_OF_DAY`].
    ///
    /// # Errors
    /// Returns `SlotError::InvalidConfig` if the slot length is zero, the day is
    /// empty or inverted, or the day does not divide evenly into slots.
    pub fn new(
        day_start: TimeOfDay,
        day_end: TimeOfDay,
        slot_minutes: u16,
        offset: FixedOffset,
    ) -> Result<Self> {
        if slot_minutes == 0 {
            return Err(SlotError::InvalidConfig(
                "slot length must be positive".to_string(),
            ));
        }
        if day_end.minutes() > MINUTES_PER_DAY {
            return Err(SlotError::InvalidConfig(format!(
                "day end {} is past midnight",
                day_end.minutes()
            )));
        }
        if day_start >= day_end {
            return Err(SlotError::InvalidConfig(format!(
                "day start {day_start} is not before day end {day_end}"
            )));
        }
        let span = day_end.minutes() - day_start.minutes();
        if span % slot_minutes != 0 {
            return Err(SlotError::InvalidConfig(format!(
                "{span} minute day is not a multiple of {slot_minutes} minute slots"
            )));
        }

        Ok(Self {
            day_start,
            day_end,
            slot_minutes,
            offset,
        })
    }

    pub fn day_start(&self) -> TimeOfDay {
        self.day_start
    }

    pub fn day_end(&self) -> TimeOfDay {
        self.day_end
    }

    pub fn slot_minutes(&self) -> u16 {
        self.slot_minutes
    }

    /// The canonical offset every timestamp is read in.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Number of slots in the day.
    pub fn slot_count(&self) -> usize {
        usize::from((self.day_end.minutes() - self.day_start.minutes()) / self.slot_minutes)
    }

    /// Same day shape, different canonical offset.
    pub fn with_offset(self, offset: FixedOffset) -> Self {
        Self { offset, ..self }
    }
}

impl Default for WorkdayConfig {
    fn default() -> Self {
        Self {
            day_start: DEFAULT_DAY_START,
            day_end: DEFAULT_DAY_END,
            slot_minutes: DEFAULT_SLOT_MINUTES,
            offset: FixedOffset::east_opt(DEFAULT_OFFSET_SECONDS)
                .expect("UTC-4 is within the ±24h offset range"),
        }
    }
}
