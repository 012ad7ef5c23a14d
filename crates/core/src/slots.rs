//! # Slot availability
//!
//! The clinic books appointments on a fixed daily grid. A day's free slots
//! are the grid of the [`OperatingWindow`] minus the [`BookedTimeSet`] the
//! API reports for one doctor on one date.
//!
//! Both steps are pure: the grid is regenerated and filtered every time the
//! doctor or date changes, nothing is cached.

use std::collections::HashSet;

use crate::errors::{ClinicError, ClinicResult};
use crate::models::{Appointment, TimeSlot};

/// Daily bounds and step of the bookable grid.
///
/// Start and end are inclusive. The step does not have to divide the window
/// evenly; generation simply stops at the last slot not after the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatingWindow {
    start: u32,
    end: u32,
    granularity: u32,
}

impl OperatingWindow {
    pub const DEFAULT_GRANULARITY_MINUTES: u32 = 15;

    /// Create a window from `(hour, minute)` bounds and a step in minutes.
    ///
    /// # Errors
    ///
    /// * `ClinicError::Validation` - a bound is not a time of day, the end is
    ///   before the start, or the step is zero
    pub fn new(start: (u32, u32), end: (u32, u32), granularity_minutes: u32) -> ClinicResult<Self> {
        let start = TimeSlot::from_hm(start.0, start.1)?;
        let end = TimeSlot::from_hm(end.0, end.1)?;
        Self::between(&start, &end, granularity_minutes)
    }

    /// Create a window from two slots and a step in minutes.
    pub fn between(start: &TimeSlot, end: &TimeSlot, granularity_minutes: u32) -> ClinicResult<Self> {
        if granularity_minutes == 0 {
            return Err(ClinicError::Validation(
                "Slot granularity must be at least one minute".to_string(),
            ));
        }
        if end < start {
            return Err(ClinicError::Validation(format!(
                "Operating window ends ({end}) before it starts ({start})"
            )));
        }

        Ok(Self {
            start: start.minutes(),
            end: end.minutes(),
            granularity: granularity_minutes,
        })
    }

    pub fn start(&self) -> TimeSlot {
        TimeSlot::from_minutes(self.start)
    }

    pub fn end(&self) -> TimeSlot {
        TimeSlot::from_minutes(self.end)
    }

    pub fn granularity_minutes(&self) -> u32 {
        self.granularity
    }

    /// Every slot of the day in ascending order, both bounds included when
    /// they fall on the step.
    pub fn grid(&self) -> Vec<TimeSlot> {
        let mut slots = Vec::new();
        let mut current = self.start;
        while current <= self.end {
            slots.push(TimeSlot::from_minutes(current));
            match current.checked_add(self.granularity) {
                Some(next) => current = next,
                None => break,
            }
        }
        slots
    }

    /// Whether `slot` is one of the grid's slots.
    pub fn contains(&self, slot: &TimeSlot) -> bool {
        let minutes = slot.minutes();
        (self.start..=self.end).contains(&minutes) && (minutes - self.start) % self.granularity == 0
    }
}

impl Default for OperatingWindow {
    /// 09:00 to 17:00 in 15 minute steps.
    fn default() -> Self {
        Self {
            start: 9 * 60,
            end: 17 * 60,
            granularity: Self::DEFAULT_GRANULARITY_MINUTES,
        }
    }
}

/// Times already reserved for one doctor on one date.
///
/// Entries are the raw strings returned by the API. They are not required to
/// be on the grid or to be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookedTimeSet(HashSet<String>);

impl BookedTimeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the times still held by `appointments`. Cancelled rows free
    /// their slot.
    pub fn from_appointments<'a>(appointments: impl IntoIterator<Item = &'a Appointment>) -> Self {
        appointments
            .into_iter()
            .filter(|appointment| appointment.is_active())
            .map(|appointment| appointment.time.clone())
            .collect()
    }

    pub fn contains(&self, time: &str) -> bool {
        self.0.contains(time)
    }

    /// Number of distinct booked strings.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for BookedTimeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        BookedTimeSet(iter.into_iter().map(Into::into).collect())
    }
}

/// Remove booked times from `grid`, keeping the grid's order.
///
/// Membership is exact string equality, so a booked `"09:05"` never hides
/// the `"09:00"` slot.
pub fn free_slots(grid: &[TimeSlot], booked: &BookedTimeSet) -> Vec<TimeSlot> {
    grid.iter()
        .filter(|slot| !booked.contains(slot.as_str()))
        .cloned()
        .collect()
}
