use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ClinicError, ClinicResult};

/// A bookable time of day, always rendered as zero-padded `HH:MM`.
///
/// Because the representation is fixed-width, ordering by the string is
/// the same as ordering by time of day, so `Ord` is derived on the text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(String);

impl TimeSlot {
    /// Build a slot from minutes since midnight.
    pub(crate) fn from_minutes(minutes: u32) -> Self {
        TimeSlot(format!("{:02}:{:02}", minutes / 60, minutes % 60))
    }

    /// Build a slot from an hour and minute pair.
    pub fn from_hm(hour: u32, minute: u32) -> ClinicResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(ClinicError::Validation(format!(
                "{hour}:{minute} is not a valid time of day"
            )));
        }
        Ok(Self::from_minutes(hour * 60 + minute))
    }

    /// Parse a strict `HH:MM` string.
    pub fn parse(value: &str) -> ClinicResult<Self> {
        parse_hhmm(value)
            .map(|(hour, minute)| Self::from_minutes(hour * 60 + minute))
            .ok_or_else(|| {
                ClinicError::Validation(format!("'{value}' is not a time in HH:MM format"))
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u32 {
        // The text is validated on construction.
        parse_hhmm(&self.0)
            .map(|(hour, minute)| hour * 60 + minute)
            .unwrap_or_default()
    }
}

fn parse_hhmm(value: &str) -> Option<(u32, u32)> {
    let (hour, minute) = value.split_once(':')?;
    if hour.len() != 2 || minute.len() != 2 {
        return None;
    }
    if !hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    (hour < 24 && minute < 60).then_some((hour, minute))
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TimeSlot {
    type Err = ClinicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = ClinicError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.0
    }
}

impl AsRef<str> for TimeSlot {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
