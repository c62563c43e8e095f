//! Time-of-day parsing and 12-hour display.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// A wall-clock time without date, stored as 24-hour `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self, ValidationError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidTime(format!("{hour}:{minute:02}")))
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// 24-hour form, e.g. `07:05`.
    pub fn to_24h(&self) -> String {
        self.0.format("%H:%M").to_string()
    }

    /// 12-hour form, e.g. `7:05 AM`.
    pub fn to_12h(&self) -> String {
        let (pm, hour) = self.0.hour12();
        format!("{hour}:{:02} {}", self.minute(), if pm { "PM" } else { "AM" })
    }
}

impl FromStr for ClockTime {
    type Err = ValidationError;

    /// Accepts `HH:MM` (24-hour) and `H:MM AM`/`H:MM PM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let upper = trimmed.to_ascii_uppercase();
        NaiveTime::parse_from_str(&upper, "%I:%M %p")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
            .map(Self)
            .map_err(|_| ValidationError::InvalidTime(s.to_string()))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_12h())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_24h())
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
