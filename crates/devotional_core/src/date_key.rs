//! Calendar date conversions: the year-independent day key that joins a date
//! to its entry, and the `YYYY-MM-DD` text used by the date picker.
//!
//! All conversions work on [`NaiveDate`], which carries calendar fields only,
//! so no timezone offset can move a date across midnight.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DateKeyError;

/// Leap year used to validate month-day pairs so that `0229` is accepted.
const REFERENCE_LEAP_YEAR: i32 = 2000;

/// Four-digit `MMDD` identifier shared by every year's occurrence of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey {
    month: u32,
    day: u32,
}

impl DayKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    pub fn new(month: u32, day: u32) -> Result<Self, DateKeyError> {
        if NaiveDate::from_ymd_opt(REFERENCE_LEAP_YEAR, month, day).is_none() {
            return Err(DateKeyError::InvalidKey(format!("{month:02}{day:02}")));
        }
        Ok(Self { month, day })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.month, self.day)
    }
}

impl FromStr for DayKey {
    type Err = DateKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DateKeyError::InvalidKey(s.to_string());
        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let month = s[..2].parse::<u32>().map_err(|_| invalid())?;
        let day = s[2..].parse::<u32>().map_err(|_| invalid())?;
        Self::new(month, day).map_err(|_| invalid())
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Renders `date` the way the picker displays it.
pub fn to_picker_text(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Parses picker text by splitting its three numeric components and building
/// the calendar date from them directly.
pub fn from_picker_text(text: &str) -> Result<NaiveDate, DateKeyError> {
    let trimmed = text.trim();
    let malformed = || DateKeyError::Malformed(trimmed.to_string());

    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let mut parts = rest.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };
    if [year, month, day]
        .iter()
        .any(|part| part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(malformed());
    }

    let year = year.parse::<i32>().map_err(|_| malformed())?;
    let year = if negative { -year } else { year };
    let month = month.parse::<u32>().map_err(|_| malformed())?;
    let day = day.parse::<u32>().map_err(|_| malformed())?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DateKeyError::OutOfRange(trimmed.to_string()))
}
