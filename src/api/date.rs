//! Calendar dates and month tokens
//!
//! Dates travel as `YYYY-MM-DD`. Month-scoped endpoints additionally accept
//! the literal `current` in place of a date, modelled by [`MonthRef`].

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Wire format of a date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Path token the API resolves to the current budget month
pub const CURRENT_MONTH: &str = "current";

/// A calendar date without a time component
///
/// `Date::default()` is the zero date (`0001-01-01`), which never
/// represents a real budget date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Build a date from its parts, `None` if it does not exist
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse a `YYYY-MM-DD` string
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        NaiveDate::parse_from_str(s, DATE_FORMAT).map(Self)
    }

    /// Today's date in UTC
    pub fn today() -> Self {
        Self(chrono::Utc::now().date_naive())
    }

    /// Whether this is the zero date
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl Default for Date {
    fn default() -> Self {
        Self(NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for Date {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Month addressed by a month-scoped endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthRef {
    /// An explicit month, identified by any date within it
    Date(Date),
    /// Whatever month the server considers current
    Current,
}

impl MonthRef {
    /// The URL path segment for this month
    pub fn as_path_segment(&self) -> String {
        match self {
            MonthRef::Date(date) => date.to_string(),
            MonthRef::Current => CURRENT_MONTH.to_string(),
        }
    }
}

impl From<Date> for MonthRef {
    fn from(date: Date) -> Self {
        MonthRef::Date(date)
    }
}

impl fmt::Display for MonthRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_path_segment())
    }
}
