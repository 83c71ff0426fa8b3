//! Build date shared by every artifact of a run.

use chrono::{Local, NaiveDate};
use std::fmt;

/// Calendar date a bundle is built on, rendered as `YYYYMMDD`.
///
/// Resolved exactly once per run and threaded through default naming and the
/// release-notes header so the artifacts never disagree about the date.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BuildDate(NaiveDate);

impl BuildDate {
    /// Today's date in the local time zone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// A fixed date, for reproducible runs and tests.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parses a `YYYYMMDD` string.
    pub fn parse(s: &str) -> Option<Self> {
        NaiveDate::parse_from_str(s, "%Y%m%d").ok().map(Self)
    }
}

impl fmt::Display for BuildDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y%m%d"))
    }
}
