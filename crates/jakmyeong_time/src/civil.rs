//! Gregorian civil date with validation.

use std::str::FromStr;

use serde::Serialize;

use crate::error::TimeError;
use crate::julian::gregorian_to_jdn;

/// A validated proleptic Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`. Returns 0 for an invalid month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

impl CivilDate {
    /// Build a date, rejecting months outside 1..=12 and days that do not exist.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate(format!(
                "month {month} outside 1..=12"
            )));
        }
        let max_day = days_in_month(year, month);
        if day == 0 || day > max_day {
            return Err(TimeError::InvalidDate(format!(
                "day {day} outside 1..={max_day} for {year:04}-{month:02}"
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Julian Day Number of this date.
    pub fn jdn(&self) -> i64 {
        gregorian_to_jdn(self.year, self.month, self.day)
    }

    /// The date `days` days later (or earlier, if negative).
    pub fn add_days(&self, days: i64) -> Self {
        from_jdn(self.jdn() + days)
    }
}

/// Inverse of [`gregorian_to_jdn`] (Fliegel–Van Flandern).
fn from_jdn(jdn: i64) -> CivilDate {
    let l = jdn + 68_569;
    let n = (4 * l).div_euclid(146_097);
    let l = l - (146_097 * n + 3).div_euclid(4);
    let i = (4000 * (l + 1)).div_euclid(1_461_001);
    let l = l - (1461 * i).div_euclid(4) + 31;
    let j = (80 * l).div_euclid(2447);
    let day = l - (2447 * j).div_euclid(80);
    let l = j.div_euclid(11);
    let month = j + 2 - 12 * l;
    let year = 100 * (n - 49) + i + l;
    CivilDate {
        year: year as i32,
        month: month as u32,
        day: day as u32,
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 3 {
            return Err(TimeError::InvalidDate(format!(
                "expected YYYY-MM-DD, got '{s}'"
            )));
        }
        let parse = |field: &str, what: &str| -> Result<i64, TimeError> {
            field
                .parse::<i64>()
                .map_err(|_| TimeError::InvalidDate(format!("bad {what} '{field}' in '{s}'")))
        };
        let year = parse(parts[0], "year")?;
        let month = parse(parts[1], "month")?;
        let day = parse(parts[2], "day")?;
        let year = i32::try_from(year)
            .map_err(|_| TimeError::InvalidDate(format!("year {year} out of range")))?;
        let month = u32::try_from(month)
            .map_err(|_| TimeError::InvalidDate(format!("month {month} out of range")))?;
        let day = u32::try_from(day)
            .map_err(|_| TimeError::InvalidDate(format!("day {day} out of range")))?;
        Self::new(year, month, day)
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
