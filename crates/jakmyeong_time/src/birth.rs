//! Validated birth input: date, hour, optional minute, and gender.

use std::str::FromStr;

use serde::Serialize;

use crate::civil::CivilDate;
use crate::error::TimeError;

/// Gender of the chart subject, also the requested gender of a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// The other gender.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Male => Self::Female,
            Self::Female => Self::Male,
        }
    }

    /// Korean label (남 / 여).
    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::Male => "남",
            Self::Female => "여",
        }
    }
}

impl FromStr for Gender {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "남" | "남자" => Ok(Self::Male),
            "female" | "f" | "여" | "여자" => Ok(Self::Female),
            other => Err(TimeError::UnknownGender(other.to_string())),
        }
    }
}

/// A birth date with hour and optional minute.
///
/// The minute is recorded for reporting only; no pillar depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthMoment {
    pub date: CivilDate,
    pub hour: u8,
    pub minute: Option<u8>,
}

impl BirthMoment {
    /// Validate hour (0..=23) and minute (0..=59, if given).
    pub fn new(date: CivilDate, hour: u8, minute: Option<u8>) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::HourOutOfRange(hour));
        }
        if let Some(m) = minute {
            if m > 59 {
                return Err(TimeError::MinuteOutOfRange(m));
            }
        }
        Ok(Self { date, hour, minute })
    }

    /// Parse the date string, then validate as [`BirthMoment::new`].
    pub fn parse(date: &str, hour: u8, minute: Option<u8>) -> Result<Self, TimeError> {
        Self::new(date.parse()?, hour, minute)
    }
}

impl std::fmt::Display for BirthMoment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:02}:{:02}",
            self.date,
            self.hour,
            self.minute.unwrap_or(0)
        )
    }
}
