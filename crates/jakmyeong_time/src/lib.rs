//! Calendar primitives for the saju engine.
//!
//! This crate provides:
//! - Gregorian date parsing and validation (`CivilDate`)
//! - Gregorian → Julian Day Number conversion
//! - Validated birth input (`BirthMoment`, `Gender`)

pub mod birth;
pub mod civil;
pub mod error;
pub mod julian;

pub use birth::{BirthMoment, Gender};
pub use civil::{CivilDate, days_in_month, is_leap_year};
pub use error::TimeError;
pub use julian::{JDN_1900_01_01, gregorian_to_jdn};
