//! Gregorian calendar → Julian Day Number.
//!
//! Integer JDN (the Julian Date at noon of the civil day), using the
//! Meeus-style formula with the century leap correction term.

/// Julian Day Number of 1900-01-01, the sexagenary day-cycle anchor.
pub const JDN_1900_01_01: i64 = 2_415_021;

/// Convert a Gregorian calendar date to its Julian Day Number.
///
/// January and February are treated as months 13 and 14 of the previous
/// year. `B = 2 - A + floor(A / 4)` is the Gregorian century correction.
pub fn gregorian_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let (y, m) = if month <= 2 {
        (year as i64 - 1, month as i64 + 12)
    } else {
        (year as i64, month as i64)
    };
    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);
    // floor(365.25 * (y + 4716)) in exact integer arithmetic
    let year_days = (1461 * (y + 4716)).div_euclid(4);
    // floor(30.6001 * (m + 1))
    let month_days = (306_001 * (m + 1)).div_euclid(10_000);
    year_days + month_days + day as i64 + b - 1524
}
