//! Golden Julian Day Numbers and civil-date arithmetic.

use jakmyeong_time::{BirthMoment, CivilDate, JDN_1900_01_01, TimeError, gregorian_to_jdn};

fn date(s: &str) -> CivilDate {
    s.parse().unwrap()
}

#[test]
fn known_julian_day_numbers() {
    // Gregorian reform day
    assert_eq!(gregorian_to_jdn(1582, 10, 15), 2_299_161);
    // Unix epoch
    assert_eq!(gregorian_to_jdn(1970, 1, 1), 2_440_588);
    assert_eq!(gregorian_to_jdn(2000, 1, 1), 2_451_545);
    assert_eq!(gregorian_to_jdn(2024, 2, 29), 2_460_370);
    assert_eq!(date("1900-01-01").jdn(), JDN_1900_01_01);
}

#[test]
fn add_days_crosses_month_and_leap_boundaries() {
    assert_eq!(date("2024-02-28").add_days(1), date("2024-02-29"));
    assert_eq!(date("2024-02-28").add_days(2), date("2024-03-01"));
    assert_eq!(date("1900-02-28").add_days(1), date("1900-03-01"));
    assert_eq!(date("1999-12-31").add_days(1), date("2000-01-01"));
    assert_eq!(date("2000-01-01").add_days(-1), date("1999-12-31"));
}

#[test]
fn add_days_inverts_jdn() {
    let base = date("1990-03-15");
    for offset in [-40_000_i64, -366, -1, 0, 1, 59, 60, 365, 36_525] {
        let d = base.add_days(offset);
        assert_eq!(d.jdn() - base.jdn(), offset, "{d}");
    }
}

#[test]
fn rejects_impossible_dates() {
    for s in [
        "1900-02-29",
        "2023-02-29",
        "2024-13-01",
        "2024-04-31",
        "2024-00-10",
        "2024-1",
        "x-1-1",
    ] {
        assert!(
            matches!(s.parse::<CivilDate>(), Err(TimeError::InvalidDate(_))),
            "{s}"
        );
    }
    assert!("2000-02-29".parse::<CivilDate>().is_ok());
}

#[test]
fn birth_moment_validation_and_display() {
    let b = BirthMoment::parse("1990-03-15", 10, Some(5)).unwrap();
    assert_eq!(b.to_string(), "1990-03-15 10:05");
    assert_eq!(
        BirthMoment::parse("1990-03-15", 24, None),
        Err(TimeError::HourOutOfRange(24))
    );
    assert_eq!(
        BirthMoment::parse("1990-03-15", 23, Some(60)),
        Err(TimeError::MinuteOutOfRange(60))
    );
    assert_eq!(
        BirthMoment::parse("1990-03-15", 0, None).unwrap().to_string(),
        "1990-03-15 00:00"
    );
}
