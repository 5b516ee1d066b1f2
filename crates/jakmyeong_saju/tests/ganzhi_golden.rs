//! Golden values for pillar derivation.
//!
//! Expected values were worked by hand from the JDN formula and the
//! five-tigers / five-rats tables.

use jakmyeong_saju::{
    Cheongan, Jiji, Ohang, PillarPosition, analyze_structure, chart_for, compute_chart, daeun,
    day_cycle_index, day_ganji, hour_ganji, month_ganji, resolve_needs, year_ganji,
};
use jakmyeong_time::{BirthMoment, CivilDate, Gender, gregorian_to_jdn};

fn date(s: &str) -> CivilDate {
    s.parse().unwrap()
}

// ---------------------------------------------------------------------------
// Day pillar
// ---------------------------------------------------------------------------

#[test]
fn anchor_1900_01_01() {
    assert_eq!(gregorian_to_jdn(1900, 1, 1), 2_415_021);
    let g = day_ganji(&date("1900-01-01"));
    assert_eq!(g.cycle_index(), Some(36));
    assert_eq!(g.stem, Cheongan::Gyeong);
    assert_eq!(g.stem.element(), Ohang::Geum);
    assert_eq!(g.branch, Jiji::Ja);
    assert_eq!(g.branch.element(), Ohang::Su);
}

#[test]
fn known_days() {
    // (date, jdn, expected day pillar)
    let cases = [
        ("1990-03-15", 2_447_966, "을사"),
        ("2000-01-01", 2_451_545, "갑신"),
        ("1900-03-01", 2_415_080, "기해"),
    ];
    for (d, jdn, name) in cases {
        let cd = date(d);
        assert_eq!(cd.jdn(), jdn, "jdn {d}");
        assert_eq!(day_ganji(&cd).name(), name, "day pillar {d}");
    }
}

#[test]
fn sixty_day_periodicity() {
    let mut d = date("1899-12-01");
    for _ in 0..400 {
        assert_eq!(day_ganji(&d), day_ganji(&d.add_days(60)), "at {d}");
        d = d.add_days(97);
    }
}

#[test]
fn consecutive_days_step_by_one() {
    let mut d = date("2023-12-25");
    for _ in 0..800 {
        let next = d.add_days(1);
        assert_eq!(
            day_cycle_index(next.jdn()),
            (day_cycle_index(d.jdn()) + 1) % 60,
            "{d} -> {next}"
        );
        d = next;
    }
}

// ---------------------------------------------------------------------------
// Year / month / hour pillars
// ---------------------------------------------------------------------------

#[test]
fn known_years() {
    for (y, name) in [
        (1864, "갑자"),
        (1900, "경자"),
        (1984, "갑자"),
        (1990, "경오"),
        (2024, "갑진"),
        (1800, "경신"),
    ] {
        assert_eq!(year_ganji(y).name(), name, "year {y}");
    }
}

#[test]
fn sixty_year_periodicity() {
    for y in 1700..2100 {
        assert_eq!(year_ganji(y), year_ganji(y + 60), "year {y}");
    }
}

#[test]
fn month_pillars_for_gyeong_year() {
    // 경 year: five-tigers start 8
    let expected = [
        (1, "계축"),
        (2, "갑인"),
        (3, "을묘"),
        (11, "계해"),
        (12, "임자"),
    ];
    for (m, name) in expected {
        assert_eq!(month_ganji(Cheongan::Gyeong, m).name(), name, "month {m}");
    }
}

#[test]
fn hour_boundaries() {
    for stem in jakmyeong_saju::ALL_CHEONGAN {
        assert_eq!(hour_ganji(stem, 23), hour_ganji(stem, 0));
        assert_eq!(hour_ganji(stem, 1), hour_ganji(stem, 2));
        assert_eq!(hour_ganji(stem, 1).branch, Jiji::Chuk);
        assert_ne!(hour_ganji(stem, 2), hour_ganji(stem, 3));
    }
}

// ---------------------------------------------------------------------------
// Full chart
// ---------------------------------------------------------------------------

#[test]
fn chart_1990_03_15_10h_male() {
    let c = compute_chart("1990-03-15", 10, Some(0), Gender::Male).unwrap();
    assert_eq!(c.year.ganji().name(), "경오");
    assert_eq!(c.month.ganji().name(), "을묘");
    assert_eq!(c.day.ganji().name(), "을사");
    assert_eq!(c.hour.ganji().name(), "신사");
    assert_eq!(c.day_stem_element, Ohang::Mok);
    assert_eq!(c.hour.position, PillarPosition::Hour);

    let counts = c.element_counts;
    assert_eq!(counts.get(Ohang::Mok), 3);
    assert_eq!(counts.get(Ohang::Hwa), 3);
    assert_eq!(counts.get(Ohang::To), 0);
    assert_eq!(counts.get(Ohang::Geum), 2);
    assert_eq!(counts.get(Ohang::Su), 0);
    assert_eq!(c.element_percentages(), [38, 38, 0, 25, 0]);
}

#[test]
fn histogram_always_sums_to_eight() {
    let mut d = date("1950-01-01");
    for i in 0..300u32 {
        let hour = (i % 24) as u8;
        let c = compute_chart(&d.to_string(), hour, None, Gender::Female).unwrap();
        assert_eq!(c.element_counts.total(), 8, "{d} {hour}");
        d = d.add_days(93);
    }
}

#[test]
fn extreme_years_still_chart() {
    for (year, year_pillar) in [(i32::MIN, "임자"), (i32::MAX, "정묘")] {
        for month in [1, 12] {
            let birth = BirthMoment::new(CivilDate::new(year, month, 1).unwrap(), 0, None).unwrap();
            let c = chart_for(birth, Gender::Male);
            assert_eq!(c.year.ganji().name(), year_pillar, "{birth}");
            assert_eq!(c.element_counts.total(), 8);
            let needs = resolve_needs(&c, &analyze_structure(&c));
            assert!(!needs.required.is_empty());
            assert_eq!(daeun(&c).1.len(), 10);
        }
    }
}
