//! Four-pillar (saju) chart computation from a Gregorian birth moment.
//!
//! - Day pillar: Julian Day Number offset from the 1900-01-01 anchor, which
//!   sits at sexagenary index 36 (경자).
//! - Year pillar: `(year - 1864) mod 60`. The Gregorian year is used as-is;
//!   there is no Lichun (입춘) cutoff.
//! - Month pillar: branch fixed by calendar month, stem by the five-tigers
//!   (오호둔) table keyed on the year stem. No solar-term boundaries.
//! - Hour pillar: two-hour blocks with 23:00 folding into 자, stem by the
//!   five-rats (오서둔) table keyed on the day stem.

use serde::Serialize;
use tracing::trace;

use jakmyeong_time::{BirthMoment, CivilDate, Gender, JDN_1900_01_01};

use crate::error::SajuError;
use crate::ganzhi::{Cheongan, Ganji, Jiji};
use crate::ohang::{ElementCounts, Eumyang, Ohang};
use crate::pillar::{Pillar, PillarPosition};

/// Sexagenary index of the day pillar on 1900-01-01.
pub const DAY_CYCLE_ANCHOR_INDEX: i64 = 36;

/// Year whose pillar is 갑자 (index 0).
pub const YEAR_CYCLE_EPOCH: i32 = 1864;

/// Calendar month (1..=12, as index 0..=11) → branch index. 1월 = 축.
const MONTH_BRANCH: [u8; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0];

/// Five tigers: year stem index → starting month stem.
const MONTH_STEM_START: [u8; 10] = [2, 2, 4, 4, 6, 6, 8, 8, 0, 0];

/// Five rats: day stem index mod 5 → starting hour stem.
const HOUR_STEM_START: [u8; 5] = [0, 2, 4, 6, 8];

/// Sexagenary day index (0..59) for a Julian Day Number.
pub fn day_cycle_index(jdn: i64) -> u8 {
    (DAY_CYCLE_ANCHOR_INDEX + (jdn - JDN_1900_01_01)).rem_euclid(60) as u8
}

/// Day pillar stem/branch for a date.
pub fn day_ganji(date: &CivilDate) -> Ganji {
    Ganji::from_cycle_index(day_cycle_index(date.jdn()))
}

/// Year pillar stem/branch for a Gregorian year.
pub fn year_ganji(year: i32) -> Ganji {
    Ganji::from_cycle_index((year as i64 - YEAR_CYCLE_EPOCH as i64).rem_euclid(60) as u8)
}

/// Month branch index for a calendar month (1..=12).
pub fn month_branch(month: u32) -> Jiji {
    let slot = (month as i64 - 1).rem_euclid(12) as usize;
    Jiji::from_index(MONTH_BRANCH[slot])
}

/// Month pillar stem/branch from the year stem and calendar month.
pub fn month_ganji(year_stem: Cheongan, month: u32) -> Ganji {
    let branch = month_branch(month);
    let start = MONTH_STEM_START[year_stem.index() as usize];
    Ganji::new(Cheongan::from_index(start + branch.index()), branch)
}

/// Hour branch: 23 and 0 → 자, otherwise `floor((hour + 1) / 2)`.
pub fn hour_branch(hour: u8) -> Jiji {
    if hour == 23 || hour == 0 {
        Jiji::Ja
    } else {
        Jiji::from_index((hour + 1) / 2)
    }
}

/// Hour pillar stem/branch from the day stem and hour (0..=23).
pub fn hour_ganji(day_stem: Cheongan, hour: u8) -> Ganji {
    let branch = hour_branch(hour);
    let start = HOUR_STEM_START[(day_stem.index() % 5) as usize];
    Ganji::new(Cheongan::from_index(start + branch.index()), branch)
}

/// Yang vs yin stem count across the four pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EumyangBalance {
    pub yang: u8,
    pub eum: u8,
}

/// A computed four-pillar chart. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    pub day_stem_element: Ohang,
    /// Stem + branch elements of all four pillars; always sums to 8.
    pub element_counts: ElementCounts,
    pub gender: Gender,
    pub birth: BirthMoment,
}

impl Chart {
    /// Pillars in year, month, day, hour order.
    pub const fn pillars(&self) -> [&Pillar; 4] {
        [&self.year, &self.month, &self.day, &self.hour]
    }

    /// Branches in year, month, day, hour order.
    pub const fn branches(&self) -> [Jiji; 4] {
        [
            self.year.branch,
            self.month.branch,
            self.day.branch,
            self.hour.branch,
        ]
    }

    pub const fn day_stem(&self) -> Cheongan {
        self.day.stem
    }

    /// Yang/yin balance of the four stems.
    pub fn eumyang_balance(&self) -> EumyangBalance {
        let yang = self
            .pillars()
            .iter()
            .filter(|p| p.polarity == Eumyang::Yang)
            .count() as u8;
        EumyangBalance { yang, eum: 4 - yang }
    }

    /// Rounded percentage share per element (목 화 토 금 수).
    pub fn element_percentages(&self) -> [u8; 5] {
        self.element_counts.percentages()
    }
}

/// Build the chart for an already-validated birth moment.
pub fn chart_for(birth: BirthMoment, gender: Gender) -> Chart {
    let date = birth.date;
    let year = Pillar::new(PillarPosition::Year, year_ganji(date.year));
    let month = Pillar::new(PillarPosition::Month, month_ganji(year.stem, date.month));
    let day = Pillar::new(PillarPosition::Day, day_ganji(&date));
    let hour = Pillar::new(PillarPosition::Hour, hour_ganji(day.stem, birth.hour));

    let element_counts =
        ElementCounts::tally([year, month, day, hour].iter().flat_map(|p| p.elements()));

    trace!(
        %birth,
        year = %year.ganji(),
        month = %month.ganji(),
        day = %day.ganji(),
        hour = %hour.ganji(),
        "computed chart"
    );

    Chart {
        year,
        month,
        day,
        hour,
        day_stem_element: day.stem_element,
        element_counts,
        gender,
        birth,
    }
}

/// Compute a chart from a `YYYY-MM-DD` date, hour (0..=23) and optional minute.
///
/// Fails with [`SajuError::InvalidInput`] when the date does not parse or the
/// hour/minute are out of range.
pub fn compute_chart(
    date: &str,
    hour: u8,
    minute: Option<u8>,
    gender: Gender,
) -> Result<Chart, SajuError> {
    let birth = BirthMoment::parse(date, hour, minute)?;
    Ok(chart_for(birth, gender))
}
