//! Daeun (대운, ten-year luck pillars) stepped from the month pillar.
//!
//! Direction is reverse for a yang-year male or a yin-year female. Every
//! period starts at age `(i-1)*10 + 1`; there is no solar-term based start
//! age.

use serde::Serialize;

use crate::chart::Chart;
use crate::ganzhi::{Cheongan, Ganji, Jiji};
use crate::ohang::{Eumyang, Ohang};
use jakmyeong_time::Gender;

/// Number of luck periods produced.
pub const DAEUN_PERIODS: usize = 10;

/// Years per period.
pub const DAEUN_SPAN: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DaeunDirection {
    Forward,
    Reverse,
}

impl DaeunDirection {
    pub const fn for_chart(gender: Gender, year_polarity: Eumyang) -> Self {
        match (gender, year_polarity) {
            (Gender::Male, Eumyang::Yang) | (Gender::Female, Eumyang::Eum) => Self::Reverse,
            _ => Self::Forward,
        }
    }

    const fn sign(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Reverse => -1,
        }
    }
}

/// One ten-year luck period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DaeunPeriod {
    /// 1-based.
    pub order: u8,
    pub start_age: u8,
    pub end_age: u8,
    pub stem: Cheongan,
    pub branch: Jiji,
    pub stem_element: Ohang,
    pub branch_element: Ohang,
}

impl DaeunPeriod {
    pub const fn ganji(&self) -> Ganji {
        Ganji::new(self.stem, self.branch)
    }

    /// Age range label, e.g. "11~20세".
    pub fn age_label(&self) -> String {
        format!("{}~{}세", self.start_age, self.end_age)
    }
}

/// Luck direction and the ten periods for a chart.
pub fn daeun(chart: &Chart) -> (DaeunDirection, [DaeunPeriod; DAEUN_PERIODS]) {
    let direction = DaeunDirection::for_chart(chart.gender, chart.year.polarity);
    let month = chart.month.ganji();
    let periods = std::array::from_fn(|k| {
        let order = k as u8 + 1;
        let g = month.shifted(direction.sign() * order as i32);
        let start_age = (order - 1) * DAEUN_SPAN + 1;
        DaeunPeriod {
            order,
            start_age,
            end_age: start_age + DAEUN_SPAN - 1,
            stem: g.stem,
            branch: g.branch,
            stem_element: g.stem.element(),
            branch_element: g.branch.element(),
        }
    });
    (direction, periods)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::compute_chart;

    #[test]
    fn yang_year_male_runs_reverse() {
        // 1990 = 경오, 경 is yang; month 을묘
        let chart = compute_chart("1990-03-15", 10, None, Gender::Male).unwrap();
        let (dir, periods) = daeun(&chart);
        assert_eq!(dir, DaeunDirection::Reverse);
        assert_eq!(periods[0].ganji().name(), "갑인");
        assert_eq!(periods[1].ganji().name(), "계축");
        assert_eq!(periods[0].age_label(), "1~10세");
        assert_eq!(periods[9].start_age, 91);
        assert_eq!(periods[9].end_age, 100);
    }

    #[test]
    fn yang_year_female_runs_forward() {
        let chart = compute_chart("1990-03-15", 10, None, Gender::Female).unwrap();
        let (dir, periods) = daeun(&chart);
        assert_eq!(dir, DaeunDirection::Forward);
        assert_eq!(periods[0].ganji().name(), "병진");
    }

    #[test]
    fn direction_table() {
        assert_eq!(
            DaeunDirection::for_chart(Gender::Female, Eumyang::Eum),
            DaeunDirection::Reverse
        );
        assert_eq!(
            DaeunDirection::for_chart(Gender::Male, Eumyang::Eum),
            DaeunDirection::Forward
        );
    }
}
