//! Needed-element (용신) resolution.
//!
//! Two exclusive strategies:
//! - weak day stem: support the day stem (its element and the element that
//!   produces it) and penalize everything that drains or controls it;
//! - balanced / strong: fill the histogram's gaps, repair clash damage, and
//!   correct ten-god imbalances.
//!
//! `required` is never empty.

use serde::Serialize;

use crate::chart::Chart;
use crate::ohang::{Ohang, OhangSet};
use crate::structure::{DayStemStrength, StructureAnalysis};

/// Which analysis contributed to the required set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NeedReason {
    /// Weak day stem; strength signal overrides counting.
    DayStemWeak,
    /// Least-frequent element(s) in the histogram.
    ElementRatio,
    /// Elements damaged by branch clashes or heavy conflict.
    BranchRelations,
    /// Ten-god imbalance heuristic.
    TenGods,
    /// Nothing fired; all five elements are acceptable.
    Fallback,
}

impl NeedReason {
    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::DayStemWeak => "일간 신약",
            Self::ElementRatio => "오행 비율",
            Self::BranchRelations => "합충형파해",
            Self::TenGods => "십성 균형",
            Self::Fallback => "균형",
        }
    }
}

/// Elements a name should supply or avoid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementNeedProfile {
    /// Non-empty.
    pub required: OhangSet,
    /// Only populated for a weak day stem.
    pub penalized: OhangSet,
    /// Second-least-frequent elements not already required. Advisory.
    pub supplement_good: OhangSet,
    /// Most-frequent elements when strictly above the minimum. Advisory.
    pub excess: OhangSet,
    pub reasons: Vec<NeedReason>,
}

impl ElementNeedProfile {
    /// A profile requiring exactly `required`, with nothing penalized.
    pub fn requiring(required: OhangSet) -> Self {
        let required = if required.is_empty() {
            OhangSet::ALL
        } else {
            required
        };
        Self {
            required,
            penalized: OhangSet::EMPTY,
            supplement_good: OhangSet::EMPTY,
            excess: OhangSet::EMPTY,
            reasons: Vec::new(),
        }
    }

    pub fn is_required(&self, o: Ohang) -> bool {
        self.required.contains(o)
    }

    pub fn is_penalized(&self, o: Ohang) -> bool {
        self.penalized.contains(o)
    }
}

/// Determine needed and penalized elements for a chart.
pub fn resolve_needs(chart: &Chart, structure: &StructureAnalysis) -> ElementNeedProfile {
    let counts = &structure.element_counts;
    let day = chart.day_stem_element;

    let excess = if counts.max() > counts.min() {
        counts.most()
    } else {
        OhangSet::EMPTY
    };

    let (required, penalized, reasons) = if structure.day_stem_strength == DayStemStrength::Weak {
        let required: OhangSet = [day.generated_by(), day].into_iter().collect();
        let penalized: OhangSet = [day.overcome_by(), day.generates(), day.overcomes()]
            .into_iter()
            .collect();
        (required, penalized, vec![NeedReason::DayStemWeak])
    } else {
        let mut reasons = Vec::new();

        let mut required = counts.least();
        if !required.is_empty() {
            reasons.push(NeedReason::ElementRatio);
        }

        let damaged = structure.branch_relations.damaged;
        if !damaged.is_empty() {
            required = required.union(damaged);
            reasons.push(NeedReason::BranchRelations);
        }

        let tg = &structure.ten_god_counts;
        let help = tg.help();
        let mut from_ten_gods = OhangSet::EMPTY;
        if tg.authority > help && tg.output < tg.authority {
            from_ten_gods.insert(day.generates());
        }
        if help < 2 && tg.wealth + tg.authority > help {
            from_ten_gods.insert(day);
            from_ten_gods.insert(day.generated_by());
        }
        if !from_ten_gods.is_empty() {
            required = required.union(from_ten_gods);
            reasons.push(NeedReason::TenGods);
        }

        if required.is_empty() {
            required = OhangSet::ALL;
            reasons.push(NeedReason::Fallback);
        }
        (required, OhangSet::EMPTY, reasons)
    };

    ElementNeedProfile {
        required,
        penalized,
        supplement_good: counts.second_least().difference(required),
        excess,
        reasons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::compute_chart;
    use crate::structure::analyze_structure;
    use jakmyeong_time::Gender;

    #[test]
    fn weak_day_stem_strategy() {
        // 을사 day (wood), help 3 < drain 5
        let chart = compute_chart("1990-03-15", 10, None, Gender::Male).unwrap();
        let s = analyze_structure(&chart);
        assert_eq!(s.day_stem_strength, DayStemStrength::Weak);
        let n = resolve_needs(&chart, &s);
        assert_eq!(
            n.required.iter().collect::<Vec<_>>(),
            vec![Ohang::Mok, Ohang::Su]
        );
        assert_eq!(
            n.penalized.iter().collect::<Vec<_>>(),
            vec![Ohang::Hwa, Ohang::To, Ohang::Geum]
        );
        assert_eq!(n.reasons, vec![NeedReason::DayStemWeak]);
    }

    #[test]
    fn required_never_empty_across_many_charts() {
        for year in [1950, 1967, 1984, 1999, 2013, 2024] {
            for month in 1..=12 {
                for hour in [0, 5, 11, 17, 23] {
                    let date = format!("{year}-{month:02}-15");
                    let chart = compute_chart(&date, hour, None, Gender::Female).unwrap();
                    let s = analyze_structure(&chart);
                    let n = resolve_needs(&chart, &s);
                    assert!(!n.required.is_empty(), "{date} {hour}");
                    assert!(n.supplement_good.difference(n.required) == n.supplement_good);
                    if s.day_stem_strength != DayStemStrength::Weak {
                        assert!(n.penalized.is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn requiring_empty_falls_back_to_all() {
        assert_eq!(ElementNeedProfile::requiring(OhangSet::EMPTY).required, OhangSet::ALL);
    }
}
