//! Structural analysis: element histogram, ten-gods, day-stem strength and
//! branch relations.

use serde::Serialize;

use crate::chart::Chart;
use crate::ohang::ElementCounts;
use crate::relations::{BranchRelations, find_branch_relations};
use crate::sipseong::{PillarTenGods, TenGodCounts, chart_ten_gods};

/// Strength of the day stem from help vs drain ten-god counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStemStrength {
    Weak,
    Balanced,
    Strong,
}

impl DayStemStrength {
    /// Weak if help < drain, strong if help > drain, else balanced.
    pub fn classify(help: u8, drain: u8) -> Self {
        match help.cmp(&drain) {
            std::cmp::Ordering::Less => Self::Weak,
            std::cmp::Ordering::Equal => Self::Balanced,
            std::cmp::Ordering::Greater => Self::Strong,
        }
    }

    /// Korean label (신약 / 중화 / 신강).
    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::Weak => "신약",
            Self::Balanced => "중화",
            Self::Strong => "신강",
        }
    }
}

/// Output of [`analyze_structure`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureAnalysis {
    pub element_counts: ElementCounts,
    pub day_stem_strength: DayStemStrength,
    /// Per pillar, year → hour.
    pub ten_gods: [PillarTenGods; 4],
    pub ten_god_counts: TenGodCounts,
    pub branch_relations: BranchRelations,
}

/// Analyze a chart's structure.
pub fn analyze_structure(chart: &Chart) -> StructureAnalysis {
    let (ten_gods, ten_god_counts) = chart_ten_gods(chart);
    let day_stem_strength =
        DayStemStrength::classify(ten_god_counts.help(), ten_god_counts.drain());
    let branch_relations = find_branch_relations(&chart.branches());

    StructureAnalysis {
        element_counts: chart.element_counts,
        day_stem_strength,
        ten_gods,
        ten_god_counts,
        branch_relations,
    }
}
