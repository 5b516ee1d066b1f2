//! Branch relations (합충형파해) among the four pillar branches.
//!
//! Pair relations fire when both branches are present anywhere in the chart,
//! regardless of position or multiplicity. Each fired relation is one
//! instance for the conflict counter.

use serde::Serialize;

use crate::ganzhi::Jiji;
use crate::ohang::{Ohang, OhangSet};

/// Relation family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchRelationKind {
    /// 육합
    Combination,
    /// 육충
    Clash,
    /// 육파
    Break,
    /// 육해
    Harm,
    /// 삼형 (인사신, 축술미)
    ThreePunishment,
    /// 자묘형
    SubPunishment,
    /// 자형 (진 오 유 해 repeated)
    SelfPunishment,
}

impl BranchRelationKind {
    /// Korean suffix as shown in relation labels.
    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::Combination => "합",
            Self::Clash => "충",
            Self::Break => "파",
            Self::Harm => "해",
            Self::ThreePunishment | Self::SubPunishment => "형",
            Self::SelfPunishment => "자형",
        }
    }
}

/// One detected relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchRelation {
    pub kind: BranchRelationKind,
    /// Branches named by the relation, in table order.
    pub branches: Vec<Jiji>,
    /// Element harmed by a clash.
    pub damaged: Option<Ohang>,
}

impl BranchRelation {
    /// Display label, e.g. "자오 충".
    pub fn label(&self) -> String {
        let names: String = self.branches.iter().map(|b| b.name()).collect();
        format!("{names} {}", self.kind.korean_name())
    }
}

/// All relations found in a chart plus the derived conflict summary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BranchRelations {
    pub relations: Vec<BranchRelation>,
    /// Clash-damaged elements, plus earth when conflicts pile up.
    pub damaged: OhangSet,
    pub conflict_count: u8,
}

impl BranchRelations {
    pub fn of_kind(&self, kind: BranchRelationKind) -> impl Iterator<Item = &BranchRelation> {
        self.relations.iter().filter(move |r| r.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}

/// Conflict count at which earth is added as a mediating element.
pub const EARTH_MEDIATION_THRESHOLD: u8 = 2;

const COMBINATIONS: [(u8, u8); 6] = [(0, 1), (2, 11), (3, 10), (4, 9), (5, 8), (6, 7)];

/// Clash pairs with the element each clash damages.
const CLASHES: [(u8, u8, Ohang); 6] = [
    (0, 6, Ohang::Hwa),  // 자오: water over fire
    (1, 7, Ohang::To),   // 축미
    (2, 8, Ohang::Mok),  // 인신: metal over wood
    (3, 9, Ohang::Mok),  // 묘유
    (4, 10, Ohang::To),  // 진술
    (5, 11, Ohang::Hwa), // 사해
];

const BREAKS: [(u8, u8); 6] = [(0, 9), (2, 11), (4, 1), (6, 3), (8, 5), (10, 7)];

const HARMS: [(u8, u8); 6] = [(0, 7), (1, 6), (2, 5), (3, 4), (8, 11), (9, 10)];

const THREE_PUNISHMENTS: [[u8; 3]; 2] = [[2, 5, 8], [1, 10, 7]];

const SUB_PUNISHMENT: (u8, u8) = (0, 3);

/// Branches that punish themselves when repeated.
const SELF_PUNISHING: [u8; 4] = [4, 6, 9, 11];

fn pair(kind: BranchRelationKind, a: u8, b: u8, damaged: Option<Ohang>) -> BranchRelation {
    BranchRelation {
        kind,
        branches: vec![Jiji::from_index(a), Jiji::from_index(b)],
        damaged,
    }
}

/// Detect every relation among the given branches.
pub fn find_branch_relations(branches: &[Jiji]) -> BranchRelations {
    let present = |i: u8| branches.iter().any(|b| b.index() == i);
    let count = |i: u8| branches.iter().filter(|b| b.index() == i).count();

    let mut relations = Vec::new();

    for &(a, b) in &COMBINATIONS {
        if present(a) && present(b) {
            relations.push(pair(BranchRelationKind::Combination, a, b, None));
        }
    }
    for &(a, b, hurt) in &CLASHES {
        if present(a) && present(b) {
            relations.push(pair(BranchRelationKind::Clash, a, b, Some(hurt)));
        }
    }
    for &(a, b) in &BREAKS {
        if present(a) && present(b) {
            relations.push(pair(BranchRelationKind::Break, a, b, None));
        }
    }
    for &(a, b) in &HARMS {
        if present(a) && present(b) {
            relations.push(pair(BranchRelationKind::Harm, a, b, None));
        }
    }
    for group in &THREE_PUNISHMENTS {
        if group.iter().filter(|&&g| present(g)).count() >= 2 {
            relations.push(BranchRelation {
                kind: BranchRelationKind::ThreePunishment,
                branches: group.iter().map(|&g| Jiji::from_index(g)).collect(),
                damaged: None,
            });
        }
    }
    let (a, b) = SUB_PUNISHMENT;
    if present(a) && present(b) {
        relations.push(pair(BranchRelationKind::SubPunishment, a, b, None));
    }
    for &i in &SELF_PUNISHING {
        if count(i) >= 2 {
            relations.push(pair(BranchRelationKind::SelfPunishment, i, i, None));
        }
    }

    let mut damaged: OhangSet = relations.iter().filter_map(|r| r.damaged).collect();
    let conflict_count = relations.len().min(u8::MAX as usize) as u8;
    if conflict_count >= EARTH_MEDIATION_THRESHOLD {
        damaged.insert(Ohang::To);
    }

    BranchRelations {
        relations,
        damaged,
        conflict_count,
    }
}
