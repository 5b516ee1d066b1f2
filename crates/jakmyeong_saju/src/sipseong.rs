//! Sipseong (ten gods): relation of each chart element to the day-stem element.
//!
//! The ten gods are grouped into five pairs here. The same-polarity /
//! opposite-polarity split (비견/겁재 etc.) is exposed for display only.

use serde::Serialize;

use crate::chart::Chart;
use crate::ohang::Ohang;
use crate::pillar::PillarPosition;

/// The five ten-god groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TenGod {
    /// Same element (비견/겁재).
    Peer,
    /// Produced by the day element (식신/상관).
    Output,
    /// Overcome by the day element (편재/정재).
    Wealth,
    /// Overcomes the day element (편관/정관).
    Authority,
    /// Produces the day element (편인/정인).
    Resource,
}

impl TenGod {
    /// Group name (비겁 식상 재성 관성 인성).
    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::Peer => "비겁",
            Self::Output => "식상",
            Self::Wealth => "재성",
            Self::Authority => "관성",
            Self::Resource => "인성",
        }
    }

    /// Individual god name given whether polarity matches the day stem.
    pub const fn detailed_name(self, same_polarity: bool) -> &'static str {
        match (self, same_polarity) {
            (Self::Peer, true) => "비견",
            (Self::Peer, false) => "겁재",
            (Self::Output, true) => "식신",
            (Self::Output, false) => "상관",
            (Self::Wealth, true) => "편재",
            (Self::Wealth, false) => "정재",
            (Self::Authority, true) => "편관",
            (Self::Authority, false) => "정관",
            (Self::Resource, true) => "편인",
            (Self::Resource, false) => "정인",
        }
    }
}

use TenGod::{Authority as A, Output as O, Peer as P, Resource as R, Wealth as W};

/// Row = day element, column = other element, both in 목 화 토 금 수 order.
const TEN_GOD_TABLE: [[TenGod; 5]; 5] = [
    [P, O, W, A, R], // 목
    [R, P, O, W, A], // 화
    [A, R, P, O, W], // 토
    [W, A, R, P, O], // 금
    [O, W, A, R, P], // 수
];

/// Ten-god group of `other` relative to `day`.
pub const fn ten_god(day: Ohang, other: Ohang) -> TenGod {
    TEN_GOD_TABLE[day.index() as usize][other.index() as usize]
}

/// Ten-gods for one pillar's stem and branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PillarTenGods {
    pub position: PillarPosition,
    pub stem: TenGod,
    pub branch: TenGod,
}

/// Ten-god tally over the chart's eight data points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TenGodCounts {
    pub peer: u8,
    pub output: u8,
    pub wealth: u8,
    pub authority: u8,
    pub resource: u8,
}

impl TenGodCounts {
    pub fn add(&mut self, god: TenGod) {
        match god {
            TenGod::Peer => self.peer += 1,
            TenGod::Output => self.output += 1,
            TenGod::Wealth => self.wealth += 1,
            TenGod::Authority => self.authority += 1,
            TenGod::Resource => self.resource += 1,
        }
    }

    pub const fn get(&self, god: TenGod) -> u8 {
        match god {
            TenGod::Peer => self.peer,
            TenGod::Output => self.output,
            TenGod::Wealth => self.wealth,
            TenGod::Authority => self.authority,
            TenGod::Resource => self.resource,
        }
    }

    /// Supporting forces: peer + resource.
    pub const fn help(&self) -> u8 {
        self.peer + self.resource
    }

    /// Weakening forces: output + wealth + authority.
    pub const fn drain(&self) -> u8 {
        self.output + self.wealth + self.authority
    }
}

/// Classify every stem and branch of the chart against the day stem.
///
/// The day stem itself is included and always counts as a peer.
pub fn chart_ten_gods(chart: &Chart) -> ([PillarTenGods; 4], TenGodCounts) {
    let day = chart.day_stem_element;
    let mut counts = TenGodCounts::default();
    let per_pillar = chart.pillars().map(|p| {
        let stem = ten_god(day, p.stem_element);
        let branch = ten_god(day, p.branch_element);
        counts.add(stem);
        counts.add(branch);
        PillarTenGods {
            position: p.position,
            stem,
            branch,
        }
    });
    (per_pillar, counts)
}
