//! One of the four chart positions with its stem, branch, elements and polarity.

use serde::Serialize;

use crate::ganzhi::{Cheongan, Ganji, Jiji};
use crate::ohang::{Eumyang, Ohang};

/// Which of the four pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarPosition {
    /// Korean label (년주 월주 일주 시주).
    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::Year => "년주",
            Self::Month => "월주",
            Self::Day => "일주",
            Self::Hour => "시주",
        }
    }
}

/// A single pillar. All derived fields are table lookups from stem/branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pillar {
    pub position: PillarPosition,
    pub stem: Cheongan,
    pub branch: Jiji,
    pub stem_element: Ohang,
    pub branch_element: Ohang,
    /// Polarity of the stem.
    pub polarity: Eumyang,
}

impl Pillar {
    pub const fn new(position: PillarPosition, ganji: Ganji) -> Self {
        Self {
            position,
            stem: ganji.stem,
            branch: ganji.branch,
            stem_element: ganji.stem.element(),
            branch_element: ganji.branch.element(),
            polarity: ganji.stem.polarity(),
        }
    }

    pub const fn ganji(&self) -> Ganji {
        Ganji::new(self.stem, self.branch)
    }

    /// Stem element then branch element.
    pub const fn elements(&self) -> [Ohang; 2] {
        [self.stem_element, self.branch_element]
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}{} ({}{})",
            self.position.korean_name(),
            self.stem.name(),
            self.branch.name(),
            self.stem.hanja(),
            self.branch.hanja()
        )
    }
}
