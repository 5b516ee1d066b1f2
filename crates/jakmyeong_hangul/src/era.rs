//! Birth-decade buckets, naming generations and era phonology fit.
//!
//! Each decade has a target [`PhoneticProfile`]. Fit is
//! `max(0, 5 * (1 - 2 * MAD))` against that target, reaching zero once the
//! mean per-feature deviation hits 0.5.

use serde::Serialize;

use crate::phonetics::PhoneticProfile;

/// Maximum era fit score.
pub const ERA_FIT_MAX: f64 = 5.0;

/// Birth-decade bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum EraBucket {
    #[serde(rename = "1950s")]
    Y1950s,
    #[serde(rename = "1960s")]
    Y1960s,
    #[serde(rename = "1970s")]
    Y1970s,
    #[serde(rename = "1980s")]
    Y1980s,
    #[serde(rename = "1990s")]
    Y1990s,
    #[serde(rename = "2000s")]
    Y2000s,
    #[serde(rename = "2010s")]
    Y2010s,
    #[serde(rename = "2020s")]
    Y2020s,
}

/// All buckets, oldest first.
pub const ALL_ERAS: [EraBucket; 8] = [
    EraBucket::Y1950s,
    EraBucket::Y1960s,
    EraBucket::Y1970s,
    EraBucket::Y1980s,
    EraBucket::Y1990s,
    EraBucket::Y2000s,
    EraBucket::Y2010s,
    EraBucket::Y2020s,
];

/// Lower year bound of buckets 1..7; anything earlier is the 1950s bucket.
const ERA_THRESHOLDS: [i32; 7] = [1960, 1970, 1980, 1990, 2000, 2010, 2020];

/// Target profiles, indexed by bucket:
/// (batchim, strong onset, soft onset, open vowel, soft coda).
const ERA_PROFILES: [PhoneticProfile; 8] = [
    PhoneticProfile::new(0.60, 0.50, 0.40, 0.40, 0.60),
    PhoneticProfile::new(0.60, 0.45, 0.45, 0.40, 0.65),
    PhoneticProfile::new(0.55, 0.40, 0.50, 0.35, 0.70),
    PhoneticProfile::new(0.50, 0.35, 0.55, 0.35, 0.75),
    PhoneticProfile::new(0.45, 0.35, 0.60, 0.40, 0.80),
    PhoneticProfile::new(0.40, 0.30, 0.65, 0.45, 0.85),
    PhoneticProfile::new(0.30, 0.20, 0.75, 0.50, 0.90),
    PhoneticProfile::new(0.25, 0.15, 0.80, 0.55, 0.95),
];

impl EraBucket {
    pub fn from_birth_year(year: i32) -> Self {
        let idx = ERA_THRESHOLDS.iter().filter(|&&t| year >= t).count();
        ALL_ERAS[idx]
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Y1950s => "1950s",
            Self::Y1960s => "1960s",
            Self::Y1970s => "1970s",
            Self::Y1980s => "1980s",
            Self::Y1990s => "1990s",
            Self::Y2000s => "2000s",
            Self::Y2010s => "2010s",
            Self::Y2020s => "2020s",
        }
    }

    pub const fn target_profile(self) -> PhoneticProfile {
        ERA_PROFILES[self as usize]
    }

    pub const fn generation(self) -> Generation {
        match self {
            Self::Y1950s | Self::Y1960s => Generation::Traditional,
            Self::Y1970s | Self::Y1980s => Generation::Mid,
            Self::Y1990s | Self::Y2000s => Generation::New,
            Self::Y2010s | Self::Y2020s => Generation::Latest,
        }
    }
}

/// Naming generation, two decades each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Generation {
    Traditional,
    Mid,
    New,
    Latest,
}

impl Generation {
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Neighbouring generations (one step apart).
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.index().abs_diff(other.index()) == 1
    }

    /// First-syllable onsets that read as typical for the generation.
    pub const fn preferred_first_onsets(self) -> &'static [u8] {
        match self {
            // ㅇ ㅈ ㅅ ㅁ
            Self::Traditional => &[11, 12, 9, 6],
            // ㅈ ㅅ ㅎ ㅇ
            Self::Mid => &[12, 9, 18, 11],
            // ㅁ ㅈ ㅅ ㅎ ㅇ
            Self::New => &[6, 12, 9, 18, 11],
            // ㅎ ㅅ ㅇ ㄷ ㅈ
            Self::Latest => &[18, 9, 11, 3, 12],
        }
    }

    /// First-syllable vowels that read as typical for the generation.
    pub const fn preferred_first_nuclei(self) -> &'static [u8] {
        match self {
            // ㅕ ㅓ ㅜ ㅗ
            Self::Traditional => &[6, 4, 13, 8],
            // ㅓ ㅕ ㅡ ㅔ
            Self::Mid => &[4, 6, 18, 5],
            // ㅣ ㅠ ㅕ ㅡ
            Self::New => &[20, 17, 6, 18],
            // ㅏ ㅣ ㅗ ㅓ
            Self::Latest => &[0, 20, 8, 4],
        }
    }
}

/// Era phonology fit in `[0, 5]`.
pub fn era_fit(profile: &PhoneticProfile, era: EraBucket) -> f64 {
    let mad = profile.mean_abs_diff(&era.target_profile());
    (ERA_FIT_MAX * (1.0 - 2.0 * mad)).max(0.0)
}
