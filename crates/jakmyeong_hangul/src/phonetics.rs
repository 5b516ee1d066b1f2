//! Phonetic feature vector of a name: five ratios over its syllables.

use serde::Serialize;

use crate::syllable::{Syllable, decompose};

/// Obstruent onsets: ㄱ ㄲ ㄷ ㄸ ㅂ ㅃ ㅆ ㅈ ㅉ ㅊ ㅋ ㅌ ㅍ.
pub const STRONG_ONSETS: [u8; 13] = [0, 1, 3, 4, 7, 8, 10, 12, 13, 14, 15, 16, 17];

/// Sonorant and fricative onsets: ㄴ ㄹ ㅁ ㅅ ㅇ ㅎ.
pub const SOFT_ONSETS: [u8; 6] = [2, 5, 6, 9, 11, 18];

/// Open vowels: ㅏ ㅐ ㅑ ㅗ ㅘ ㅛ.
pub const OPEN_NUCLEI: [u8; 6] = [0, 1, 2, 8, 9, 12];

/// No coda, ㄴ, ㄹ, ㅁ, ㅇ.
pub const SOFT_CODAS: [u8; 5] = [0, 4, 8, 16, 21];

pub fn is_strong_onset(onset: u8) -> bool {
    STRONG_ONSETS.contains(&onset)
}

pub fn is_soft_onset(onset: u8) -> bool {
    SOFT_ONSETS.contains(&onset)
}

pub fn is_open_nucleus(nucleus: u8) -> bool {
    OPEN_NUCLEI.contains(&nucleus)
}

pub fn is_soft_coda(coda: u8) -> bool {
    SOFT_CODAS.contains(&coda)
}

/// Coda present and not in the soft set.
pub fn is_hard_coda(coda: u8) -> bool {
    coda != 0 && !is_soft_coda(coda)
}

/// Ratios in [0, 1] over the syllable count.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PhoneticProfile {
    pub batchim_ratio: f64,
    pub strong_onset_ratio: f64,
    pub soft_onset_ratio: f64,
    pub open_vowel_ratio: f64,
    pub soft_coda_ratio: f64,
}

impl PhoneticProfile {
    pub const fn new(
        batchim_ratio: f64,
        strong_onset_ratio: f64,
        soft_onset_ratio: f64,
        open_vowel_ratio: f64,
        soft_coda_ratio: f64,
    ) -> Self {
        Self {
            batchim_ratio,
            strong_onset_ratio,
            soft_onset_ratio,
            open_vowel_ratio,
            soft_coda_ratio,
        }
    }

    /// Profile of already-decomposed syllables. All zeros when empty.
    pub fn from_syllables(syllables: &[Syllable]) -> Self {
        if syllables.is_empty() {
            return Self::default();
        }
        Self {
            batchim_ratio: share(syllables, |s| s.has_coda()),
            strong_onset_ratio: share(syllables, |s| is_strong_onset(s.onset)),
            soft_onset_ratio: share(syllables, |s| is_soft_onset(s.onset)),
            open_vowel_ratio: share(syllables, |s| is_open_nucleus(s.nucleus)),
            soft_coda_ratio: share(syllables, |s| is_soft_coda(s.coda)),
        }
    }

    pub const fn as_array(&self) -> [f64; 5] {
        [
            self.batchim_ratio,
            self.strong_onset_ratio,
            self.soft_onset_ratio,
            self.open_vowel_ratio,
            self.soft_coda_ratio,
        ]
    }

    /// Mean absolute per-feature difference.
    pub fn mean_abs_diff(&self, other: &Self) -> f64 {
        let a = self.as_array();
        let b = other.as_array();
        a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum::<f64>() / a.len() as f64
    }
}

fn share(syllables: &[Syllable], pred: impl Fn(&Syllable) -> bool) -> f64 {
    syllables.iter().filter(|s| pred(s)).count() as f64 / syllables.len() as f64
}

/// Phonetic profile of the Hangul syllables in `name`.
pub fn analyze_phonetics(name: &str) -> PhoneticProfile {
    PhoneticProfile::from_syllables(&decompose(name))
}
