//! Scoring configuration: criterion weights, result count, stroke target.
//!
//! Every field has a default, so a partial TOML file overrides only what it
//! names:
//!
//! ```toml
//! top_k = 10
//!
//! [weights]
//! element_supplement = 2.5
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::criteria::Criterion;
use crate::error::NamingError;

/// Per-criterion weights for the weighted mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriterionWeights {
    pub element_supplement: f64,
    pub ending_sound: f64,
    pub syllable_flow: f64,
    pub era_phonology: f64,
    pub gender_fit: f64,
    pub stroke_harmony: f64,
    /// Used only when a birth order is supplied.
    pub birth_order: f64,
}

impl Default for CriterionWeights {
    fn default() -> Self {
        Self {
            element_supplement: 2.0,
            ending_sound: 1.5,
            syllable_flow: 1.3,
            era_phonology: 1.1,
            gender_fit: 1.0,
            stroke_harmony: 0.5,
            birth_order: 0.4,
        }
    }
}

impl CriterionWeights {
    pub const fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::ElementSupplement => self.element_supplement,
            Criterion::EndingSound => self.ending_sound,
            Criterion::SyllableFlow => self.syllable_flow,
            Criterion::EraPhonology => self.era_phonology,
            Criterion::GenderFit => self.gender_fit,
            Criterion::StrokeHarmony => self.stroke_harmony,
            Criterion::BirthOrder => self.birth_order,
        }
    }
}

/// Default number of ranked results.
pub const DEFAULT_TOP_K: usize = 8;

/// Default ideal total stroke count for the last tie-break.
pub const DEFAULT_IDEAL_STROKE_TOTAL: u32 = 23;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: CriterionWeights,
    pub top_k: usize,
    pub ideal_stroke_total: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: CriterionWeights::default(),
            top_k: DEFAULT_TOP_K,
            ideal_stroke_total: DEFAULT_IDEAL_STROKE_TOTAL,
        }
    }
}

impl ScoringConfig {
    /// Parse and validate TOML.
    pub fn from_toml_str(s: &str) -> Result<Self, NamingError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, NamingError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Reject negative or non-finite weights, all-zero weights, and `top_k == 0`.
    pub fn validate(&self) -> Result<(), NamingError> {
        for c in Criterion::ALL {
            let w = self.weights.get(c);
            if !w.is_finite() || w < 0.0 {
                return Err(NamingError::InvalidConfig(format!(
                    "weight for {} must be a non-negative number, got {w}",
                    c.id()
                )));
            }
        }
        let core: f64 = Criterion::ALL
            .iter()
            .filter(|c| **c != Criterion::BirthOrder)
            .map(|c| self.weights.get(*c))
            .sum();
        if core <= 0.0 {
            return Err(NamingError::InvalidConfig(
                "at least one criterion weight must be positive".to_string(),
            ));
        }
        if self.top_k == 0 {
            return Err(NamingError::InvalidConfig("top_k must be at least 1".to_string()));
        }
        Ok(())
    }
}
