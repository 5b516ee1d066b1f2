//! Hanja name scoring and ranking.
//!
//! This crate provides:
//! - Typed hanja records and JSON dictionary loading with defaulting
//! - Scoring configuration (weights, result count) from TOML
//! - A closed set of scoring criteria and the weighted-mean scorer
//! - Pairwise candidate ranking and reading lookup
//!
//! The core is pure: a ranking run reads an in-memory dictionary and a
//! resolved [`jakmyeong_saju::ElementNeedProfile`].

pub mod config;
pub mod criteria;
pub mod dictionary;
pub mod error;
pub mod hanja;
pub mod ranker;
pub mod scorer;

pub use config::{CriterionWeights, DEFAULT_IDEAL_STROKE_TOTAL, DEFAULT_TOP_K, ScoringConfig};
pub use criteria::{Criterion, NEUTRAL_SCORE, ScoringContext, is_blacklisted};
pub use dictionary::{HanjaDictionary, RawHanjaRecord};
pub use error::NamingError;
pub use hanja::{BirthOrder, EraAffinity, GenderAffinity, HanjaEntry, Surname};
pub use ranker::{RankRequest, ReadingMatch, hanja_by_reading, rank};
pub use scorer::{
    BALANCED_EXPLANATION, CriterionScore, ScoredCandidate, deficient_match, explanation,
    score_candidate,
};
