//! Convenience facade over the jakmyeong crates.
//!
//! Chains chart computation, structure analysis, needed-element resolution
//! and name ranking so callers only need `use jakmyeong_rs::*`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use jakmyeong_rs::*;
//!
//! let report = analyze_birth("1990-03-15", 10, Some(0), Gender::Male)?;
//! let dict = load_dictionary("data/hanja_sample.json")?;
//! let names = recommend_names(
//!     &report,
//!     &dict,
//!     &NameQuery::new(Surname::new("김")),
//!     &ScoringConfig::default(),
//! );
//! for n in &names {
//!     println!("{} ({}) {:.3}", n.full_name, n.hanja_name, n.final_score);
//! }
//! ```

pub mod convenience;
pub mod error;

pub use convenience::{
    NamePhonology, NameQuery, SajuReport, analyze_birth, load_config, load_dictionary,
    lookup_reading, phonology, recommend_names, report_for,
};
pub use error::JakmyeongError;

// Re-export input and output types so callers need no direct dependency on
// the lower crates.
pub use jakmyeong_hangul::{EraBucket, Generation, PhoneticProfile, Syllable};
pub use jakmyeong_naming::{
    BirthOrder, Criterion, CriterionScore, CriterionWeights, HanjaDictionary, HanjaEntry,
    ReadingMatch, ScoredCandidate, ScoringConfig, Surname,
};
pub use jakmyeong_saju::{
    BranchRelationKind, Chart, DaeunDirection, DaeunPeriod, DayStemStrength, ElementNeedProfile,
    Eumyang, NeedReason, Ohang, OhangSet, Pillar, PillarPosition, StructureAnalysis, TenGod,
};
pub use jakmyeong_time::{BirthMoment, CivilDate, Gender};
