//! Korean phonology for name scoring.
//!
//! This crate provides:
//! - Hangul syllable decomposition into onset/nucleus/coda indices
//! - Five-ratio phonetic profiles of a name
//! - Birth-decade buckets, generations and era phonology fit
//! - Ending-sound (말음) trend fit per gender and generation
//!
//! Everything here is table-driven arithmetic on Unicode code points.

pub mod era;
pub mod maleum;
pub mod phonetics;
pub mod syllable;

pub use era::{ALL_ERAS, ERA_FIT_MAX, EraBucket, Generation, era_fit};
pub use maleum::{MALEUM_MAX, maleum_keys, maleum_score};
pub use phonetics::{
    PhoneticProfile, analyze_phonetics, is_hard_coda, is_open_nucleus, is_soft_coda,
    is_soft_onset, is_strong_onset,
};
pub use syllable::{Syllable, decompose};
