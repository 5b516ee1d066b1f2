//! Saju (four-pillar) calculations built on the calendar primitives.
//!
//! This crate provides:
//! - Five elements, polarity, stems, branches and the sexagenary cycle
//! - Year/month/day/hour pillar derivation (`compute_chart`)
//! - Ten-gods, branch relations and day-stem strength (`analyze_structure`)
//! - Needed-element resolution for name selection (`resolve_needs`)
//! - Ten-year luck pillars (`daeun`)
//!
//! Month pillars follow the calendar month; solar-term boundaries are not
//! modelled.

pub mod chart;
pub mod daeun;
pub mod error;
pub mod ganzhi;
pub mod needs;
pub mod ohang;
pub mod pillar;
pub mod relations;
pub mod sipseong;
pub mod structure;

pub use chart::{
    Chart, EumyangBalance, chart_for, compute_chart, day_cycle_index, day_ganji, hour_ganji,
    month_ganji, year_ganji,
};
pub use daeun::{DaeunDirection, DaeunPeriod, daeun};
pub use error::SajuError;
pub use ganzhi::{ALL_CHEONGAN, ALL_JIJI, Cheongan, Ganji, Jiji};
pub use needs::{ElementNeedProfile, NeedReason, resolve_needs};
pub use ohang::{ALL_OHANG, ElementCounts, Eumyang, Ohang, OhangSet};
pub use pillar::{Pillar, PillarPosition};
pub use relations::{BranchRelation, BranchRelationKind, BranchRelations, find_branch_relations};
pub use sipseong::{PillarTenGods, TenGod, TenGodCounts, chart_ten_gods, ten_god};
pub use structure::{DayStemStrength, StructureAnalysis, analyze_structure};
