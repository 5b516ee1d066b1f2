//! JSON hanja dictionary loading and normalization.
//!
//! Records arrive with any subset of fields across schema versions. Defaults
//! are applied once here so scoring only ever sees a complete [`HanjaEntry`]:
//! - missing strokes → 0, polarity → yang, gender → neutral, era → all;
//! - secondary element `없음` or empty → none;
//! - an unreadable primary element drops the record;
//! - duplicate `char|reading` pairs keep the first occurrence.
//!
//! Records missing a glyph or reading are kept; the ranker skips them.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use jakmyeong_saju::{Eumyang, Ohang};

use crate::error::NamingError;
use crate::hanja::{EraAffinity, GenderAffinity, HanjaEntry};

/// Raw dictionary record as stored on disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawHanjaRecord {
    #[serde(alias = "character")]
    pub char: Option<String>,
    pub reading: Option<String>,
    #[serde(alias = "element", alias = "primary_element")]
    pub main_element: Option<String>,
    #[serde(alias = "secondary_element")]
    pub sub_element: Option<String>,
    #[serde(alias = "stroke_count")]
    pub strokes: Option<u32>,
    #[serde(alias = "yinYang", alias = "polarity")]
    pub yin_yang: Option<String>,
    pub meaning: Option<String>,
    pub gender: Option<String>,
    pub era: Option<String>,
}

impl RawHanjaRecord {
    /// Apply defaulting rules. `None` when the primary element is unusable.
    pub fn normalize(&self) -> Option<HanjaEntry> {
        let primary_element = self.main_element.as_deref().and_then(Ohang::from_label)?;
        let secondary_element = self
            .sub_element
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty() && *s != "없음")
            .and_then(Ohang::from_label);
        Some(HanjaEntry {
            character: trimmed(&self.char),
            reading: trimmed(&self.reading),
            primary_element,
            secondary_element,
            strokes: self.strokes.unwrap_or(0),
            polarity: self
                .yin_yang
                .as_deref()
                .and_then(Eumyang::from_label)
                .unwrap_or(Eumyang::Yang),
            meaning: trimmed(&self.meaning),
            gender: self
                .gender
                .as_deref()
                .map(GenderAffinity::from_label)
                .unwrap_or_default(),
            era: self
                .era
                .as_deref()
                .map(EraAffinity::from_label)
                .unwrap_or_default(),
        })
    }
}

fn trimmed(s: &Option<String>) -> String {
    s.as_deref().map(str::trim).unwrap_or_default().to_string()
}

/// Ordered, read-only character dictionary.
#[derive(Debug, Clone, Default)]
pub struct HanjaDictionary {
    entries: Vec<HanjaEntry>,
}

impl HanjaDictionary {
    /// Normalize raw records, dropping unusable and duplicate ones.
    pub fn from_records(records: &[RawHanjaRecord]) -> Self {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(records.len());
        for (i, raw) in records.iter().enumerate() {
            let Some(entry) = raw.normalize() else {
                warn!(
                    index = i,
                    char = raw.char.as_deref().unwrap_or(""),
                    element = raw.main_element.as_deref().unwrap_or(""),
                    "dropping hanja record with unreadable element"
                );
                continue;
            };
            if seen.insert(format!("{}|{}", entry.character, entry.reading)) {
                entries.push(entry);
            }
        }
        debug!(
            records = records.len(),
            kept = entries.len(),
            "normalized hanja dictionary"
        );
        Self { entries }
    }

    /// Parse a JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Self, NamingError> {
        let records: Vec<RawHanjaRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(&records))
    }

    /// Read and parse a JSON dictionary file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, NamingError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "loading hanja dictionary");
        Self::from_json_str(&content)
    }

    pub fn entries(&self) -> &[HanjaEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<HanjaEntry>> for HanjaDictionary {
    fn from(entries: Vec<HanjaEntry>) -> Self {
        Self { entries }
    }
}
