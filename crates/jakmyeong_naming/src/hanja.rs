//! Typed hanja records and the surname they are combined with.

use std::str::FromStr;

use serde::Serialize;

use jakmyeong_hangul::Generation;
use jakmyeong_saju::{Eumyang, Ohang};
use jakmyeong_time::Gender;

/// Gender a character is usually chosen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderAffinity {
    #[default]
    Neutral,
    Male,
    Female,
}

impl GenderAffinity {
    /// Unknown labels are neutral.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "남" | "남성" => Self::Male,
            "female" | "f" | "여" | "여성" => Self::Female,
            _ => Self::Neutral,
        }
    }

    pub const fn matches(self, gender: Gender) -> bool {
        matches!(
            (self, gender),
            (Self::Male, Gender::Male) | (Self::Female, Gender::Female)
        )
    }
}

/// Naming generation a character belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EraAffinity {
    Traditional,
    Mid,
    New,
    Latest,
    #[default]
    All,
}

impl EraAffinity {
    /// Unknown labels mean all eras.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "traditional" | "전통" => Self::Traditional,
            "mid" | "중기" => Self::Mid,
            "new" | "신세대" => Self::New,
            "latest" | "최신" => Self::Latest,
            _ => Self::All,
        }
    }

    pub const fn generation(self) -> Option<Generation> {
        match self {
            Self::Traditional => Some(Generation::Traditional),
            Self::Mid => Some(Generation::Mid),
            Self::New => Some(Generation::New),
            Self::Latest => Some(Generation::Latest),
            Self::All => None,
        }
    }

    /// 1 for an exact generation or `All`, 0.5 for a neighbouring one, else 0.
    pub fn affinity(self, generation: Generation) -> f64 {
        match self.generation() {
            None => 1.0,
            Some(g) if g == generation => 1.0,
            Some(g) if g.is_adjacent(generation) => 0.5,
            Some(_) => 0.0,
        }
    }
}

/// Birth order among siblings, for the optional preferred-character criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BirthOrder {
    First,
    Middle,
    Last,
}

impl BirthOrder {
    pub const ALL: [Self; 3] = [Self::First, Self::Middle, Self::Last];

    /// Glyphs conventionally reserved for this position.
    pub const fn preferred_glyphs(self) -> &'static [&'static str] {
        match self {
            Self::First => &["元", "長", "一", "泰", "太", "伯", "孟", "甲", "首", "宗"],
            Self::Middle => &["仲", "中", "次", "再"],
            Self::Last => &["季", "末", "叔", "少"],
        }
    }
}

impl FromStr for BirthOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" | "eldest" | "첫째" | "장남" | "장녀" => Ok(Self::First),
            "middle" | "둘째" => Ok(Self::Middle),
            "last" | "youngest" | "막내" => Ok(Self::Last),
            other => Err(format!("unknown birth order '{other}'")),
        }
    }
}

/// One dictionary character, fully populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HanjaEntry {
    /// The glyph, e.g. "潤".
    pub character: String,
    /// Korean reading, e.g. "윤".
    pub reading: String,
    pub primary_element: Ohang,
    pub secondary_element: Option<Ohang>,
    pub strokes: u32,
    pub polarity: Eumyang,
    pub meaning: String,
    pub gender: GenderAffinity,
    pub era: EraAffinity,
}

impl HanjaEntry {
    /// Entry with default polarity, gender and era.
    pub fn new(character: &str, reading: &str, primary_element: Ohang, strokes: u32) -> Self {
        Self {
            character: character.to_string(),
            reading: reading.to_string(),
            primary_element,
            secondary_element: None,
            strokes,
            polarity: Eumyang::Yang,
            meaning: String::new(),
            gender: GenderAffinity::Neutral,
            era: EraAffinity::All,
        }
    }

    /// Usable for enumeration: glyph and reading are both present.
    pub fn is_complete(&self) -> bool {
        !self.character.is_empty() && !self.reading.is_empty()
    }

    /// Reading or glyph equals `input`.
    pub fn matches(&self, input: &str) -> bool {
        !input.is_empty() && (self.reading == input || self.character == input)
    }
}

/// The family name: a Korean reading and optionally its glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Surname {
    pub reading: String,
    pub hanja: Option<String>,
}

impl Surname {
    pub fn new(reading: &str) -> Self {
        Self {
            reading: reading.trim().to_string(),
            hanja: None,
        }
    }

    pub fn with_hanja(reading: &str, hanja: &str) -> Self {
        let hanja = hanja.trim();
        Self {
            reading: reading.trim().to_string(),
            hanja: (!hanja.is_empty()).then(|| hanja.to_string()),
        }
    }

    /// A character collides when its reading or glyph equals the surname's
    /// reading or glyph.
    pub fn collides_with(&self, entry: &HanjaEntry) -> bool {
        let mut keys = [Some(self.reading.as_str()), self.hanja.as_deref()]
            .into_iter()
            .flatten()
            .filter(|k| !k.is_empty());
        keys.any(|k| entry.reading == k || entry.character == k)
    }
}
