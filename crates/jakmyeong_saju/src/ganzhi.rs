//! Cheongan (10 heavenly stems), jiji (12 earthly branches) and their
//! sexagenary pairing.
//!
//! Element and polarity are fixed lookup tables, never computed.

use serde::ser::{Serialize, Serializer};

use crate::ohang::{Eumyang, Ohang};

/// The 10 heavenly stems, starting from 갑 (甲).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Cheongan {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in order (0 = 갑, 9 = 계).
pub const ALL_CHEONGAN: [Cheongan; 10] = [
    Cheongan::Gap,
    Cheongan::Eul,
    Cheongan::Byeong,
    Cheongan::Jeong,
    Cheongan::Mu,
    Cheongan::Gi,
    Cheongan::Gyeong,
    Cheongan::Sin,
    Cheongan::Im,
    Cheongan::Gye,
];

const CHEONGAN_NAMES: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];
const CHEONGAN_HANJA: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

const CHEONGAN_OHANG: [Ohang; 10] = [
    Ohang::Mok,
    Ohang::Mok,
    Ohang::Hwa,
    Ohang::Hwa,
    Ohang::To,
    Ohang::To,
    Ohang::Geum,
    Ohang::Geum,
    Ohang::Su,
    Ohang::Su,
];

impl Cheongan {
    /// 0-based index (갑=0 .. 계=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at `index % 10`.
    pub const fn from_index(index: u8) -> Self {
        ALL_CHEONGAN[(index % 10) as usize]
    }

    /// Korean reading.
    pub const fn name(self) -> &'static str {
        CHEONGAN_NAMES[self as usize]
    }

    /// Hanja glyph.
    pub const fn hanja(self) -> &'static str {
        CHEONGAN_HANJA[self as usize]
    }

    pub const fn element(self) -> Ohang {
        CHEONGAN_OHANG[self as usize]
    }

    /// Even indices are yang, odd are yin.
    pub const fn polarity(self) -> Eumyang {
        if self.index() % 2 == 0 {
            Eumyang::Yang
        } else {
            Eumyang::Eum
        }
    }
}

impl Serialize for Cheongan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// The 12 earthly branches, starting from 자 (子, Rat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Jiji {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in order (0 = 자, 11 = 해).
pub const ALL_JIJI: [Jiji; 12] = [
    Jiji::Ja,
    Jiji::Chuk,
    Jiji::In,
    Jiji::Myo,
    Jiji::Jin,
    Jiji::Sa,
    Jiji::O,
    Jiji::Mi,
    Jiji::Sin,
    Jiji::Yu,
    Jiji::Sul,
    Jiji::Hae,
];

const JIJI_NAMES: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];
const JIJI_HANJA: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
const JIJI_ANIMALS: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

const JIJI_OHANG: [Ohang; 12] = [
    Ohang::Su,
    Ohang::To,
    Ohang::Mok,
    Ohang::Mok,
    Ohang::To,
    Ohang::Hwa,
    Ohang::Hwa,
    Ohang::To,
    Ohang::Geum,
    Ohang::Geum,
    Ohang::To,
    Ohang::Su,
];

impl Jiji {
    /// 0-based index (자=0 .. 해=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at `index % 12`.
    pub const fn from_index(index: u8) -> Self {
        ALL_JIJI[(index % 12) as usize]
    }

    /// Korean reading.
    pub const fn name(self) -> &'static str {
        JIJI_NAMES[self as usize]
    }

    /// Hanja glyph.
    pub const fn hanja(self) -> &'static str {
        JIJI_HANJA[self as usize]
    }

    /// Zodiac animal (English).
    pub const fn animal(self) -> &'static str {
        JIJI_ANIMALS[self as usize]
    }

    pub const fn element(self) -> Ohang {
        JIJI_OHANG[self as usize]
    }
}

impl Serialize for Jiji {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A stem/branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ganji {
    pub stem: Cheongan,
    pub branch: Jiji,
}

impl Ganji {
    pub const fn new(stem: Cheongan, branch: Jiji) -> Self {
        Self { stem, branch }
    }

    /// Pair at position `index` (mod 60) of the sexagenary cycle (0 = 갑자).
    pub const fn from_cycle_index(index: u8) -> Self {
        let i = index % 60;
        Self {
            stem: Cheongan::from_index(i % 10),
            branch: Jiji::from_index(i % 12),
        }
    }

    /// Position in the sexagenary cycle, or `None` when stem and branch
    /// differ in parity (such pairs never occur in the cycle).
    pub fn cycle_index(&self) -> Option<u8> {
        (0..60u8).find(|i| i % 10 == self.stem.index() && i % 12 == self.branch.index())
    }

    /// Pair shifted `steps` positions along stems and branches.
    pub fn shifted(&self, steps: i32) -> Self {
        Self {
            stem: Cheongan::from_index((self.stem.index() as i32 + steps).rem_euclid(10) as u8),
            branch: Jiji::from_index((self.branch.index() as i32 + steps).rem_euclid(12) as u8),
        }
    }

    /// Korean reading, e.g. "경자".
    pub fn name(&self) -> String {
        format!("{}{}", self.stem.name(), self.branch.name())
    }

    /// Hanja glyphs, e.g. "庚子".
    pub fn hanja(&self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

impl std::fmt::Display for Ganji {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}
