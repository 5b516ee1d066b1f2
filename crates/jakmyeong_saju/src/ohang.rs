//! Ohang (five elements), eumyang (polarity), element sets and histograms.
//!
//! Generation cycle: 목 → 화 → 토 → 금 → 수 → 목.
//! Overcoming cycle: 목 → 토 → 수 → 화 → 금 → 목.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Ohang {
    /// 목 (wood)
    Mok,
    /// 화 (fire)
    Hwa,
    /// 토 (earth)
    To,
    /// 금 (metal)
    Geum,
    /// 수 (water)
    Su,
}

/// All five elements in canonical order (0 = 목, 4 = 수).
pub const ALL_OHANG: [Ohang; 5] = [Ohang::Mok, Ohang::Hwa, Ohang::To, Ohang::Geum, Ohang::Su];

impl Ohang {
    /// Korean name (목 화 토 금 수).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mok => "목",
            Self::Hwa => "화",
            Self::To => "토",
            Self::Geum => "금",
            Self::Su => "수",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Mok => "wood",
            Self::Hwa => "fire",
            Self::To => "earth",
            Self::Geum => "metal",
            Self::Su => "water",
        }
    }

    /// 0-based index (목=0 .. 수=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mok => 0,
            Self::Hwa => 1,
            Self::To => 2,
            Self::Geum => 3,
            Self::Su => 4,
        }
    }

    /// Element at `index % 5`.
    pub const fn from_index(index: u8) -> Self {
        ALL_OHANG[(index % 5) as usize]
    }

    /// Parse a Korean (목), hanja (木) or English (wood) label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "목" | "木" => Some(Self::Mok),
            "화" | "火" => Some(Self::Hwa),
            "토" | "土" => Some(Self::To),
            "금" | "金" => Some(Self::Geum),
            "수" | "水" => Some(Self::Su),
            other => match other.to_ascii_lowercase().as_str() {
                "wood" => Some(Self::Mok),
                "fire" => Some(Self::Hwa),
                "earth" => Some(Self::To),
                "metal" => Some(Self::Geum),
                "water" => Some(Self::Su),
                _ => None,
            },
        }
    }

    /// The element this one produces.
    pub const fn generates(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The element that produces this one.
    pub const fn generated_by(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    /// The element this one overcomes.
    pub const fn overcomes(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// The element that overcomes this one.
    pub const fn overcome_by(self) -> Self {
        Self::from_index(self.index() + 3)
    }
}

impl std::fmt::Display for Ohang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Ohang {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.english_name())
    }
}

/// Yin/yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Eumyang {
    /// 양
    Yang,
    /// 음
    Eum,
}

impl Eumyang {
    /// Korean name (양 / 음).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "양",
            Self::Eum => "음",
        }
    }

    /// Parse 양/음, yang/yin.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "양" | "陽" => Some(Self::Yang),
            "음" | "陰" => Some(Self::Eum),
            other => match other.to_ascii_lowercase().as_str() {
                "yang" => Some(Self::Yang),
                "yin" | "eum" => Some(Self::Eum),
                _ => None,
            },
        }
    }
}

impl Serialize for Eumyang {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(match self {
            Self::Yang => "yang",
            Self::Eum => "yin",
        })
    }
}

/// A set of elements, iterated in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OhangSet(u8);

impl OhangSet {
    pub const EMPTY: Self = Self(0);
    pub const ALL: Self = Self(0b1_1111);

    /// Add an element. Returns true if it was not already present.
    pub fn insert(&mut self, o: Ohang) -> bool {
        let bit = 1 << o.index();
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    pub fn remove(&mut self, o: Ohang) {
        self.0 &= !(1 << o.index());
    }

    pub const fn contains(self, o: Ohang) -> bool {
        self.0 & (1 << o.index()) != 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Elements in canonical order.
    pub fn iter(self) -> impl Iterator<Item = Ohang> {
        ALL_OHANG.into_iter().filter(move |o| self.contains(*o))
    }
}

impl FromIterator<Ohang> for OhangSet {
    fn from_iter<I: IntoIterator<Item = Ohang>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for o in iter {
            set.insert(o);
        }
        set
    }
}

impl Serialize for OhangSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Element histogram over a chart's eight stem/branch positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElementCounts([u8; 5]);

impl ElementCounts {
    /// Tally a sequence of elements.
    pub fn tally<I: IntoIterator<Item = Ohang>>(elements: I) -> Self {
        let mut counts = Self::default();
        for o in elements {
            counts.0[o.index() as usize] += 1;
        }
        counts
    }

    pub const fn get(&self, o: Ohang) -> u8 {
        self.0[o.index() as usize]
    }

    /// Sum over all five elements.
    pub fn total(&self) -> u32 {
        self.0.iter().map(|&c| c as u32).sum()
    }

    pub fn min(&self) -> u8 {
        self.0.iter().copied().min().unwrap_or(0)
    }

    pub fn max(&self) -> u8 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Elements whose count equals `n`.
    pub fn with_count(&self, n: u8) -> OhangSet {
        ALL_OHANG.into_iter().filter(|o| self.get(*o) == n).collect()
    }

    /// Least-frequent element(s).
    pub fn least(&self) -> OhangSet {
        self.with_count(self.min())
    }

    /// Element(s) at the second-lowest distinct count, if any.
    pub fn second_least(&self) -> OhangSet {
        let min = self.min();
        match self.0.iter().copied().filter(|&c| c > min).min() {
            Some(second) => self.with_count(second),
            None => OhangSet::EMPTY,
        }
    }

    /// Most-frequent element(s).
    pub fn most(&self) -> OhangSet {
        self.with_count(self.max())
    }

    /// Rounded percentage share per element, in canonical order.
    pub fn percentages(&self) -> [u8; 5] {
        let total = self.total().max(1) as f64;
        self.0.map(|c| (c as f64 / total * 100.0).round() as u8)
    }

    /// `(element, count)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Ohang, u8)> + '_ {
        ALL_OHANG.into_iter().map(move |o| (o, self.get(o)))
    }
}

impl Serialize for ElementCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(5))?;
        for (o, c) in self.iter() {
            map.serialize_entry(o.english_name(), &c)?;
        }
        map.end()
    }
}
