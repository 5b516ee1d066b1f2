//! Arithmetic decomposition of precomposed Hangul syllables (U+AC00..U+D7A3).
//!
//! `offset = code - 0xAC00`, onset = `offset / 588`,
//! nucleus = `(offset % 588) / 28`, coda = `offset % 28`.

use serde::Serialize;

/// First precomposed syllable, 가.
pub const HANGUL_BASE: u32 = 0xAC00;
/// Last precomposed syllable, 힣.
pub const HANGUL_LAST: u32 = 0xD7A3;

const NUCLEUS_COUNT: u32 = 21;
const CODA_COUNT: u32 = 28;
const ONSET_SPAN: u32 = NUCLEUS_COUNT * CODA_COUNT; // 588

/// 19 initial consonants.
pub const ONSETS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ',
    'ㅍ', 'ㅎ',
];

/// 21 medial vowels.
pub const NUCLEI: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ',
    'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 27 final consonants; index 0 (no coda) has no jamo.
pub const CODAS: [Option<char>; 28] = [
    None,
    Some('ㄱ'),
    Some('ㄲ'),
    Some('ㄳ'),
    Some('ㄴ'),
    Some('ㄵ'),
    Some('ㄶ'),
    Some('ㄷ'),
    Some('ㄹ'),
    Some('ㄺ'),
    Some('ㄻ'),
    Some('ㄼ'),
    Some('ㄽ'),
    Some('ㄾ'),
    Some('ㄿ'),
    Some('ㅀ'),
    Some('ㅁ'),
    Some('ㅂ'),
    Some('ㅄ'),
    Some('ㅅ'),
    Some('ㅆ'),
    Some('ㅇ'),
    Some('ㅈ'),
    Some('ㅊ'),
    Some('ㅋ'),
    Some('ㅌ'),
    Some('ㅍ'),
    Some('ㅎ'),
];

/// Jamo indices of one syllable block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Syllable {
    pub ch: char,
    pub onset: u8,
    pub nucleus: u8,
    pub coda: u8,
}

impl Syllable {
    /// Decompose a single character; `None` outside the syllable block.
    pub fn from_char(ch: char) -> Option<Self> {
        let code = ch as u32;
        if !(HANGUL_BASE..=HANGUL_LAST).contains(&code) {
            return None;
        }
        let offset = code - HANGUL_BASE;
        Some(Self {
            ch,
            onset: (offset / ONSET_SPAN) as u8,
            nucleus: ((offset % ONSET_SPAN) / CODA_COUNT) as u8,
            coda: (offset % CODA_COUNT) as u8,
        })
    }

    /// Compose from jamo indices; `None` if any index is out of range.
    pub fn compose(onset: u8, nucleus: u8, coda: u8) -> Option<Self> {
        if onset as usize >= ONSETS.len()
            || nucleus as u32 >= NUCLEUS_COUNT
            || coda as u32 >= CODA_COUNT
        {
            return None;
        }
        let code =
            HANGUL_BASE + onset as u32 * ONSET_SPAN + nucleus as u32 * CODA_COUNT + coda as u32;
        char::from_u32(code).and_then(Self::from_char)
    }

    pub const fn has_coda(&self) -> bool {
        self.coda != 0
    }

    pub const fn onset_jamo(&self) -> char {
        ONSETS[self.onset as usize]
    }

    pub const fn nucleus_jamo(&self) -> char {
        NUCLEI[self.nucleus as usize]
    }

    pub const fn coda_jamo(&self) -> Option<char> {
        CODAS[self.coda as usize]
    }
}

/// Decompose every Hangul syllable in `text`; other characters are skipped.
pub fn decompose(text: &str) -> Vec<Syllable> {
    text.chars().filter_map(Syllable::from_char).collect()
}
