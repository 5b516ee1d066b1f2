//! Ending-sound (말음) trend fit.
//!
//! Sparse weight tables per (gender, generation). Keys are tried in order:
//! 1. `"{preceding coda}|{final nucleus}{final coda}"` (empty coda prints as
//!    nothing, so 서윤 looks up `"|ㅠㄴ"`);
//! 2. the final syllable itself (`"윤"`);
//! 3. the final nucleus jamo (`"ㅠ"`).
//!
//! A hit scores `weight * 5`. A miss falls back on the final coda: none 2.5,
//! soft 2.0, hard 1.5. Male names ending in an open ㄴ/ㄹ/ㅁ syllable lose 1.5.

use jakmyeong_time::Gender;

use crate::era::Generation;
use crate::phonetics::is_soft_coda;
use crate::syllable::{Syllable, decompose};

/// Maximum ending-sound score.
pub const MALEUM_MAX: f64 = 5.0;

const FALLBACK_OPEN: f64 = 2.5;
const FALLBACK_SOFT_CODA: f64 = 2.0;
const FALLBACK_HARD_CODA: f64 = 1.5;
const MALE_SOFT_ENDING_PENALTY: f64 = 1.5;

/// ㄴ ㄹ ㅁ
const SOFT_FINAL_ONSETS: [u8; 3] = [2, 5, 6];

type Table = &'static [(&'static str, f64)];

// ---------------------------------------------------------------------------
// Female tables
// ---------------------------------------------------------------------------

const FEMALE_TRADITIONAL: Table = &[
    ("ㅇ|ㅏ", 1.0),
    ("ㄴ|ㅏ", 0.95),
    ("ㅇ|ㅜㄱ", 1.0),
    ("ㅇ|ㅢ", 0.9),
    ("자", 1.0),
    ("숙", 1.0),
    ("희", 0.9),
    ("순", 0.85),
    ("옥", 0.7),
    ("례", 0.7),
    ("분", 0.6),
    ("ㅏ", 0.6),
    ("ㅢ", 0.6),
];

const FEMALE_MID: Table = &[
    ("|ㅕㅇ", 1.0),
    ("ㄴ|ㅓㅇ", 0.95),
    ("|ㅣㄴ", 0.9),
    ("영", 1.0),
    ("정", 0.95),
    ("진", 0.9),
    ("희", 0.85),
    ("경", 0.85),
    ("혜", 0.8),
    ("미", 0.7),
    ("ㅕ", 0.6),
    ("ㅔ", 0.55),
];

const FEMALE_NEW: Table = &[
    ("|ㅕㄴ", 1.0),
    ("ㄴ|ㅣ", 0.9),
    ("ㄴ|ㅓ", 0.9),
    ("연", 1.0),
    ("은", 0.9),
    ("진", 0.85),
    ("현", 0.85),
    ("빈", 0.85),
    ("지", 0.8),
    ("서", 0.8),
    ("원", 0.8),
    ("민", 0.75),
    ("ㅣ", 0.7),
    ("ㅕ", 0.7),
];

const FEMALE_LATEST: Table = &[
    ("|ㅏ", 1.0),
    ("|ㅠㄴ", 0.95),
    ("|ㅣㄴ", 0.9),
    ("ㄴ|ㅏ", 0.9),
    ("아", 1.0),
    ("윤", 0.95),
    ("린", 0.9),
    ("서", 0.85),
    ("유", 0.85),
    ("안", 0.85),
    ("원", 0.8),
    ("은", 0.8),
    ("율", 0.8),
    ("ㅏ", 0.8),
    ("ㅠ", 0.7),
    ("ㅣ", 0.6),
];

// ---------------------------------------------------------------------------
// Male tables
// ---------------------------------------------------------------------------

const MALE_TRADITIONAL: Table = &[
    ("ㅇ|ㅜ", 1.0),
    ("ㅇ|ㅓㄹ", 1.0),
    ("ㅇ|ㅗ", 0.9),
    ("수", 1.0),
    ("철", 1.0),
    ("호", 0.9),
    ("식", 0.85),
    ("석", 0.85),
    ("남", 0.7),
    ("길", 0.7),
    ("ㅜ", 0.6),
    ("ㅗ", 0.55),
];

const MALE_MID: Table = &[
    ("ㅇ|ㅜㄴ", 1.0),
    ("ㅇ|ㅗ", 0.9),
    ("ㄴ|ㅜ", 0.85),
    ("훈", 1.0),
    ("호", 0.9),
    ("수", 0.9),
    ("진", 0.85),
    ("현", 0.85),
    ("철", 0.8),
    ("석", 0.8),
    ("민", 0.8),
    ("ㅜ", 0.6),
    ("ㅗ", 0.6),
];

const MALE_NEW: Table = &[
    ("ㄴ|ㅜ", 0.95),
    ("|ㅜㄴ", 0.9),
    ("ㅇ|ㅕㄴ", 0.9),
    ("훈", 0.95),
    ("준", 0.9),
    ("현", 0.9),
    ("우", 0.9),
    ("민", 0.85),
    ("호", 0.8),
    ("재", 0.8),
    ("혁", 0.75),
    ("ㅜ", 0.7),
    ("ㅕ", 0.6),
];

const MALE_LATEST: Table = &[
    ("|ㅜㄴ", 1.0),
    ("ㄴ|ㅜ", 0.95),
    ("|ㅠㄴ", 0.9),
    ("|ㅜ", 0.9),
    ("준", 1.0),
    ("우", 0.95),
    ("윤", 0.9),
    ("호", 0.85),
    ("안", 0.8),
    ("율", 0.8),
    ("원", 0.75),
    ("진", 0.7),
    ("ㅜ", 0.8),
    ("ㅗ", 0.7),
];

fn table_for(gender: Gender, generation: Generation) -> Table {
    match (gender, generation) {
        (Gender::Female, Generation::Traditional) => FEMALE_TRADITIONAL,
        (Gender::Female, Generation::Mid) => FEMALE_MID,
        (Gender::Female, Generation::New) => FEMALE_NEW,
        (Gender::Female, Generation::Latest) => FEMALE_LATEST,
        (Gender::Male, Generation::Traditional) => MALE_TRADITIONAL,
        (Gender::Male, Generation::Mid) => MALE_MID,
        (Gender::Male, Generation::New) => MALE_NEW,
        (Gender::Male, Generation::Latest) => MALE_LATEST,
    }
}

fn lookup(table: Table, key: &str) -> Option<f64> {
    table.iter().find(|(k, _)| *k == key).map(|&(_, w)| w)
}

/// Lookup keys for the final syllable, most specific first.
pub fn maleum_keys(prev: Option<&Syllable>, last: &Syllable) -> [String; 3] {
    let prev_coda = prev.and_then(Syllable::coda_jamo);
    let mut combo = String::new();
    if let Some(c) = prev_coda {
        combo.push(c);
    }
    combo.push('|');
    combo.push(last.nucleus_jamo());
    if let Some(c) = last.coda_jamo() {
        combo.push(c);
    }
    [combo, last.ch.to_string(), last.nucleus_jamo().to_string()]
}

/// Ending-sound score in `[0, 5]` for a name (surname may be included; only
/// the last two syllables matter). Non-Hangul input scores the open fallback.
pub fn maleum_score(name: &str, gender: Gender, generation: Generation) -> f64 {
    let syllables = decompose(name);
    let Some(last) = syllables.last() else {
        return FALLBACK_OPEN;
    };
    let prev = syllables.len().checked_sub(2).map(|i| &syllables[i]);

    let table = table_for(gender, generation);
    let keys = maleum_keys(prev, last);
    let mut score = match keys.iter().find_map(|k| lookup(table, k)) {
        Some(weight) => weight * MALEUM_MAX,
        None if !last.has_coda() => FALLBACK_OPEN,
        None if is_soft_coda(last.coda) => FALLBACK_SOFT_CODA,
        None => FALLBACK_HARD_CODA,
    };

    if gender == Gender::Male && !last.has_coda() && SOFT_FINAL_ONSETS.contains(&last.onset) {
        score -= MALE_SOFT_ENDING_PENALTY;
    }
    score.clamp(0.0, MALEUM_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn keys_for_seoyun() {
        let s = decompose("서윤");
        let keys = maleum_keys(Some(&s[0]), &s[1]);
        assert_eq!(keys, ["|ㅠㄴ".to_string(), "윤".to_string(), "ㅠ".to_string()]);
    }

    #[test]
    fn keys_with_preceding_coda() {
        let s = decompose("은우");
        let keys = maleum_keys(Some(&s[0]), &s[1]);
        assert_eq!(keys[0], "ㄴ|ㅜ");
    }

    #[test]
    fn combo_key_wins() {
        // 하준 → "|ㅜㄴ" in the latest male table
        assert!(close(maleum_score("하준", Gender::Male, Generation::Latest), 5.0));
        // 은우 → "ㄴ|ㅜ"
        assert!(close(maleum_score("은우", Gender::Male, Generation::Latest), 4.75));
    }

    #[test]
    fn syllable_then_vowel_fallback() {
        // 도율: prev no coda, "|ㅠㄹ" absent, "율" present
        assert!(close(maleum_score("도율", Gender::Female, Generation::Latest), 4.0));
        // 채리: "|ㅣ" and "리" absent, "ㅣ" 0.6
        assert!(close(maleum_score("채리", Gender::Female, Generation::Latest), 3.0));
    }

    #[test]
    fn coda_fallback_tiers() {
        // no entry for the vowel ㅐ in the mid female table
        assert!(close(maleum_score("소래", Gender::Female, Generation::Mid), 2.5));
        // 람: soft coda ㅁ, vowel ㅏ not in the mid female table
        assert!(close(maleum_score("보람", Gender::Female, Generation::Mid), 2.0));
        // 각: hard coda ㄱ
        assert!(close(maleum_score("보각", Gender::Female, Generation::Mid), 1.5));
    }

    #[test]
    fn male_soft_open_ending_penalized() {
        // 하나: ㄴ onset, no coda. "|ㅏ" absent for male latest, "나" absent, "ㅏ" absent
        assert!(close(maleum_score("하나", Gender::Male, Generation::Latest), 1.0));
        assert!(close(maleum_score("하나", Gender::Female, Generation::Latest), 5.0));
    }

    #[test]
    fn surname_supplies_preceding_coda_for_single_syllable() {
        let a = maleum_score("김우", Gender::Male, Generation::Latest);
        let b = maleum_score("우", Gender::Male, Generation::Latest);
        // "ㅁ|ㅜ" absent → "우" 0.95; lone "우" hits "|ㅜ" 0.9
        assert!(close(a, 4.75));
        assert!(close(b, 4.5));
    }

    #[test]
    fn non_hangul_is_neutral() {
        assert!(close(maleum_score("abc", Gender::Male, Generation::New), 2.5));
    }
}
