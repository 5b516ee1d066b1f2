//! The closed set of name-scoring criteria.
//!
//! Each criterion is a pure function `(first, second, &ScoringContext) -> f64`
//! clamped to `[0, max]`. The scorer walks [`Criterion::ALL`] in order.

use serde::Serialize;

use jakmyeong_hangul::{
    ERA_FIT_MAX, EraBucket, Generation, Syllable, analyze_phonetics, decompose, era_fit,
    is_hard_coda, is_soft_coda, is_soft_onset, is_strong_onset, maleum_score,
};
use jakmyeong_saju::{ElementNeedProfile, Eumyang, EumyangBalance, OhangSet};
use jakmyeong_time::Gender;

use crate::hanja::{BirthOrder, HanjaEntry, Surname};

/// Score given to era-dependent criteria when no birth year is known.
pub const NEUTRAL_SCORE: f64 = 2.5;

/// Everything a criterion may consult besides the two characters.
#[derive(Debug, Clone)]
pub struct ScoringContext {
    pub surname: Surname,
    pub needs: ElementNeedProfile,
    pub gender: Gender,
    pub birth_year: Option<i32>,
    pub birth_order: Option<BirthOrder>,
    /// Stem polarity of the chart, when known.
    pub eumyang: Option<EumyangBalance>,
}

impl ScoringContext {
    pub fn new(surname: Surname, needs: ElementNeedProfile, gender: Gender) -> Self {
        Self {
            surname,
            needs,
            gender,
            birth_year: None,
            birth_order: None,
            eumyang: None,
        }
    }

    pub fn with_birth_year(mut self, year: i32) -> Self {
        self.birth_year = Some(year);
        self
    }

    pub fn with_birth_order(mut self, order: BirthOrder) -> Self {
        self.birth_order = Some(order);
        self
    }

    pub fn with_eumyang_balance(mut self, balance: EumyangBalance) -> Self {
        self.eumyang = Some(balance);
        self
    }

    pub fn era(&self) -> Option<EraBucket> {
        self.birth_year.map(EraBucket::from_birth_year)
    }

    pub fn generation(&self) -> Option<Generation> {
        self.era().map(EraBucket::generation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    ElementSupplement,
    EndingSound,
    SyllableFlow,
    EraPhonology,
    GenderFit,
    StrokeHarmony,
    BirthOrder,
}

impl Criterion {
    /// Evaluation order.
    pub const ALL: [Self; 7] = [
        Self::ElementSupplement,
        Self::EndingSound,
        Self::SyllableFlow,
        Self::EraPhonology,
        Self::GenderFit,
        Self::StrokeHarmony,
        Self::BirthOrder,
    ];

    /// Stable identifier, also the config key.
    pub const fn id(self) -> &'static str {
        match self {
            Self::ElementSupplement => "element_supplement",
            Self::EndingSound => "ending_sound",
            Self::SyllableFlow => "syllable_flow",
            Self::EraPhonology => "era_phonology",
            Self::GenderFit => "gender_fit",
            Self::StrokeHarmony => "stroke_harmony",
            Self::BirthOrder => "birth_order",
        }
    }

    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::ElementSupplement => "오행 보완",
            Self::EndingSound => "말음",
            Self::SyllableFlow => "발음 흐름",
            Self::EraPhonology => "시대 감각",
            Self::GenderFit => "성별 조화",
            Self::StrokeHarmony => "획수·뜻 조화",
            Self::BirthOrder => "항렬 순서",
        }
    }

    pub const fn max(self) -> f64 {
        5.0
    }

    /// Whether the criterion participates for this context.
    pub const fn applies(self, ctx: &ScoringContext) -> bool {
        match self {
            Self::BirthOrder => ctx.birth_order.is_some(),
            _ => true,
        }
    }

    /// Sub-score in `[0, max]`.
    pub fn evaluate(self, first: &HanjaEntry, second: &HanjaEntry, ctx: &ScoringContext) -> f64 {
        let raw = match self {
            Self::ElementSupplement => element_supplement(first, second, &ctx.needs, ctx.eumyang),
            Self::EndingSound => ending_sound(first, second, ctx),
            Self::SyllableFlow => syllable_flow(first, second, ctx),
            Self::EraPhonology => era_phonology(first, second, ctx),
            Self::GenderFit => gender_fit(first, second, ctx.gender),
            Self::StrokeHarmony => stroke_harmony(first, second),
            Self::BirthOrder => match ctx.birth_order {
                Some(order) => birth_order(first, second, order),
                None => 0.0,
            },
        };
        raw.clamp(0.0, self.max())
    }
}

fn mixed_polarity(first: &HanjaEntry, second: &HanjaEntry) -> bool {
    matches!(
        (first.polarity, second.polarity),
        (Eumyang::Yang, Eumyang::Eum) | (Eumyang::Eum, Eumyang::Yang)
    )
}

/// Both characters carry the polarity the chart's stems are short of.
fn offsets_imbalance(
    first: &HanjaEntry,
    second: &HanjaEntry,
    balance: Option<EumyangBalance>,
) -> bool {
    let Some(b) = balance else {
        return false;
    };
    match (first.polarity, second.polarity) {
        (Eumyang::Yang, Eumyang::Yang) => b.eum > b.yang,
        (Eumyang::Eum, Eumyang::Eum) => b.yang > b.eum,
        _ => false,
    }
}

/// Required elements supplied by primary elements, and the further required
/// elements supplied only by secondary elements.
pub fn supplied_elements(
    first: &HanjaEntry,
    second: &HanjaEntry,
    needs: &ElementNeedProfile,
) -> (OhangSet, OhangSet) {
    let primaries: OhangSet = [first.primary_element, second.primary_element]
        .into_iter()
        .collect();
    let secondaries: OhangSet = [first.secondary_element, second.secondary_element]
        .into_iter()
        .flatten()
        .collect();
    let by_primary = OhangSet::from_iter(primaries.iter().filter(|o| needs.is_required(*o)));
    let by_secondary = OhangSet::from_iter(
        secondaries
            .difference(by_primary)
            .iter()
            .filter(|o| needs.is_required(*o)),
    );
    (by_primary, by_secondary)
}

// ---------------------------------------------------------------------------
// Element supplementation
// ---------------------------------------------------------------------------

const PRIMARY_MATCH: f64 = 2.0;
const SECONDARY_MATCH: f64 = 1.0;
const PRIMARY_PENALTY: f64 = 1.5;
const SECONDARY_PENALTY: f64 = 0.8;
const POLARITY_MIX_BONUS: f64 = 0.5;
const IMBALANCE_OFFSET_BONUS: f64 = 0.4;

fn element_supplement(
    first: &HanjaEntry,
    second: &HanjaEntry,
    needs: &ElementNeedProfile,
    balance: Option<EumyangBalance>,
) -> f64 {
    let (by_primary, by_secondary) = supplied_elements(first, second, needs);
    let mut score =
        PRIMARY_MATCH * by_primary.len() as f64 + SECONDARY_MATCH * by_secondary.len() as f64;

    if !needs.penalized.is_empty() {
        let primaries: OhangSet = [first.primary_element, second.primary_element]
            .into_iter()
            .collect();
        let secondaries: OhangSet = [first.secondary_element, second.secondary_element]
            .into_iter()
            .flatten()
            .collect();
        let bad_primary = OhangSet::from_iter(primaries.iter().filter(|o| needs.is_penalized(*o)));
        let bad_secondary = OhangSet::from_iter(
            secondaries
                .difference(bad_primary)
                .iter()
                .filter(|o| needs.is_penalized(*o)),
        );
        score -= PRIMARY_PENALTY * bad_primary.len() as f64;
        score -= SECONDARY_PENALTY * bad_secondary.len() as f64;
    }

    if mixed_polarity(first, second) {
        score += POLARITY_MIX_BONUS;
    } else if offsets_imbalance(first, second, balance) {
        score += IMBALANCE_OFFSET_BONUS;
    }
    score
}

// ---------------------------------------------------------------------------
// Ending sound and era phonology
// ---------------------------------------------------------------------------

fn given_name(first: &HanjaEntry, second: &HanjaEntry) -> String {
    format!("{}{}", first.reading, second.reading)
}

fn ending_sound(first: &HanjaEntry, second: &HanjaEntry, ctx: &ScoringContext) -> f64 {
    match ctx.generation() {
        Some(generation) => {
            let full = format!("{}{}", ctx.surname.reading, given_name(first, second));
            maleum_score(&full, ctx.gender, generation)
        }
        None => NEUTRAL_SCORE,
    }
}

/// Share of the era score carried by phonology (the rest is recorded affinity).
const ERA_PHONOLOGY_CEILING: f64 = 3.0;
const ERA_AFFINITY_CEILING: f64 = 2.0;

fn era_phonology(first: &HanjaEntry, second: &HanjaEntry, ctx: &ScoringContext) -> f64 {
    let Some(era) = ctx.era() else {
        return NEUTRAL_SCORE;
    };
    let profile = analyze_phonetics(&given_name(first, second));
    let phonology = era_fit(&profile, era) * ERA_PHONOLOGY_CEILING / ERA_FIT_MAX;
    let generation = era.generation();
    let affinity = (first.era.affinity(generation) + second.era.affinity(generation)) / 2.0;
    phonology + affinity * ERA_AFFINITY_CEILING
}

// ---------------------------------------------------------------------------
// Syllable flow
// ---------------------------------------------------------------------------

const FLOW_BASE: f64 = 3.5;
const FLOW_BONUS: f64 = 0.5;
const COLLISION_PENALTY: f64 = 0.8;
const REPEAT_PENALTY: f64 = 0.5;
const CODA_PILEUP_PENALTY: f64 = 0.5;
const BLACKLIST_SCORE: f64 = 0.3;

/// Given names that read as common nouns with unfortunate meanings.
const BLACKLIST: &[&str] = &[
    "사고", "사망", "고름", "방구", "대변", "소변", "분노", "이상", "구토", "사기", "호구", "장애",
    "치매", "변비", "가난", "부패", "시체", "기생", "노망", "도둑",
];

pub fn is_blacklisted(given: &str) -> bool {
    BLACKLIST.contains(&given)
}

fn syllable_flow(first: &HanjaEntry, second: &HanjaEntry, ctx: &ScoringContext) -> f64 {
    let given = given_name(first, second);
    if is_blacklisted(&given) {
        return BLACKLIST_SCORE;
    }
    let surname = decompose(&ctx.surname.reading);
    let name = decompose(&given);
    let Some(lead) = name.first() else {
        return FLOW_BASE;
    };

    let mut score = FLOW_BASE;

    if let Some(generation) = ctx.generation() {
        if generation.preferred_first_onsets().contains(&lead.onset) {
            score += FLOW_BONUS;
        }
        if generation.preferred_first_nuclei().contains(&lead.nucleus) {
            score += FLOW_BONUS;
        }
    }
    if let Some(sur) = surname.last() {
        if is_soft_coda(sur.coda) && is_soft_onset(lead.onset) {
            score += FLOW_BONUS;
        }
    }

    let full: Vec<&Syllable> = surname.iter().chain(name.iter()).collect();
    for pair in full.windows(2) {
        if is_hard_coda(pair[0].coda) && is_strong_onset(pair[1].onset) {
            score -= COLLISION_PENALTY;
        }
    }

    if let [a, b] = name.as_slice() {
        if a.onset == b.onset {
            score -= REPEAT_PENALTY;
        }
        if a.nucleus == b.nucleus {
            score -= REPEAT_PENALTY;
        }
    }

    let codas = full.iter().filter(|s| s.has_coda()).count();
    if codas >= 2 {
        score -= CODA_PILEUP_PENALTY;
    }
    if codas >= 3 {
        score -= CODA_PILEUP_PENALTY;
    }
    score
}

// ---------------------------------------------------------------------------
// Gender fit
// ---------------------------------------------------------------------------

fn gender_fit(first: &HanjaEntry, second: &HanjaEntry, gender: Gender) -> f64 {
    let matching = [first, second]
        .iter()
        .filter(|h| h.gender.matches(gender))
        .count();
    let opposing = [first, second]
        .iter()
        .filter(|h| h.gender.matches(gender.opposite()))
        .count();
    match (matching, opposing) {
        (2, _) => 5.0,
        (1, 0) => 4.0,
        (0, 0) => 3.0,
        (1, _) => 2.5,
        (0, 1) => 2.0,
        _ => 0.75,
    }
}

// ---------------------------------------------------------------------------
// Stroke / meaning harmony
// ---------------------------------------------------------------------------

fn stroke_harmony(first: &HanjaEntry, second: &HanjaEntry) -> f64 {
    let total = first.strokes + second.strokes;
    let mut score = 3.0;
    if (18..=28).contains(&total) {
        score += 1.0;
        if (21..=25).contains(&total) {
            score += 0.5;
        }
    }
    if !(12..=35).contains(&total) {
        score -= 1.0;
    }
    if !first.meaning.is_empty() && first.meaning == second.meaning {
        score -= 0.5;
    }
    if mixed_polarity(first, second) {
        score += 0.5;
    }
    score
}

// ---------------------------------------------------------------------------
// Birth order
// ---------------------------------------------------------------------------

fn birth_order(first: &HanjaEntry, second: &HanjaEntry, order: BirthOrder) -> f64 {
    let mut score = 3.0;
    for h in [first, second] {
        let glyph = h.character.as_str();
        if order.preferred_glyphs().contains(&glyph) {
            score += 1.0;
        } else if BirthOrder::ALL
            .iter()
            .any(|o| *o != order && o.preferred_glyphs().contains(&glyph))
        {
            score -= 1.0;
        }
    }
    score
}
