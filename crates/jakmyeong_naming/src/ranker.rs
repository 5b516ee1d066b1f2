//! Pairwise candidate enumeration, filtering and top-k ordering.
//!
//! Enumerates ordered pairs `(i, j)`, `i != j`, in dictionary order, scores
//! every surviving pair into a small key and keeps the best `top_k` keys,
//! ordered on:
//!
//! 1. final score at 3-decimal granularity, descending
//! 2. deficient match, descending
//! 3. ending-sound sub-score, descending
//! 4. syllable-flow sub-score, descending
//! 5. distance of the stroke total from the ideal, ascending
//!
//! Equal keys keep enumeration order, so output is reproducible. Full
//! candidates are built only for the kept keys.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use serde::Serialize;
use tracing::debug;

use jakmyeong_saju::ElementNeedProfile;

use crate::config::ScoringConfig;
use crate::criteria::{Criterion, ScoringContext};
use crate::hanja::HanjaEntry;
use crate::scorer::{ScoredCandidate, deficient_match, score_candidate, weighted_scores};

/// Everything needed for one ranking run besides the dictionary.
#[derive(Debug, Clone)]
pub struct RankRequest {
    pub context: ScoringContext,
    /// Reading or glyph that must occupy the first position.
    pub preferred_first: Option<String>,
    /// Reading or glyph that must occupy the second position.
    pub preferred_second: Option<String>,
}

impl RankRequest {
    pub fn new(context: ScoringContext) -> Self {
        Self {
            context,
            preferred_first: None,
            preferred_second: None,
        }
    }

    pub fn with_preferred_first(mut self, input: &str) -> Self {
        self.preferred_first = non_empty(input);
        self
    }

    pub fn with_preferred_second(mut self, input: &str) -> Self {
        self.preferred_second = non_empty(input);
        self
    }
}

fn non_empty(input: &str) -> Option<String> {
    let t = input.trim();
    (!t.is_empty()).then(|| t.to_string())
}

/// How an enumerated pair maps onto (first, second).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Orientation {
    AsGiven,
    Swapped,
}

/// Apply preferred-character constraints to an ordered pair.
///
/// Returns `None` when the pair does not satisfy the constraint. A swapped
/// pair is also produced as-given by the reverse enumeration.
fn orient(a: &HanjaEntry, b: &HanjaEntry, req: &RankRequest) -> Option<Orientation> {
    use Orientation::{AsGiven, Swapped};
    match (req.preferred_first.as_deref(), req.preferred_second.as_deref()) {
        (None, None) => Some(AsGiven),
        (Some(p), second) => {
            let (orientation, other) = match (a.matches(p), b.matches(p)) {
                (true, false) => (AsGiven, b),
                (false, true) => (Swapped, a),
                _ => return None,
            };
            match second {
                Some(q) if !other.matches(q) => None,
                _ => Some(orientation),
            }
        }
        (None, Some(q)) => match (a.matches(q), b.matches(q)) {
            (false, true) => Some(AsGiven),
            (true, false) => Some(Swapped),
            _ => None,
        },
    }
}

/// Sort key of a scored pair. Orders best first; `ordinal` is the position
/// at which enumeration first produced the pair.
#[derive(Debug, Clone, Copy)]
struct RankKey {
    score: i64,
    deficient_match: f64,
    ending: f64,
    flow: f64,
    stroke_distance: u32,
    ordinal: usize,
    first: usize,
    second: usize,
}

impl RankKey {
    fn score(
        usable: &[&HanjaEntry],
        (first, second): (usize, usize),
        ordinal: usize,
        ctx: &ScoringContext,
        config: &ScoringConfig,
    ) -> Self {
        let (a, b) = (usable[first], usable[second]);
        let (scores, final_score) = weighted_scores(a, b, ctx, &config.weights);
        let sub = |criterion: Criterion| {
            scores
                .iter()
                .find(|s| s.criterion == criterion)
                .map_or(0.0, |s| s.score)
        };
        Self {
            score: (final_score * 1000.0).round() as i64,
            deficient_match: deficient_match(a, b, &ctx.needs),
            ending: sub(Criterion::EndingSound),
            flow: sub(Criterion::SyllableFlow),
            stroke_distance: (a.strokes + b.strokes).abs_diff(config.ideal_stroke_total),
            ordinal,
            first,
            second,
        }
    }
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.deficient_match.total_cmp(&self.deficient_match))
            .then_with(|| other.ending.total_cmp(&self.ending))
            .then_with(|| other.flow.total_cmp(&self.flow))
            .then_with(|| self.stroke_distance.cmp(&other.stroke_distance))
            .then_with(|| self.ordinal.cmp(&other.ordinal))
    }
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RankKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankKey {}

/// Keeps the `k` best keys seen so far; the heap top is the worst kept.
struct TopK {
    k: usize,
    heap: BinaryHeap<RankKey>,
}

impl TopK {
    fn new(k: usize) -> Self {
        Self {
            k,
            heap: BinaryHeap::with_capacity(k.saturating_add(1).min(1024)),
        }
    }

    fn offer(&mut self, key: RankKey) {
        if self.heap.len() < self.k {
            self.heap.push(key);
        } else if let Some(mut worst) = self.heap.peek_mut() {
            if key < *worst {
                *worst = key;
            }
        }
    }

    /// Best first.
    fn into_sorted(self) -> Vec<RankKey> {
        self.heap.into_sorted_vec()
    }
}

/// Best `config.top_k` two-character names from `entries`, best first.
///
/// Incomplete entries, entries colliding with the surname and repeated
/// (reading, glyph) entries are skipped. Only the best `top_k` pairs are
/// retained while enumerating. An empty result is a normal outcome.
pub fn rank(
    entries: &[HanjaEntry],
    req: &RankRequest,
    config: &ScoringConfig,
) -> Vec<ScoredCandidate> {
    let ctx = &req.context;
    let mut distinct = HashSet::new();
    let usable: Vec<&HanjaEntry> = entries
        .iter()
        .filter(|e| e.is_complete() && !ctx.surname.collides_with(e))
        .filter(|e| distinct.insert((e.reading.as_str(), e.character.as_str())))
        .collect();

    let n = usable.len();
    let constrained = req.preferred_first.is_some() || req.preferred_second.is_some();
    let mut best = TopK::new(config.top_k);
    let mut pairs = 0usize;
    let mut rejected = 0usize;
    let mut scored = 0usize;

    for (i, a) in usable.iter().enumerate() {
        for (j, b) in usable.iter().enumerate() {
            if i == j {
                continue;
            }
            pairs += 1;
            if a.reading == b.reading {
                rejected += 1;
                continue;
            }
            match orient(a, b, req) {
                None => rejected += 1,
                Some(Orientation::Swapped) => {}
                Some(Orientation::AsGiven) => {
                    // a constrained pair was first met at its lower row
                    let ordinal = if constrained {
                        i.min(j) * n + i.max(j)
                    } else {
                        i * n + j
                    };
                    scored += 1;
                    best.offer(RankKey::score(&usable, (i, j), ordinal, ctx, config));
                }
            }
        }
    }

    let candidates: Vec<ScoredCandidate> = best
        .into_sorted()
        .into_iter()
        .map(|k| score_candidate(usable[k.first], usable[k.second], ctx, &config.weights))
        .collect();

    debug!(
        entries = entries.len(),
        usable = n,
        pairs,
        rejected,
        scored,
        kept = candidates.len(),
        "ranked name candidates"
    );
    candidates
}

/// A dictionary character matching a reading lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingMatch {
    pub entry: HanjaEntry,
    /// 1 when the primary element is required, else 0.
    pub fit_score: u8,
    pub fit_reason: String,
}

/// Every entry whose reading or glyph equals `input`, required elements first.
pub fn hanja_by_reading(
    entries: &[HanjaEntry],
    input: &str,
    needs: &ElementNeedProfile,
) -> Vec<ReadingMatch> {
    let input = input.trim();
    let mut matches: Vec<ReadingMatch> = entries
        .iter()
        .filter(|e| e.matches(input))
        .map(|e| {
            let element = e.primary_element.name();
            let (fit_score, fit_reason) = if needs.is_required(e.primary_element) {
                (1, format!("{element} 기운 보완에 좋음"))
            } else {
                (0, format!("{element} 오행"))
            };
            ReadingMatch {
                entry: e.clone(),
                fit_score,
                fit_reason,
            }
        })
        .collect();
    matches.sort_by(|a, b| b.fit_score.cmp(&a.fit_score));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hanja::Surname;
    use jakmyeong_saju::{Ohang, OhangSet};
    use jakmyeong_time::Gender;

    fn needs(req: &[Ohang]) -> ElementNeedProfile {
        ElementNeedProfile::requiring(req.iter().copied().collect::<OhangSet>())
    }

    fn request() -> RankRequest {
        RankRequest::new(ScoringContext::new(
            Surname::with_hanja("김", "金"),
            needs(&[Ohang::Su]),
            Gender::Female,
        ))
    }

    fn small() -> Vec<HanjaEntry> {
        vec![
            HanjaEntry::new("潤", "윤", Ohang::Su, 15),
            HanjaEntry::new("允", "윤", Ohang::To, 4),
            HanjaEntry::new("金", "금", Ohang::Geum, 8),
            HanjaEntry::new("序", "서", Ohang::Geum, 7),
            HanjaEntry::new("", "아", Ohang::To, 8),
        ]
    }

    #[test]
    fn orient_swaps_preferred_into_place() {
        let a = HanjaEntry::new("序", "서", Ohang::Geum, 7);
        let b = HanjaEntry::new("潤", "윤", Ohang::Su, 15);
        let req = request().with_preferred_first("윤");
        assert_eq!(orient(&a, &b, &req), Some(Orientation::Swapped));
        assert_eq!(orient(&b, &a, &req), Some(Orientation::AsGiven));

        let req = request().with_preferred_second("潤");
        assert_eq!(orient(&b, &a, &req), Some(Orientation::Swapped));
        assert_eq!(orient(&a, &b, &req), Some(Orientation::AsGiven));

        let req = request().with_preferred_first("하");
        assert!(orient(&a, &b, &req).is_none());

        let req = request().with_preferred_first("서").with_preferred_second("하");
        assert!(orient(&a, &b, &req).is_none());
    }

    #[test]
    fn top_k_keeps_best_keys_in_order() {
        let key = |score: i64, ordinal: usize| RankKey {
            score,
            deficient_match: 0.0,
            ending: 0.0,
            flow: 0.0,
            stroke_distance: 0,
            ordinal,
            first: 0,
            second: 0,
        };
        let mut best = TopK::new(3);
        for (ordinal, score) in [10, 50, 20, 50, 40, 5].into_iter().enumerate() {
            best.offer(key(score, ordinal));
        }
        let kept: Vec<(i64, usize)> = best
            .into_sorted()
            .iter()
            .map(|k| (k.score, k.ordinal))
            .collect();
        assert_eq!(kept, vec![(50, 1), (50, 3), (40, 4)]);

        let mut none = TopK::new(0);
        none.offer(key(1, 0));
        assert!(none.into_sorted().is_empty());
    }

    #[test]
    fn duplicate_entries_score_once() {
        let mut entries = small();
        entries.push(HanjaEntry::new("序", "서", Ohang::Geum, 7));
        let out = rank(&entries, &request(), &ScoringConfig::default());
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn exclusions_apply() {
        let out = rank(&small(), &request(), &ScoringConfig::default());
        // usable: 潤 允 序; 潤/允 share a reading
        assert_eq!(out.len(), 4);
        for c in &out {
            assert_ne!(c.first.reading, c.second.reading);
            assert_ne!(c.first.character, "金");
            assert_ne!(c.second.character, "金");
            assert!(c.first.is_complete() && c.second.is_complete());
        }
    }

    #[test]
    fn empty_dictionary_is_empty() {
        assert!(rank(&[], &request(), &ScoringConfig::default()).is_empty());
    }

    #[test]
    fn top_k_truncates() {
        let config = ScoringConfig {
            top_k: 2,
            ..ScoringConfig::default()
        };
        assert_eq!(rank(&small(), &request(), &config).len(), 2);
    }

    #[test]
    fn reading_lookup_puts_required_first() {
        let out = hanja_by_reading(&small(), "윤", &needs(&[Ohang::To]));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].entry.character, "允");
        assert_eq!(out[0].fit_score, 1);
        assert_eq!(out[0].fit_reason, "토 기운 보완에 좋음");
        assert_eq!(out[1].fit_reason, "수 오행");
        assert!(hanja_by_reading(&small(), "", &needs(&[Ohang::To])).is_empty());
    }
}
