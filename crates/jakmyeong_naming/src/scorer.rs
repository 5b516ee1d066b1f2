//! Combines criterion sub-scores into one ranked candidate.

use serde::Serialize;

use jakmyeong_saju::ElementNeedProfile;

use crate::config::CriterionWeights;
use crate::criteria::{Criterion, ScoringContext, supplied_elements};
use crate::hanja::HanjaEntry;

/// Explanation used when a pair supplies no required element.
pub const BALANCED_EXPLANATION: &str = "균형 잡힌 이름";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriterionScore {
    pub criterion: Criterion,
    pub score: f64,
    pub weight: f64,
}

/// A scored two-character given name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    /// Surname plus both readings, e.g. "김하준".
    pub full_name: String,
    /// Both glyphs, e.g. "夏俊".
    pub hanja_name: String,
    pub first: HanjaEntry,
    pub second: HanjaEntry,
    /// Active criteria in evaluation order.
    pub scores: Vec<CriterionScore>,
    /// Weighted mean, three decimals.
    pub final_score: f64,
    pub deficient_match: f64,
    pub stroke_total: u32,
    pub explanation: String,
}

impl ScoredCandidate {
    /// Sub-score of `criterion`, if it was active.
    pub fn score_of(&self, criterion: Criterion) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| s.criterion == criterion)
            .map(|s| s.score)
    }

    /// Given name readings only.
    pub fn given_name(&self) -> String {
        format!("{}{}", self.first.reading, self.second.reading)
    }
}

/// Tie-break weight of the required elements a pair supplies.
pub fn deficient_match(first: &HanjaEntry, second: &HanjaEntry, needs: &ElementNeedProfile) -> f64 {
    let (by_primary, by_secondary) = supplied_elements(first, second, needs);
    by_primary.len() as f64 + 0.5 * by_secondary.len() as f64
}

/// Human-readable summary of the required elements supplied by primaries.
pub fn explanation(first: &HanjaEntry, second: &HanjaEntry, needs: &ElementNeedProfile) -> String {
    let (by_primary, _) = supplied_elements(first, second, needs);
    if by_primary.is_empty() {
        return BALANCED_EXPLANATION.to_string();
    }
    by_primary
        .iter()
        .map(|o| format!("{} 기운 보완", o.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// Active sub-scores of an ordered pair and their weighted mean.
pub(crate) fn weighted_scores(
    first: &HanjaEntry,
    second: &HanjaEntry,
    ctx: &ScoringContext,
    weights: &CriterionWeights,
) -> (Vec<CriterionScore>, f64) {
    let scores: Vec<CriterionScore> = Criterion::ALL
        .iter()
        .filter(|c| c.applies(ctx))
        .map(|&c| CriterionScore {
            criterion: c,
            score: c.evaluate(first, second, ctx),
            weight: weights.get(c),
        })
        .collect();

    let weight_sum: f64 = scores.iter().map(|s| s.weight).sum();
    let weighted: f64 = scores.iter().map(|s| s.score * s.weight).sum();
    let final_score = if weight_sum > 0.0 {
        round3(weighted / weight_sum)
    } else {
        0.0
    };
    (scores, final_score)
}

/// Score one ordered pair. Exclusion rules are the ranker's concern.
pub fn score_candidate(
    first: &HanjaEntry,
    second: &HanjaEntry,
    ctx: &ScoringContext,
    weights: &CriterionWeights,
) -> ScoredCandidate {
    let (scores, final_score) = weighted_scores(first, second, ctx, weights);
    ScoredCandidate {
        full_name: format!("{}{}{}", ctx.surname.reading, first.reading, second.reading),
        hanja_name: format!("{}{}", first.character, second.character),
        first: first.clone(),
        second: second.clone(),
        scores,
        final_score,
        deficient_match: deficient_match(first, second, &ctx.needs),
        stroke_total: first.strokes + second.strokes,
        explanation: explanation(first, second, &ctx.needs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hanja::{BirthOrder, Surname};
    use jakmyeong_saju::{Ohang, OhangSet};
    use jakmyeong_time::Gender;

    fn ctx(required: &[Ohang]) -> ScoringContext {
        ScoringContext::new(
            Surname::new("김"),
            ElementNeedProfile::requiring(required.iter().copied().collect::<OhangSet>()),
            Gender::Male,
        )
    }

    #[test]
    fn final_is_weighted_mean() {
        let a = HanjaEntry::new("潤", "윤", Ohang::Su, 15);
        let b = HanjaEntry::new("林", "림", Ohang::Mok, 8);
        let c = ctx(&[Ohang::Su, Ohang::Mok]);
        let w = CriterionWeights::default();
        let s = score_candidate(&a, &b, &c, &w);
        assert_eq!(s.scores.len(), 6);
        let num: f64 = s.scores.iter().map(|x| x.score * x.weight).sum();
        let den: f64 = s.scores.iter().map(|x| x.weight).sum();
        assert!((s.final_score - num / den).abs() <= 0.0005);
        assert!(s.final_score >= 0.0 && s.final_score <= 5.0);
        assert_eq!(s.full_name, "김윤림");
        assert_eq!(s.hanja_name, "潤林");
        assert_eq!(s.stroke_total, 23);
    }

    #[test]
    fn birth_order_joins_only_when_given() {
        let a = HanjaEntry::new("元", "원", Ohang::Mok, 4);
        let b = HanjaEntry::new("潤", "윤", Ohang::Su, 15);
        let w = CriterionWeights::default();
        let without = score_candidate(&a, &b, &ctx(&[Ohang::Su]), &w);
        assert_eq!(without.score_of(Criterion::BirthOrder), None);
        let with = score_candidate(
            &a,
            &b,
            &ctx(&[Ohang::Su]).with_birth_order(BirthOrder::First),
            &w,
        );
        assert_eq!(with.score_of(Criterion::BirthOrder), Some(4.0));
        assert_eq!(with.scores.len(), 7);
    }

    #[test]
    fn deficient_match_and_explanation() {
        let mut a = HanjaEntry::new("潤", "윤", Ohang::Su, 15);
        a.secondary_element = Some(Ohang::Mok);
        let b = HanjaEntry::new("炫", "현", Ohang::Hwa, 9);
        let needs = ElementNeedProfile::requiring([Ohang::Su, Ohang::Mok].into_iter().collect());
        assert_eq!(deficient_match(&a, &b, &needs), 1.5);
        assert_eq!(explanation(&a, &b, &needs), "수 기운 보완");

        let fire_only = ElementNeedProfile::requiring([Ohang::To].into_iter().collect());
        assert_eq!(deficient_match(&a, &b, &fire_only), 0.0);
        assert_eq!(explanation(&a, &b, &fire_only), BALANCED_EXPLANATION);
    }

    #[test]
    fn explanation_lists_in_element_order() {
        let a = HanjaEntry::new("潤", "윤", Ohang::Su, 15);
        let b = HanjaEntry::new("林", "림", Ohang::Mok, 8);
        let needs = ElementNeedProfile::requiring([Ohang::Su, Ohang::Mok].into_iter().collect());
        assert_eq!(explanation(&a, &b, &needs), "목 기운 보완, 수 기운 보완");
    }
}
