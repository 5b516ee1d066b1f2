//! High-level functions chaining chart → structure → needs → ranking.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use jakmyeong_hangul::{EraBucket, PhoneticProfile, Syllable, analyze_phonetics, decompose, era_fit};
use jakmyeong_naming::{
    BirthOrder, HanjaDictionary, RankRequest, ReadingMatch, ScoredCandidate, ScoringConfig,
    ScoringContext, Surname, hanja_by_reading, rank,
};
use jakmyeong_saju::{
    Chart, DaeunDirection, DaeunPeriod, ElementNeedProfile, EumyangBalance, StructureAnalysis,
    analyze_structure, compute_chart, daeun, resolve_needs,
};
use jakmyeong_time::Gender;

use crate::error::JakmyeongError;

/// Everything derived from one birth moment.
#[derive(Debug, Clone, Serialize)]
pub struct SajuReport {
    pub chart: Chart,
    pub structure: StructureAnalysis,
    pub needs: ElementNeedProfile,
    pub eumyang: EumyangBalance,
    /// Element shares in canonical order, rounded to whole percent.
    pub element_percentages: [u8; 5],
    pub daeun_direction: DaeunDirection,
    pub daeun: Vec<DaeunPeriod>,
}

/// Compute the full report for a birth date (`YYYY-MM-DD`), hour and
/// optional minute.
pub fn analyze_birth(
    date: &str,
    hour: u8,
    minute: Option<u8>,
    gender: Gender,
) -> Result<SajuReport, JakmyeongError> {
    let chart = compute_chart(date, hour, minute, gender)?;
    Ok(report_for(chart))
}

/// Report for an already computed chart.
pub fn report_for(chart: Chart) -> SajuReport {
    let structure = analyze_structure(&chart);
    let needs = resolve_needs(&chart, &structure);
    let (daeun_direction, periods) = daeun(&chart);
    debug!(
        required = needs.required.len(),
        strength = structure.day_stem_strength.korean_name(),
        "saju report"
    );
    SajuReport {
        eumyang: chart.eumyang_balance(),
        element_percentages: chart.element_percentages(),
        chart,
        structure,
        needs,
        daeun_direction,
        daeun: periods.to_vec(),
    }
}

/// Naming preferences layered on top of a [`SajuReport`].
#[derive(Debug, Clone)]
pub struct NameQuery {
    pub surname: Surname,
    /// Requested gender; defaults to the chart subject's.
    pub gender: Option<Gender>,
    /// Era for phonology; defaults to the chart's birth year.
    pub birth_year: Option<i32>,
    pub birth_order: Option<BirthOrder>,
    pub preferred_first: Option<String>,
    pub preferred_second: Option<String>,
}

impl NameQuery {
    pub fn new(surname: Surname) -> Self {
        Self {
            surname,
            gender: None,
            birth_year: None,
            birth_order: None,
            preferred_first: None,
            preferred_second: None,
        }
    }

    fn request(&self, report: &SajuReport) -> RankRequest {
        let chart = &report.chart;
        let mut context = ScoringContext::new(
            self.surname.clone(),
            report.needs.clone(),
            self.gender.unwrap_or(chart.gender),
        )
        .with_birth_year(self.birth_year.unwrap_or(chart.birth.date.year))
        .with_eumyang_balance(report.eumyang);
        if let Some(order) = self.birth_order {
            context = context.with_birth_order(order);
        }
        let mut req = RankRequest::new(context);
        if let Some(first) = &self.preferred_first {
            req = req.with_preferred_first(first);
        }
        if let Some(second) = &self.preferred_second {
            req = req.with_preferred_second(second);
        }
        req
    }
}

/// Best names from `dictionary` for the report's needs.
pub fn recommend_names(
    report: &SajuReport,
    dictionary: &HanjaDictionary,
    query: &NameQuery,
    config: &ScoringConfig,
) -> Vec<ScoredCandidate> {
    rank(dictionary.entries(), &query.request(report), config)
}

/// Characters read as `reading`, those supplying a needed element first.
pub fn lookup_reading(
    report: &SajuReport,
    dictionary: &HanjaDictionary,
    reading: &str,
) -> Vec<ReadingMatch> {
    hanja_by_reading(dictionary.entries(), reading, &report.needs)
}

/// Load a JSON dictionary.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<HanjaDictionary, JakmyeongError> {
    Ok(HanjaDictionary::load(path)?)
}

/// Load a TOML scoring config, or the defaults when `path` is `None`.
pub fn load_config<P: AsRef<Path>>(path: Option<P>) -> Result<ScoringConfig, JakmyeongError> {
    match path {
        Some(p) => Ok(ScoringConfig::load(p)?),
        None => Ok(ScoringConfig::default()),
    }
}

/// Phonology of a Korean string.
#[derive(Debug, Clone, Serialize)]
pub struct NamePhonology {
    pub syllables: Vec<Syllable>,
    pub profile: PhoneticProfile,
    pub era: Option<EraBucket>,
    pub era_fit: Option<f64>,
}

/// Decompose `text` and, with a birth year, rate it against that era.
pub fn phonology(text: &str, birth_year: Option<i32>) -> NamePhonology {
    let profile = analyze_phonetics(text);
    let era = birth_year.map(EraBucket::from_birth_year);
    NamePhonology {
        syllables: decompose(text),
        era_fit: era.map(|e| era_fit(&profile, e)),
        profile,
        era,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_carries_ten_periods() {
        let r = analyze_birth("1990-03-15", 10, Some(0), Gender::Male).unwrap();
        assert_eq!(r.daeun.len(), 10);
        assert_eq!(r.daeun_direction, DaeunDirection::Reverse);
        assert_eq!(r.element_percentages, [38, 38, 0, 25, 0]);
        assert_eq!((r.eumyang.yang, r.eumyang.eum), (1, 3));
    }

    #[test]
    fn request_carries_chart_balance() {
        let r = analyze_birth("1990-03-15", 10, Some(0), Gender::Male).unwrap();
        let req = NameQuery::new(Surname::new("김")).request(&r);
        assert_eq!(req.context.eumyang, Some(r.eumyang));
        assert_eq!(req.context.birth_year, Some(1990));
    }

    #[test]
    fn invalid_input_surfaces() {
        assert!(analyze_birth("1990-02-30", 10, None, Gender::Male).is_err());
        assert!(analyze_birth("1990-03-15", 24, None, Gender::Male).is_err());
    }

    #[test]
    fn phonology_without_year() {
        let p = phonology("서윤", None);
        assert_eq!(p.syllables.len(), 2);
        assert!(p.era.is_none() && p.era_fit.is_none());
        let q = phonology("서윤", Some(2021));
        assert_eq!(q.era, Some(EraBucket::Y2020s));
        assert!(q.era_fit.is_some());
    }
}
