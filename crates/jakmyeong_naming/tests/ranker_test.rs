//! Behavioural properties of the ranker over a 20-character dictionary.

use std::cmp::Ordering;
use std::collections::HashSet;

use jakmyeong_naming::{
    BirthOrder, Criterion, EraAffinity, GenderAffinity, HanjaEntry, RankRequest, ScoredCandidate,
    ScoringConfig, ScoringContext, Surname, rank, score_candidate,
};
use jakmyeong_saju::{Eumyang, Ohang, analyze_structure, compute_chart, resolve_needs};
use jakmyeong_time::Gender;

fn entry(
    c: &str,
    r: &str,
    e: Ohang,
    strokes: u32,
    pol: Eumyang,
    gender: GenderAffinity,
    era: EraAffinity,
) -> HanjaEntry {
    let mut h = HanjaEntry::new(c, r, e, strokes);
    h.polarity = pol;
    h.gender = gender;
    h.era = era;
    h
}

fn dictionary() -> Vec<HanjaEntry> {
    use EraAffinity::*;
    use Eumyang::*;
    use GenderAffinity::{Female, Male, Neutral};
    use Ohang::*;
    vec![
        entry("林", "림", Mok, 8, Eum, Neutral, Mid),
        entry("東", "동", Mok, 8, Yang, Male, Traditional),
        entry("柱", "주", Mok, 9, Yang, Male, New),
        entry("建", "건", Mok, 9, Yang, Male, New),
        entry("彬", "빈", Mok, 11, Eum, Female, Latest),
        entry("炫", "현", Hwa, 9, Yang, Male, New),
        entry("夏", "하", Hwa, 10, Yang, Neutral, Latest),
        entry("俊", "준", Hwa, 9, Yang, Male, Latest),
        entry("娜", "나", Hwa, 10, Eum, Female, Latest),
        entry("宇", "우", To, 6, Yang, Male, New),
        entry("允", "윤", To, 4, Yang, Neutral, New),
        entry("娥", "아", To, 10, Eum, Female, Latest),
        entry("序", "서", Geum, 7, Eum, Neutral, Latest),
        entry("錫", "석", Geum, 16, Yang, Male, Traditional),
        entry("金", "금", Geum, 8, Yang, Neutral, All),
        entry("潤", "윤", Su, 15, Yang, Neutral, New),
        entry("浩", "호", Su, 10, Yang, Male, Mid),
        entry("河", "하", Su, 8, Yang, Neutral, Latest),
        entry("沅", "원", Su, 7, Eum, Neutral, New),
        entry("", "율", Su, 11, Eum, Female, Latest),
    ]
}

fn request() -> RankRequest {
    let chart = compute_chart("1990-03-15", 10, Some(0), Gender::Male).unwrap();
    let needs = resolve_needs(&chart, &analyze_structure(&chart));
    RankRequest::new(
        ScoringContext::new(Surname::with_hanja("김", "金"), needs, Gender::Male)
            .with_birth_year(2015),
    )
}

fn run(req: &RankRequest) -> Vec<ScoredCandidate> {
    rank(&dictionary(), req, &ScoringConfig::default())
}

#[test]
fn returns_at_most_eight() {
    let out = run(&request());
    assert_eq!(out.len(), 8);
}

#[test]
fn exclusions_hold() {
    for c in run(&request()) {
        assert_ne!(c.first.reading, c.second.reading, "{}", c.full_name);
        for h in [&c.first, &c.second] {
            assert_ne!(h.reading, "김");
            assert_ne!(h.character, "金");
            assert!(h.is_complete());
        }
        assert!(c.full_name.starts_with('김'));
    }
}

#[test]
fn ordering_is_consistent() {
    let out = run(&request());
    for w in out.windows(2) {
        let a = (w[0].final_score * 1000.0).round() as i64;
        let b = (w[1].final_score * 1000.0).round() as i64;
        assert!(a >= b);
        if a == b {
            assert!(w[0].deficient_match >= w[1].deficient_match);
        }
    }
}

#[test]
fn deterministic_output() {
    let a = serde_json::to_string(&run(&request())).unwrap();
    let b = serde_json::to_string(&run(&request())).unwrap();
    assert_eq!(a, b);
}

#[test]
fn top_candidate_supplies_a_needed_element() {
    let out = run(&request());
    assert!(out[0].deficient_match >= 1.0);
    assert_ne!(out[0].explanation, jakmyeong_naming::BALANCED_EXPLANATION);
}

#[test]
fn criteria_are_within_bounds() {
    for c in run(&request()) {
        assert_eq!(c.scores.len(), 6);
        assert!(c.score_of(Criterion::BirthOrder).is_none());
        for s in &c.scores {
            assert!((0.0..=5.0).contains(&s.score), "{:?}", s);
        }
        assert!((0.0..=5.0).contains(&c.final_score));
    }
}

#[test]
fn preferred_first_is_swapped_into_place() {
    let out = run(&request().with_preferred_first("윤"));
    assert!(!out.is_empty());
    for c in &out {
        assert_eq!(c.first.reading, "윤");
        assert_ne!(c.second.reading, "윤");
    }
    // both glyphs read 윤 and survive as separate candidates
    assert!(out.iter().any(|c| c.first.character == "潤"));
}

#[test]
fn preferred_glyph_second() {
    let out = run(&request().with_preferred_second("浩"));
    assert!(!out.is_empty());
    assert!(out.iter().all(|c| c.second.character == "浩"));
}

#[test]
fn both_preferences_fix_the_name() {
    let out = run(&request().with_preferred_first("하").with_preferred_second("준"));
    // 夏俊 and 河俊
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|c| c.given_name() == "하준"));
}

#[test]
fn birth_order_adds_a_criterion() {
    let mut req = request();
    req.context = req.context.with_birth_order(BirthOrder::First);
    for c in run(&req) {
        assert_eq!(c.scores.len(), 7);
    }
}

#[test]
fn empty_and_fully_excluded() {
    let req = request();
    assert!(rank(&[], &req, &ScoringConfig::default()).is_empty());
    let same = vec![
        HanjaEntry::new("潤", "윤", Ohang::Su, 15),
        HanjaEntry::new("允", "윤", Ohang::To, 4),
        HanjaEntry::new("金", "금", Ohang::Geum, 8),
    ];
    assert!(rank(&same, &req, &ScoringConfig::default()).is_empty());
}

#[test]
fn fewer_than_top_k_when_few_pairs() {
    let small = vec![
        HanjaEntry::new("潤", "윤", Ohang::Su, 15),
        HanjaEntry::new("林", "림", Ohang::Mok, 8),
    ];
    let out = rank(&small, &request(), &ScoringConfig::default());
    assert_eq!(out.len(), 2);
}

/// A few hundred entries with repeating readings and attributes, so many
/// pairs tie on every key.
fn generated(n: u32) -> Vec<HanjaEntry> {
    use EraAffinity::*;
    let elements = [Ohang::Mok, Ohang::Hwa, Ohang::To, Ohang::Geum, Ohang::Su];
    let eras = [Traditional, Mid, New, Latest, All];
    let genders = [
        GenderAffinity::Male,
        GenderAffinity::Female,
        GenderAffinity::Neutral,
    ];
    (0..n)
        .map(|i| {
            let (onset, nucleus) = (i % 19, (i / 3) % 21);
            let coda = [0, 4, 8, 16, 21][(i % 5) as usize];
            let reading = char::from_u32(0xAC00 + (onset * 21 + nucleus) * 28 + coda).unwrap();
            let glyph = char::from_u32(0x4E00 + i).unwrap();
            let mut e = entry(
                &glyph.to_string(),
                &reading.to_string(),
                elements[(i % 5) as usize],
                3 + (i * 7) % 20,
                if i % 2 == 0 { Eumyang::Yang } else { Eumyang::Eum },
                genders[(i % 3) as usize],
                eras[(i / 5 % 5) as usize],
            );
            if i % 4 == 0 {
                e.secondary_element = Some(elements[((i / 4) % 5) as usize]);
            }
            e
        })
        .collect()
}

/// Every distinct oriented pair scored in enumeration order, then a stable
/// sort on the ranking keys.
fn rank_by_full_sort(
    entries: &[HanjaEntry],
    req: &RankRequest,
    config: &ScoringConfig,
) -> Vec<ScoredCandidate> {
    let ctx = &req.context;
    let usable: Vec<&HanjaEntry> = entries
        .iter()
        .filter(|e| e.is_complete() && !ctx.surname.collides_with(e))
        .collect();
    let fits = |e: &HanjaEntry, want: &Option<String>| want.as_deref().is_none_or(|w| e.matches(w));
    let wants_first = |e: &HanjaEntry| req.preferred_first.as_deref().is_some_and(|w| e.matches(w));
    let wants_second =
        |e: &HanjaEntry| req.preferred_second.as_deref().is_some_and(|w| e.matches(w));

    let mut seen = HashSet::new();
    let mut all = Vec::new();
    for (i, a) in usable.iter().enumerate() {
        for (j, b) in usable.iter().enumerate() {
            if i == j || a.reading == b.reading {
                continue;
            }
            let (first, second) = if req.preferred_first.is_some() {
                match (wants_first(*a), wants_first(*b)) {
                    (true, false) => (*a, *b),
                    (false, true) => (*b, *a),
                    _ => continue,
                }
            } else if req.preferred_second.is_some() {
                match (wants_second(*a), wants_second(*b)) {
                    (false, true) => (*a, *b),
                    (true, false) => (*b, *a),
                    _ => continue,
                }
            } else {
                (*a, *b)
            };
            if !fits(second, &req.preferred_second) {
                continue;
            }
            let key = (
                first.reading.clone(),
                second.reading.clone(),
                first.character.clone(),
                second.character.clone(),
            );
            if seen.insert(key) {
                all.push(score_candidate(first, second, ctx, &config.weights));
            }
        }
    }

    let sub = |c: &ScoredCandidate, k: Criterion| c.score_of(k).unwrap_or(0.0);
    let ideal = config.ideal_stroke_total;
    all.sort_by(|a, b| -> Ordering {
        let key = |c: &ScoredCandidate| (c.final_score * 1000.0).round() as i64;
        key(b)
            .cmp(&key(a))
            .then_with(|| b.deficient_match.total_cmp(&a.deficient_match))
            .then_with(|| {
                sub(b, Criterion::EndingSound).total_cmp(&sub(a, Criterion::EndingSound))
            })
            .then_with(|| {
                sub(b, Criterion::SyllableFlow).total_cmp(&sub(a, Criterion::SyllableFlow))
            })
            .then_with(|| a.stroke_total.abs_diff(ideal).cmp(&b.stroke_total.abs_diff(ideal)))
    });
    all.truncate(config.top_k);
    all
}

fn names(out: &[ScoredCandidate]) -> Vec<(String, f64)> {
    out.iter()
        .map(|c| (format!("{}{}", c.full_name, c.hanja_name), c.final_score))
        .collect()
}

#[test]
fn bounded_selection_matches_full_sort() {
    let mut dict = generated(240);
    // repeated records must not produce repeated names
    dict.push(dict[7].clone());
    dict.push(dict[120].clone());
    let req = request();
    let full = names(&rank_by_full_sort(
        &dict,
        &req,
        &ScoringConfig {
            top_k: 25,
            ..ScoringConfig::default()
        },
    ));
    for top_k in [1, 8, 25] {
        let config = ScoringConfig {
            top_k,
            ..ScoringConfig::default()
        };
        let got = rank(&dict, &req, &config);
        assert_eq!(got.len(), top_k);
        assert_eq!(names(&got), full[..top_k]);
    }
}

#[test]
fn bounded_selection_matches_full_sort_with_preferences() {
    let dict = generated(240);
    let first = dict[3].reading.clone();
    let second = dict[11].character.clone();
    let config = ScoringConfig {
        top_k: 12,
        ..ScoringConfig::default()
    };
    for req in [
        request().with_preferred_first(&first),
        request().with_preferred_second(&second),
        request()
            .with_preferred_first(&first)
            .with_preferred_second(&dict[40].reading),
    ] {
        let got = rank(&dict, &req, &config);
        assert!(!got.is_empty());
        assert_eq!(names(&got), names(&rank_by_full_sort(&dict, &req, &config)));
    }
}
