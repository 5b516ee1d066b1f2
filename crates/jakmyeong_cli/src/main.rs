use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use jakmyeong_rs::{
    BirthOrder, DaeunDirection, Gender, NamePhonology, NameQuery, OhangSet, ReadingMatch,
    SajuReport, ScoredCandidate, Surname, analyze_birth, load_config, load_dictionary,
    lookup_reading, phonology, recommend_names,
};

#[derive(Parser)]
#[command(name = "jakmyeong", about = "Saju chart and hanja name ranking CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BirthArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Birth hour (0-23)
    #[arg(long)]
    hour: u8,
    /// Birth minute (0-59), reporting only
    #[arg(long)]
    minute: Option<u8>,
    /// male | female (남 | 여)
    #[arg(long)]
    gender: Gender,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars, structure, needed elements and luck pillars
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Rank two-character names from a dictionary
    Rank {
        /// Path to a JSON hanja dictionary
        #[arg(long)]
        dictionary: PathBuf,
        /// Surname reading, e.g. 김
        #[arg(long)]
        surname: String,
        /// Surname glyph, e.g. 金
        #[arg(long)]
        surname_hanja: Option<String>,
        #[command(flatten)]
        birth: BirthArgs,
        /// Year driving era phonology (default: birth year)
        #[arg(long)]
        birth_year: Option<i32>,
        /// first | middle | last
        #[arg(long)]
        birth_order: Option<BirthOrder>,
        /// Reading or glyph required in the first position
        #[arg(long)]
        first: Option<String>,
        /// Reading or glyph required in the second position
        #[arg(long)]
        second: Option<String>,
        /// Scoring config (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Characters with a given reading, needed elements first
    Lookup {
        /// Path to a JSON hanja dictionary
        #[arg(long)]
        dictionary: PathBuf,
        /// Reading or glyph to look up
        #[arg(long)]
        reading: String,
        #[command(flatten)]
        birth: BirthArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Jamo indices and phonetic profile of Korean text
    Decompose {
        /// Korean text
        text: String,
        /// Rate against this birth year's era
        #[arg(long)]
        birth_year: Option<i32>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jakmyeong=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        error!("{e:#}");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Chart { birth, json } => {
            let report = report(&birth)?;
            if json {
                print_json(&report)?;
            } else {
                print_report(&report);
            }
        }

        Commands::Rank {
            dictionary,
            surname,
            surname_hanja,
            birth,
            birth_year,
            birth_order,
            first,
            second,
            config,
            json,
        } => {
            let report = report(&birth)?;
            let dict = load_dictionary(&dictionary)
                .with_context(|| format!("loading {}", dictionary.display()))?;
            let config = load_config(config.as_ref()).context("loading scoring config")?;
            let surname = match surname_hanja.as_deref() {
                Some(h) => Surname::with_hanja(&surname, h),
                None => Surname::new(&surname),
            };
            let mut query = NameQuery::new(surname);
            query.birth_year = birth_year;
            query.birth_order = birth_order;
            query.preferred_first = first;
            query.preferred_second = second;
            let names = recommend_names(&report, &dict, &query, &config);
            info!(characters = dict.len(), results = names.len(), "ranking done");
            if json {
                print_json(&names)?;
            } else {
                print_names(&names);
            }
        }

        Commands::Lookup {
            dictionary,
            reading,
            birth,
            json,
        } => {
            let report = report(&birth)?;
            let dict = load_dictionary(&dictionary)
                .with_context(|| format!("loading {}", dictionary.display()))?;
            let hits = lookup_reading(&report, &dict, &reading);
            if json {
                print_json(&hits)?;
            } else {
                print_matches(&reading, &hits);
            }
        }

        Commands::Decompose {
            text,
            birth_year,
            json,
        } => {
            let p = phonology(&text, birth_year);
            if json {
                print_json(&p)?;
            } else {
                print_phonology(&p);
            }
        }
    }
    Ok(())
}

fn report(birth: &BirthArgs) -> Result<SajuReport> {
    analyze_birth(&birth.date, birth.hour, birth.minute, birth.gender)
        .with_context(|| format!("computing chart for {} {}h", birth.date, birth.hour))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_report(r: &SajuReport) {
    let chart = &r.chart;
    println!("{} ({})", chart.birth, chart.gender.korean_name());
    for p in chart.pillars() {
        println!(
            "  {}  {}/{}  {}",
            p,
            p.stem_element,
            p.branch_element,
            p.polarity.name()
        );
    }

    println!("\n오행");
    for ((o, n), pct) in r
        .structure
        .element_counts
        .iter()
        .zip(r.element_percentages.iter())
    {
        println!("  {o} {n} ({pct}%)");
    }
    println!("  음양: 양 {} / 음 {}", r.eumyang.yang, r.eumyang.eum);

    println!("\n십성");
    for t in &r.structure.ten_gods {
        println!(
            "  {}  천간 {}  지지 {}",
            t.position.korean_name(),
            t.stem.korean_name(),
            t.branch.korean_name()
        );
    }
    let counts = &r.structure.ten_god_counts;
    println!(
        "  일간 {} (도움 {} / 소모 {})",
        r.structure.day_stem_strength.korean_name(),
        counts.help(),
        counts.drain()
    );

    let relations = &r.structure.branch_relations;
    println!("\n합충형파해");
    if relations.is_empty() {
        println!("  없음");
    }
    for rel in &relations.relations {
        println!("  {}", rel.label());
    }

    let names = |set: OhangSet| {
        set.iter()
            .map(|o| o.name())
            .collect::<Vec<_>>()
            .join(" ")
    };
    println!("\n필요 오행: {}", names(r.needs.required));
    if !r.needs.penalized.is_empty() {
        println!("피할 오행: {}", names(r.needs.penalized));
    }
    if !r.needs.supplement_good.is_empty() {
        println!("보조 오행: {}", names(r.needs.supplement_good));
    }
    let reasons: Vec<&str> = r.needs.reasons.iter().map(|n| n.korean_name()).collect();
    println!("근거: {}", reasons.join(", "));

    let direction = match r.daeun_direction {
        DaeunDirection::Forward => "순행",
        DaeunDirection::Reverse => "역행",
    };
    println!("\n대운 ({direction})");
    for d in &r.daeun {
        println!("  {:>8}  {}", d.age_label(), d.ganji().name());
    }
}

fn print_names(names: &[ScoredCandidate]) {
    if names.is_empty() {
        println!("추천할 이름이 없습니다");
        return;
    }
    for (i, n) in names.iter().enumerate() {
        println!(
            "{:>2}. {} ({})  {:.3}  {}",
            i + 1,
            n.full_name,
            n.hanja_name,
            n.final_score,
            n.explanation
        );
        let detail: Vec<String> = n
            .scores
            .iter()
            .map(|s| format!("{} {:.2}", s.criterion.korean_name(), s.score))
            .collect();
        println!("    {}  획수 {}", detail.join(" | "), n.stroke_total);
    }
}

fn print_matches(reading: &str, hits: &[ReadingMatch]) {
    if hits.is_empty() {
        println!("'{reading}'에 해당하는 한자가 없습니다");
        return;
    }
    for m in hits {
        let e = &m.entry;
        println!(
            "{} {}  {}획  {}  {}",
            e.character, e.reading, e.strokes, e.meaning, m.fit_reason
        );
    }
}

fn print_phonology(p: &NamePhonology) {
    for s in &p.syllables {
        println!(
            "{}  초성 {} ({})  중성 {} ({})  종성 {} ({})",
            s.ch,
            s.onset_jamo(),
            s.onset,
            s.nucleus_jamo(),
            s.nucleus,
            s.coda_jamo().map(String::from).unwrap_or_else(|| "-".into()),
            s.coda
        );
    }
    let pr = &p.profile;
    println!(
        "받침 {:.2}  강한 초성 {:.2}  부드러운 초성 {:.2}  열린 모음 {:.2}  부드러운 종성 {:.2}",
        pr.batchim_ratio,
        pr.strong_onset_ratio,
        pr.soft_onset_ratio,
        pr.open_vowel_ratio,
        pr.soft_coda_ratio
    );
    if let (Some(era), Some(fit)) = (p.era, p.era_fit) {
        println!("{} 적합도 {:.2}", era.label(), fit);
    }
}
