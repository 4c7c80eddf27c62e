use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use saju_rs::{
    BirthChart, BirthData, EngineConfig, FourPillars, Gender, LuckPeriod, SajuEngine,
    SolarTermProvider,
};
use saju_time::{ALL_SOLAR_TERMS, SolarTerm};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod config;

use config::{CliConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "saju", about = "Four Pillars birth-chart CLI")]
struct Cli {
    /// Log filter, overrides RUST_LOG (e.g. "debug")
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// JSON solar-term table to use instead of the embedded one
    #[arg(long, global = true)]
    solar_terms: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BirthArgs {
    /// Birth year (1-9999)
    #[arg(long)]
    year: i32,
    /// Birth month (1-12)
    #[arg(long)]
    month: u32,
    /// Birth day of month
    #[arg(long)]
    day: u32,
    /// Birth hour (0-23)
    #[arg(long, default_value = "0")]
    hour: u32,
    /// male or female (selects luck-period start age)
    #[arg(long)]
    gender: Option<Gender>,
    /// Accepted for completeness; not applied to the calculation
    #[arg(long)]
    timezone: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full birth chart
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Year, month, day and hour pillars only
    Pillars {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Eight ten-year luck periods
    Luck {
        /// Birth year
        #[arg(long)]
        year: i32,
        /// Birth month (1-12)
        #[arg(long)]
        month: u32,
        /// male or female
        #[arg(long)]
        gender: Option<Gender>,
    },
    /// Solar-term instants used for a year (after fallback)
    Terms {
        /// Calendar year; defaults to the table's default year
        #[arg(long)]
        year: Option<i32>,
        /// Show a single term (key, English or Korean name)
        #[arg(long)]
        term: Option<String>,
    },
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(l) => EnvFilter::new(l),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn resolve_gender(flag: Option<Gender>, cfg: &CliConfig) -> Result<Gender> {
    if let Some(g) = flag {
        return Ok(g);
    }
    match cfg.gender.as_deref() {
        Some(s) => s.parse().map_err(anyhow::Error::msg),
        None => Ok(Gender::default()),
    }
}

fn birth_data(args: BirthArgs, cfg: &CliConfig) -> Result<BirthData> {
    let mut data = BirthData::new(args.year, args.month, args.day, args.hour)
        .with_gender(resolve_gender(args.gender, cfg)?);
    data.timezone = args.timezone;
    Ok(data)
}

fn build_engine(flag: Option<PathBuf>, cfg: &CliConfig) -> Result<SajuEngine> {
    let path = flag.or_else(|| cfg.solar_terms.as_ref().map(PathBuf::from));
    let config = match path {
        Some(p) => EngineConfig::from_solar_terms_file(&p)
            .with_context(|| format!("loading solar-term table {}", p.display()))?,
        None => EngineConfig::default(),
    };
    Ok(SajuEngine::new(config))
}

fn print_pillars(p: &FourPillars) {
    println!("        Hour  Day   Month Year");
    println!(
        "Stem    {}    {}    {}    {}",
        p.hour.stem, p.day.stem, p.month.stem, p.year.stem
    );
    println!(
        "Branch  {}    {}    {}    {}",
        p.hour.branch, p.day.branch, p.month.branch, p.year.branch
    );
    println!(
        "Hanja   {}{}  {}{}  {}{}  {}{}",
        p.hour.stem.hanja(),
        p.hour.branch.hanja(),
        p.day.stem.hanja(),
        p.day.branch.hanja(),
        p.month.stem.hanja(),
        p.month.branch.hanja(),
        p.year.stem.hanja(),
        p.year.branch.hanja()
    );
}

fn print_luck(periods: &[LuckPeriod]) {
    for lp in periods {
        println!(
            "Age {:>2}  {}  {}  {}",
            lp.age, lp.period, lp.pillar, lp.theme
        );
    }
}

fn print_chart(chart: &BirthChart) {
    print_pillars(&chart.pillars);
    println!();
    println!(
        "Day master: {} ({} {})",
        chart.day_stem,
        chart.day_element.name(),
        chart.day_element.hanja()
    );
    println!("Zodiac: {}", chart.pillars.year.branch.zodiac_animal());
    let counts: Vec<String> = chart
        .element_counts
        .iter()
        .map(|(e, c)| format!("{} {c}", e.name()))
        .collect();
    println!("Elements: {}", counts.join(", "));
    let useful: Vec<&str> = chart.useful_elements.iter().map(|e| e.name()).collect();
    if useful.is_empty() {
        println!("Useful elements: none");
    } else {
        println!("Useful elements: {}", useful.join(", "));
    }
    println!();
    println!("Ten relations:");
    for e in chart.ten_relations.iter() {
        println!(
            "  {:<5} {:<6} {} ({})",
            e.position.key(),
            e.slot.key(),
            e.relation.name(),
            e.relation.korean_name()
        );
    }
    println!();
    println!("Luck periods ({}):", chart.gender);
    print_luck(&chart.luck_periods);
    println!();
    println!("Solar-term table year: {}", chart.solar_term_year);
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let cfg = CliConfig::load().context("reading SAJU_* configuration")?;
    let json = cli.json || cfg.format == Some(OutputFormat::Json);
    let engine = build_engine(cli.solar_terms, &cfg)?;
    debug!(
        default_year = engine.solar_terms().default_year(),
        "engine ready"
    );

    match cli.command {
        Commands::Chart { birth } => {
            let chart = engine.calculate(&birth_data(birth, &cfg)?)?;
            if json {
                print_json(&chart)?;
            } else {
                print_chart(&chart);
            }
        }

        Commands::Pillars { birth } => {
            let pillars = engine.pillars(&birth_data(birth, &cfg)?)?;
            if json {
                print_json(&pillars)?;
            } else {
                print_pillars(&pillars);
            }
        }

        Commands::Luck {
            year,
            month,
            gender,
        } => {
            let periods = engine.luck_periods(year, month, resolve_gender(gender, &cfg)?)?;
            if json {
                print_json(&periods)?;
            } else {
                print_luck(&periods);
            }
        }

        Commands::Terms { year, term: Some(name) } => {
            let table = engine.solar_terms();
            let requested = year.unwrap_or(table.default_year());
            let term: SolarTerm = name.parse()?;
            let at = table.term_instant_by_name(requested, &name)?;
            if json {
                print_json(&serde_json::json!({
                    "requested_year": requested,
                    "table_year": table.resolved_year(requested),
                    "term": term,
                    "instant": at.map(|t| t.to_rfc3339()),
                }))?;
            } else {
                match at {
                    Some(at) => println!(
                        "{}  {}  {}",
                        term.korean_name(),
                        term.name(),
                        at.format("%Y-%m-%d %H:%M UTC")
                    ),
                    None => println!("{}  {}  -", term.korean_name(), term.name()),
                }
            }
        }

        Commands::Terms { year, term: None } => {
            let table = engine.solar_terms();
            let requested = year.unwrap_or(table.default_year());
            let resolved = table.resolved_year(requested);
            let entries = table.year(requested);
            if json {
                let terms: serde_json::Map<String, serde_json::Value> = entries
                    .iter()
                    .map(|(t, at)| (t.key().to_string(), serde_json::Value::from(at.to_rfc3339())))
                    .collect();
                print_json(&serde_json::json!({
                    "requested_year": requested,
                    "table_year": resolved,
                    "terms": terms,
                }))?;
            } else {
                if resolved != requested {
                    println!("No table for {requested}; showing default year {resolved}");
                }
                for term in ALL_SOLAR_TERMS {
                    match entries.get(term) {
                        Some(at) => println!(
                            "{}  {:<22} {}",
                            term.korean_name(),
                            term.name(),
                            at.format("%Y-%m-%d %H:%M UTC")
                        ),
                        None => println!("{}  {:<22} -", term.korean_name(), term.name()),
                    }
                }
            }
        }
    }

    Ok(())
}
