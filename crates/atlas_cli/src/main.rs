use std::path::PathBuf;

use anyhow::{Context, Result};
use atlas_config::EngineConfig;
use atlas_rs::{
    AngleKind, AstroLine, BirthData, ChartReport, LinePiece, NatalChart, Planet, PlanetPosition,
    TimeReference, astro_lines, chart_report, classify, line_ratings, natal_chart,
    planet_positions, sign_position,
};
use atlas_time::{CivilTime, JulianMoment};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "atlas", about = "Natal chart and astrocartography CLI")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Julian Day and Greenwich sidereal time of a civil instant
    Julian {
        /// Calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Clock time (HH:MM or HH:MM:SS)
        #[arg(long)]
        time: String,
        /// Offset of the clock east of UT, minutes (omit for UT)
        #[arg(long, allow_hyphen_values = true)]
        utc_offset_minutes: Option<i32>,
    },
    /// Geocentric ecliptic positions of the chart bodies
    Positions(BirthArgs),
    /// Angles and zodiac placements
    Chart(BirthArgs),
    /// Astrocartography lines
    Lines {
        #[command(flatten)]
        birth: BirthArgs,
        /// Only lines of this planet
        #[arg(long, value_parser = parse_planet)]
        planet: Option<Planet>,
        /// Only lines on this angle (MC, IC, ASC, DSC)
        #[arg(long, value_parser = parse_angle)]
        angle: Option<AngleKind>,
    },
    /// Zodiac sign of an ecliptic longitude
    Sign {
        /// Ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Sentiment of planet/angle lines (whole table if no filter)
    Sentiment {
        #[arg(long, value_parser = parse_planet)]
        planet: Option<Planet>,
        #[arg(long, value_parser = parse_angle)]
        angle: Option<AngleKind>,
    },
    /// Positions, chart, lines and ratings together
    Report(BirthArgs),
}

#[derive(Args)]
struct BirthArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Birth time (HH:MM or HH:MM:SS)
    #[arg(long)]
    time: String,
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
    /// Offset of the clock east of UT, minutes (omit for UT)
    #[arg(long, allow_hyphen_values = true)]
    utc_offset_minutes: Option<i32>,
    /// Include nodes, Lilith, Chiron and asteroids
    #[arg(long)]
    minor: bool,
    /// Engine config TOML (default: $ATLAS_CONFIG or ./atlas.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl BirthArgs {
    fn birth(&self) -> BirthData {
        BirthData::new(&self.date, &self.time, self.lat, self.lon)
            .with_time_reference(time_reference(self.utc_offset_minutes))
    }

    fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => EngineConfig::discover()?,
        };
        if self.minor {
            config.include_minor_bodies = true;
        }
        tracing::debug!(?config, "engine config");
        Ok(config)
    }
}

fn time_reference(offset: Option<i32>) -> TimeReference {
    match offset {
        Some(minutes_east) => TimeReference::FixedOffset { minutes_east },
        None => TimeReference::Universal,
    }
}

fn parse_planet(s: &str) -> Result<Planet, String> {
    Planet::from_name(s).ok_or_else(|| format!("unknown planet '{s}'"))
}

fn parse_angle(s: &str) -> Result<AngleKind, String> {
    AngleKind::from_abbrev(s).ok_or_else(|| format!("unknown angle '{s}' (MC, IC, ASC, DSC)"))
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_positions(positions: &[PlanetPosition]) {
    for p in positions {
        println!(
            "{:<10} {:>9.4}° {:>8.4}°  {:>8.4}°/d  {:<20}{}",
            p.body.name(),
            p.longitude_deg,
            p.latitude_deg,
            p.speed_deg_per_day,
            sign_position(p.longitude_deg).to_string(),
            if p.retrograde { " R" } else { "" }
        );
    }
}

fn print_chart(chart: &NatalChart) {
    let a = &chart.angles;
    println!("LST {:.4}°", chart.lst_deg);
    for (label, lon) in [
        ("ASC", a.ascendant_deg),
        ("MC", a.midheaven_deg),
        ("DSC", a.descendant_deg),
        ("IC", a.imum_coeli_deg),
    ] {
        println!("{label:<4} {lon:>9.4}°  {}", sign_position(lon));
    }
    println!();
    for p in &chart.placements {
        println!(
            "{:<10} {:<20} {:<6} {:<9}{}",
            p.body.name(),
            p.position.to_string(),
            p.position.element.name(),
            p.position.modality.name(),
            if p.retrograde { " R" } else { "" }
        );
    }
}

fn print_lines(lines: &[&AstroLine]) {
    for l in lines {
        let pieces: Vec<String> = l
            .pieces
            .iter()
            .map(|piece| match piece {
                LinePiece::Segment(pts) => match (pts.first(), pts.last()) {
                    (Some(a), Some(b)) => format!(
                        "[{:.2},{:.2}]→[{:.2},{:.2}] ({} pts)",
                        a.latitude_deg,
                        a.longitude_deg,
                        b.latitude_deg,
                        b.longitude_deg,
                        pts.len()
                    ),
                    _ => "[]".to_string(),
                },
                LinePiece::Gap { from_lat, to_lat } => format!("gap {from_lat:.0}..{to_lat:.0}"),
            })
            .collect();
        println!(
            "{:<8} {:<4} {:<10} {}",
            l.planet.name(),
            l.angle.abbrev(),
            classify(l.planet, l.angle).name(),
            pieces.join("  ")
        );
    }
}

fn print_report(report: &ChartReport) {
    let (y, m, d) = report.moment.to_calendar();
    println!(
        "JD {:.6}  (UT {y:04}-{m:02}-{d:09.6})  GST {:.4}°",
        report.moment.jd, report.moment.gst_deg
    );
    println!();
    print_positions(&report.positions);
    println!();
    print_chart(&report.chart);
    println!();
    let lines: Vec<&AstroLine> = report.lines.iter().collect();
    print_lines(&lines);
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Julian {
            date,
            time,
            utc_offset_minutes,
        } => {
            let civil = CivilTime::from_iso(&date, &time)?;
            let moment = JulianMoment::from_civil(&civil, time_reference(utc_offset_minutes))?;
            if cli.json {
                print_json(&moment)?;
            } else {
                let (y, m, d) = moment.to_calendar();
                println!(
                    "JD {:.6}  GST {:.6}°  (UT {y:04}-{m:02}-{d:09.6})",
                    moment.jd, moment.gst_deg
                );
            }
        }

        Commands::Positions(args) => {
            let positions = planet_positions(&args.birth(), &args.engine_config()?)?;
            if cli.json {
                print_json(&positions)?;
            } else {
                print_positions(&positions);
            }
        }

        Commands::Chart(args) => {
            let chart = natal_chart(&args.birth(), &args.engine_config()?)?;
            if cli.json {
                print_json(&chart)?;
            } else {
                print_chart(&chart);
            }
        }

        Commands::Lines {
            birth,
            planet,
            angle,
        } => {
            let lines = astro_lines(&birth.birth(), &birth.engine_config()?)?;
            let selected: Vec<&AstroLine> = lines
                .iter()
                .filter(|l| planet.is_none_or(|p| p == l.planet))
                .filter(|l| angle.is_none_or(|a| a == l.angle))
                .collect();
            if cli.json {
                print_json(&selected)?;
            } else {
                print_lines(&selected);
            }
        }

        Commands::Sign { lon } => {
            let pos = sign_position(lon);
            if cli.json {
                print_json(&pos)?;
            } else {
                println!(
                    "{} ({}, {}) - {:.4}° in sign",
                    pos,
                    pos.element.name(),
                    pos.modality.name(),
                    pos.degree_in_sign
                );
            }
        }

        Commands::Sentiment { planet, angle } => {
            let ratings: Vec<_> = line_ratings()
                .into_iter()
                .filter(|r| planet.is_none_or(|p| p == r.planet))
                .filter(|r| angle.is_none_or(|a| a == r.angle))
                .collect();
            if cli.json {
                print_json(&ratings)?;
            } else {
                for r in &ratings {
                    println!("{:<8} {:<4} {}", r.planet.name(), r.angle, r.sentiment.name());
                }
            }
        }

        Commands::Report(args) => {
            let report = chart_report(&args.birth(), &args.engine_config()?)?;
            if cli.json {
                print_json(&report)?;
            } else {
                print_report(&report);
            }
        }
    }

    Ok(())
}
