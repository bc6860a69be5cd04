//! Command-line front end for the synastry house-placement engine.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use synastry_base::{Position, Sign, chart_from_name, sign_from_name};
use synastry_table::find_house;

mod chart_file;
mod output;

use chart_file::load_session;
use output::{render_table, session_table, write_workbook};

#[derive(Parser)]
#[command(name = "synastry", about = "Multi-chart synastry table CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Opposite sign of a sign
    Opposite {
        /// Sign name (Aries..Pisces)
        sign: String,
    },
    /// Ecliptic longitude of a sign/degree/minute position
    Longitude {
        /// Sign name (Aries..Pisces)
        #[arg(long)]
        sign: String,
        /// Degree within the sign (0-29)
        #[arg(long)]
        deg: u8,
        /// Arc-minute (0-59)
        #[arg(long, default_value = "0")]
        min: u8,
    },
    /// Resolve a longitude against 12 house cusps
    FindHouse {
        /// Query ecliptic longitude in degrees
        #[arg(long)]
        lon: f64,
        /// Comma-separated cusp longitudes for houses 1-12
        #[arg(long)]
        cusps: String,
    },
    /// Print the synastry table for one reference chart
    Table {
        /// Path to the JSON chart file
        #[arg(long)]
        input: PathBuf,
        /// Reference chart (A, B, Composite, Davison); defaults to the
        /// first chart whose houses are available
        #[arg(long)]
        reference: Option<String>,
    },
    /// Write one CSV sheet per usable reference chart
    Export {
        /// Path to the JSON chart file
        #[arg(long)]
        input: PathBuf,
        /// Output directory for the sheets
        #[arg(long)]
        out: PathBuf,
    },
}

fn parse_sign(s: &str) -> Sign {
    sign_from_name(s).unwrap_or_else(|| {
        eprintln!("Invalid sign name: {s}");
        eprintln!("Valid: Aries, Taurus, Gemini, Cancer, Leo, Virgo,");
        eprintln!("       Libra, Scorpio, Sagittarius, Capricorn, Aquarius, Pisces");
        std::process::exit(1);
    })
}

/// Parse 12 comma-separated cusp longitudes.
fn parse_cusps(s: &str) -> Result<[f64; 12], String> {
    let values: Vec<&str> = s.split(',').collect();
    if values.len() != 12 {
        return Err(format!(
            "expected 12 comma-separated longitudes, got {}",
            values.len()
        ));
    }
    let mut cusps = [0.0; 12];
    for (i, value) in values.iter().enumerate() {
        cusps[i] = value
            .trim()
            .parse()
            .map_err(|e| format!("invalid longitude '{}': {e}", value.trim()))?;
    }
    Ok(cusps)
}

fn load_session_or_exit(path: &PathBuf) -> synastry_session::Session {
    load_session(path).unwrap_or_else(|e| {
        eprintln!("Failed to load chart file: {e}");
        std::process::exit(1);
    })
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Opposite { sign } => {
            let sign = parse_sign(&sign);
            let opposite = sign.opposite();
            println!(
                "{} ({}) <-> {} ({})",
                sign.name(),
                sign.glyph(),
                opposite.name(),
                opposite.glyph()
            );
        }

        Commands::Longitude { sign, deg, min } => {
            let sign = parse_sign(&sign);
            let position = Position::new(sign, deg, min).unwrap_or_else(|e| {
                eprintln!("Invalid position: {e}");
                std::process::exit(1);
            });
            println!("{position} = {:.4} deg", position.longitude());
        }

        Commands::FindHouse { lon, cusps } => {
            let cusps = parse_cusps(&cusps).unwrap_or_else(|e| {
                eprintln!("Invalid cusps: {e}");
                std::process::exit(1);
            });
            let placement = find_house(lon, &cusps);
            println!(
                "House {} ({:.4} deg past the cusp at {:.4})",
                placement.house + 1,
                placement.distance,
                cusps[placement.house]
            );
        }

        Commands::Table { input, reference } => {
            let mut session = load_session_or_exit(&input);
            if let Some(name) = reference {
                let id = chart_from_name(&name).unwrap_or_else(|e| {
                    eprintln!("{e}");
                    eprintln!("Valid: A, B, Composite, Davison");
                    std::process::exit(1);
                });
                session.select_mode(id);
            }
            let Some(reference) = session.active_reference() else {
                eprintln!("All charts' houses are omitted; enable at least one chart.");
                std::process::exit(1);
            };
            let Some(table) = session_table(&session, reference) else {
                eprintln!(
                    "Chart {reference} has an incomplete cusp set; no table to show."
                );
                std::process::exit(1);
            };
            print!("{}", render_table(&table));
        }

        Commands::Export { input, out } => {
            let session = load_session_or_exit(&input);
            let written = write_workbook(&session, &out).unwrap_or_else(|e| {
                eprintln!("Export failed: {e}");
                std::process::exit(1);
            });
            if written.is_empty() {
                eprintln!("No usable reference charts; nothing exported.");
                std::process::exit(1);
            }
            for path in written {
                println!("Wrote {}", path.display());
            }
        }
    }
}
