//! Session tools CLI: replay scripted sessions, generate random ones, and
//! evaluate exported sessions side by side.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};
use scorekeeper::{init_tracing, Session, SettlementLimits};
use session_tools::evaluation::{build_tables, load_sessions, write_tables};
use session_tools::output::write_session;
use session_tools::script::{load_script, replay};
use session_tools::simulator::{SimulationConfig, Simulator};
use session_tools::types::LogFormat;
use time::{Duration, OffsetDateTime};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "session-tools")]
#[command(about = "Replay, simulate and evaluate score tracking sessions")]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log output format
    #[arg(long, global = true, default_value = "text")]
    log_format: LogFormat,

    /// Override the doubling cap (defaults to SCOREKEEPER_MAX_DOUBLINGS or 16)
    #[arg(long, global = true)]
    max_doublings: Option<u32>,

    /// Override the calculated points cap
    #[arg(long, global = true)]
    max_calculated_points: Option<i64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a JSON Lines round script and export the session
    Play {
        #[arg(long)]
        script: PathBuf,

        #[arg(long, default_value = "./sessions")]
        output_dir: PathBuf,

        /// Session directory name (defaults to the script file stem)
        #[arg(long)]
        name: Option<String>,

        /// Compress CSV files
        #[arg(long)]
        compress: bool,
    },
    /// Generate random sessions
    Simulate {
        #[arg(short, long, default_value = "1")]
        sessions: u32,

        /// Seed for deterministic sessions
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, default_value = "200")]
        max_rounds: u32,

        #[arg(long, default_value = "./sessions")]
        output_dir: PathBuf,

        #[arg(long)]
        compress: bool,
    },
    /// Build cross-session tables from exported session directories
    Evaluate {
        #[arg(long, default_value = "./sessions")]
        input_dir: PathBuf,

        #[arg(long, default_value = "./evaluation")]
        output_dir: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    init_tracing(matches!(args.log_format, LogFormat::Json), filter);

    let mut limits = SettlementLimits::from_env()?;
    if let Some(max) = args.max_doublings {
        limits = limits.with_max_doublings(max);
    }
    if let Some(max) = args.max_calculated_points {
        limits = limits.with_max_calculated_points(max);
    }
    limits.validate()?;

    match args.command {
        Command::Play {
            script,
            output_dir,
            name,
            compress,
        } => {
            let name = name.unwrap_or_else(|| file_stem(&script));
            let parsed = load_script(&script)?;
            let session = replay(&parsed, limits)?;
            let paths = write_session(&output_dir.join(&name), &session.export()?, compress)?;
            info!(dir = %paths.dir.display(), "Session exported");
            print_session_summary(&name, &session)?;
        }
        Command::Simulate {
            sessions,
            seed,
            max_rounds,
            output_dir,
            compress,
        } => {
            let config = SimulationConfig {
                max_rounds,
                ..SimulationConfig::default()
            };
            let mut simulator = Simulator::new(seed, limits, config);
            let start = Instant::now();
            let mut started_at = OffsetDateTime::now_utc();
            let mut unfinished = 0;

            for index in 1..=sessions {
                let session = simulator.simulate_session(started_at)?;
                if !session.is_finished() {
                    unfinished += 1;
                    warn!(session = index, "Session hit the round cap before game over");
                }
                let name = format!("sim_{index:04}");
                write_session(&output_dir.join(&name), &session.export()?, compress)?;
                if args.verbose {
                    print_session_summary(&name, &session)?;
                }
                started_at += Duration::days(1);
            }

            println!("\n=== Simulation Summary ===");
            println!("Sessions written: {sessions}");
            if unfinished > 0 {
                println!("Unfinished (round cap): {unfinished}");
            }
            println!("Total time: {:?}", start.elapsed());
            println!("Output directory: {}", output_dir.display());
        }
        Command::Evaluate {
            input_dir,
            output_dir,
        } => {
            let (loaded, skipped) = load_sessions(&input_dir)?;
            let tables = build_tables(&loaded)?;
            let paths = write_tables(&output_dir, &tables)?;

            println!("\n=== Evaluation Summary ===");
            println!("Sessions evaluated: {}", loaded.len());
            if !skipped.is_empty() {
                println!("Skipped: {}", skipped.len());
                for (path, e) in &skipped {
                    println!("  {}: {e}", path.display());
                }
            }
            println!("\n=== Leaderboard ===");
            for row in &tables.leaderboard {
                println!(
                    "{}. {}: winner points={}, net={}, first places={}, sessions={}",
                    row.rank,
                    row.player_name,
                    row.winner_points,
                    row.net_points,
                    row.first_places,
                    row.sessions
                );
            }
            for path in paths {
                info!("Wrote {}", path.display());
            }
        }
    }

    Ok(())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "session".to_string())
}

fn print_session_summary(
    name: &str,
    session: &Session,
) -> Result<(), Box<dyn std::error::Error>> {
    let export = session.export()?;
    println!("\n=== Session {name} ===");
    println!(
        "Rounds: {}, finished: {}",
        session.game().rounds().len(),
        session.is_finished()
    );
    if let Some(text) = &export.metadata.duration_text {
        println!("Duration: {text}");
    }
    let roster = session.game().require_players("summary")?;
    for row in &export.standings {
        println!("{}. {}", row.rank, roster[row.player_wind].display_with_points());
    }
    Ok(())
}
