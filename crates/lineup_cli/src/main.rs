//! Lineup CLI
//!
//! Formation catalog, roster check, and call-up replay/save from the terminal.

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use lineup_core::callup::SystemClock;
#[cfg(feature = "cli")]
use lineup_core::config::{BoardConfig, SinkKind};
#[cfg(feature = "cli")]
use lineup_core::i18n::BoardLocalizer;
#[cfg(feature = "cli")]
use lineup_core::{BoardMode, LineupError};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "lineup")]
#[command(about = "Build and save match call-ups for club categories", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Callup,
    WithBench,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// List the formation catalog
    Formations,

    /// Validate and print a category roster
    Roster {
        /// Players CSV export
        #[arg(long)]
        csv: PathBuf,

        /// Category name (e.g. "Sub-12")
        #[arg(long)]
        category: String,

        /// Filter by name or identification
        #[arg(long, default_value = "")]
        search: String,
    },

    /// Replay a gesture plan, validate and save the call-up
    Callup {
        /// Players CSV export
        #[arg(long)]
        csv: PathBuf,

        /// Category name (e.g. "Sub-12")
        #[arg(long)]
        category: String,

        /// Formation id; defaults to the configured one
        #[arg(long)]
        formation: Option<String>,

        /// JSON array of drag gestures
        #[arg(long)]
        plan: PathBuf,

        /// Output directory; defaults to the configured one
        #[arg(long)]
        out: Option<PathBuf>,

        /// Write a compressed archive instead of JSON
        #[arg(long, default_value = "false")]
        archive: bool,

        /// Board mode override
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Locale for notices (es-CO, en-US)
        #[arg(long)]
        locale: Option<String>,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let config = BoardConfig::from_env().context("Failed to load board configuration")?;

    match cli.command {
        Commands::Formations => {
            for line in lineup_cli::formation_lines() {
                println!("{}", line);
            }
        }

        Commands::Roster { csv, category, search } => {
            let roster = lineup_cli::load_roster(&csv, &category)?;
            println!("{} ({} players)", category, roster.len());
            for player in roster.search(&search) {
                println!(
                    "  {:<4} {:<32} {:<12} {:?}",
                    player.badge(),
                    player.name,
                    player.identification,
                    player.status
                );
            }
        }

        Commands::Callup { csv, category, formation, plan, out, archive, mode, locale } => {
            let mut localizer = BoardLocalizer::new();
            localizer.set_locale(locale.as_deref().unwrap_or(&config.locale))?;

            let job = lineup_cli::CallUpJob {
                csv,
                category,
                formation: formation.unwrap_or_else(|| config.default_formation.clone()),
                plan,
                out: out.unwrap_or_else(|| config.output_dir.clone()),
                sink: if archive { SinkKind::Archive } else { config.sink },
                mode: match mode {
                    Some(ModeArg::Callup) => BoardMode::CallUp,
                    Some(ModeArg::WithBench) => BoardMode::WithBench,
                    None => config.board_mode,
                },
            };

            match lineup_cli::run_call_up(&job, &SystemClock) {
                Ok(report) => {
                    for notice in lineup_cli::drop_notices(&localizer, &report.outcomes) {
                        println!("  {}", notice);
                    }
                    println!("{}", localizer.summary_line(report.summary.occupied, report.summary.total));
                    println!("{}", localizer.saved_notice(&job.category));
                    if let Some(path) = &report.receipt.location {
                        println!("  {}", path.display());
                    }
                }
                Err(err) => match err.downcast_ref::<LineupError>() {
                    Some(lineup_err) => anyhow::bail!("{}", localizer.error_notice(lineup_err)),
                    None => return Err(err),
                },
            }
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("lineup CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
