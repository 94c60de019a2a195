//! # stb CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing.

use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use stb_cli::account::{run_account, AccountArgs};
use stb_cli::id::{run_id, IdArgs};
use stb_cli::ocr::{run_ocr, OcrArgs};
use stb_cli::output::OutputFormat;
use stb_cli::RunContext;
use stb_core::temporal::{parse_date, today};

/// Swedish technical bureaucracy toolkit.
///
/// Validates personal, coordination and organization numbers, creates and
/// checks OCR payment references, and validates bank account numbers.
#[derive(Parser, Debug)]
#[command(name = "stb", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Reference date (YYYY-MM-DD) for century resolution. Defaults to today.
    #[arg(long, value_name = "DATE", value_parser = parse_date, global = true)]
    at: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify personal, coordination and organization numbers.
    Id(IdArgs),

    /// Create or check OCR payment references.
    Ocr(OcrArgs),

    /// Validate bank account numbers.
    Account(AccountArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level; RUST_LOG wins if set.
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let ctx = RunContext {
        format: cli.format,
        reference: cli.at.unwrap_or_else(today),
    };

    tracing::debug!(reference = %ctx.reference, format = ?ctx.format, "stb CLI starting");

    let result = match cli.command {
        Commands::Id(args) => run_id(&args, &ctx),
        Commands::Ocr(args) => run_ocr(&args, &ctx),
        Commands::Account(args) => run_account(&args, &ctx),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
