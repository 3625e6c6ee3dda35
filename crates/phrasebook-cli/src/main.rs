//! phrasebook CLI entry point.
//!
//! Provides command-line tools for working with `.phrases` catalogs:
//! - `phrasebook check` - Validate catalog syntax
//! - `phrasebook format` - Format a `%` template against loaded catalogs
//! - `phrasebook coverage` - Report phrase coverage across languages
//! - `phrasebook dump` - Print the parsed category table as JSON

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    CheckArgs, CoverageArgs, DumpArgs, FormatArgs, run_check, run_coverage, run_dump, run_format,
};
use tracing_subscriber::EnvFilter;

/// Phrase catalog tools.
#[derive(Debug, Parser)]
#[command(name = "phrasebook")]
#[command(about = "Phrase catalog tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check .phrases file syntax
    Check(CheckArgs),
    /// Format a template against loaded catalogs
    Format(FormatArgs),
    /// Report phrase coverage across languages
    Coverage(CoverageArgs),
    /// Print the categories parsed for one language as JSON
    Dump(DumpArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr. `RUST_LOG` takes precedence over `--verbose`.
fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .with_target(false)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Format(args) => run_format(args),
        Commands::Coverage(args) => run_coverage(args),
        Commands::Dump(args) => run_dump(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{e:?}");
            exit(exitcode::SOFTWARE);
        }
    }
}
