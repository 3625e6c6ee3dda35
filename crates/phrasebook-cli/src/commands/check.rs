//! Implementation of the `phrasebook check` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use miette::{IntoDiagnostic, Report};
use owo_colors::{OwoColorize, Stream};
use phrasebook::parse_catalog;
use serde::Serialize;
use tracing::debug;

use crate::output::CatalogDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Files to check (.phrases)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Language whose phrases are checked for placeholder errors
    #[arg(long, env = "PHRASEBOOK_LANG", default_value = "en")]
    pub lang: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct CheckResult {
    file: String,
    ok: bool,
    categories: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<CheckError>,
}

#[derive(Debug, Serialize)]
struct CheckError {
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    column: Option<usize>,
    message: String,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut results = Vec::with_capacity(args.files.len());

    for path in &args.files {
        let file = path.display().to_string();
        let content = match read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                if !args.json {
                    eprintln!(
                        "{} {file}: {e}",
                        "error".if_supports_color(Stream::Stderr, |t| t.red())
                    );
                }
                results.push(CheckResult {
                    file,
                    ok: false,
                    categories: 0,
                    error: Some(CheckError {
                        line: None,
                        column: None,
                        message: e.to_string(),
                    }),
                });
                continue;
            }
        };

        match parse_catalog(&content, &args.lang) {
            Ok(table) => {
                debug!(file = %file, categories = table.len(), "catalog ok");
                if !args.json {
                    println!(
                        "{} {file}: {} categories",
                        "ok".if_supports_color(Stream::Stdout, |t| t.green()),
                        table.len()
                    );
                }
                results.push(CheckResult {
                    file,
                    ok: true,
                    categories: table.len(),
                    error: None,
                });
            }
            Err(err) => {
                if !args.json {
                    let diagnostic = CatalogDiagnostic::from_parse_error(path, &content, &err);
                    eprintln!("{:?}", Report::new(diagnostic));
                }
                let position = err.position();
                results.push(CheckResult {
                    file,
                    ok: false,
                    categories: 0,
                    error: Some(CheckError {
                        line: position.map(|(line, _)| line),
                        column: position.map(|(_, column)| column),
                        message: err.message(),
                    }),
                });
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results).into_diagnostic()?);
    }

    if results.iter().all(|r| r.ok) {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}
