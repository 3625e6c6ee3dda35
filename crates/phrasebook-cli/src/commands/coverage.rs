//! Coverage command implementation.

use std::fs::read_to_string;
use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result, miette};
use phrasebook::parse_catalog;
use serde::Serialize;

use crate::output::CatalogDiagnostic;
use crate::output::table::{LanguageCoverage, format_coverage_table};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Catalog file to inspect (.phrases).
    pub file: PathBuf,

    /// Languages to check coverage for (comma-separated).
    #[arg(long, value_delimiter = ',', required = true)]
    pub lang: Vec<String>,

    /// Exit with non-zero code if any language is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    language: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
}

/// Run the coverage command.
///
/// A category counts as translated for a language when its block has a
/// non-empty phrase line for that language.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let content = read_to_string(&args.file)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read catalog {}: {}", args.file.display(), e))?;

    let mut total = 0;
    let mut coverage_data: Vec<LanguageCoverage> = Vec::with_capacity(args.lang.len());

    for lang in &args.lang {
        let table = match parse_catalog(&content, lang) {
            Ok(table) => table,
            Err(e) => {
                let diagnostic = CatalogDiagnostic::from_parse_error(&args.file, &content, &e);
                return Err(diagnostic.into());
            }
        };
        total = table.len();

        let missing: Vec<String> = table
            .iter()
            .filter(|(_, category)| category.phrase.is_empty())
            .map(|(name, _)| name.to_string())
            .collect();

        coverage_data.push(LanguageCoverage {
            language: lang.clone(),
            translated: total - missing.len(),
            missing,
        });
    }

    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                language: c.language.clone(),
                translated: c.translated,
                total,
                missing: c.missing.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{json_output}");
    } else {
        let table = format_coverage_table(total, &coverage_data);
        println!("{table}");

        for lang_coverage in &coverage_data {
            if !lang_coverage.missing.is_empty() {
                println!("\nMissing in {}:", lang_coverage.language);
                for name in &lang_coverage.missing {
                    println!("  - {name}");
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
