//! Implementation of the `phrasebook dump` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use miette::{IntoDiagnostic, miette};
use phrasebook::parse_catalog;

use crate::output::CatalogDiagnostic;
use crate::output::table::format_category_table;

/// Arguments for the dump command.
#[derive(Debug, clap::Args)]
pub struct DumpArgs {
    /// Catalog file to dump (.phrases)
    pub file: PathBuf,

    /// Language to select phrases for
    #[arg(long, env = "PHRASEBOOK_LANG", default_value = "en")]
    pub lang: String,

    /// Print a table of names and phrases instead of JSON
    #[arg(long)]
    pub table: bool,
}

/// Run the dump command.
pub fn run_dump(args: DumpArgs) -> miette::Result<i32> {
    let content = read_to_string(&args.file)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read catalog {}: {}", args.file.display(), e))?;

    let table = parse_catalog(&content, &args.lang)
        .map_err(|e| CatalogDiagnostic::from_parse_error(&args.file, &content, &e))?;

    if args.table {
        let rows = table.iter().map(|(name, category)| (name, category.phrase.as_str()));
        println!("{}", format_category_table(rows));
    } else {
        println!("{}", serde_json::to_string_pretty(&table).into_diagnostic()?);
    }

    Ok(exitcode::OK)
}
