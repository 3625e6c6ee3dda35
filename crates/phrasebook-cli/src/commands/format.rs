//! Implementation of the `phrasebook format` command.

use std::path::PathBuf;

use miette::IntoDiagnostic;
use phrasebook::{Translator, Value};
use serde::Serialize;
use serde_json::json;

/// Arguments for the format command.
#[derive(Debug, clap::Args)]
pub struct FormatArgs {
    /// Template string with % directives
    #[arg(long, required = true)]
    pub template: String,

    /// Catalog to load before formatting (repeatable, extension optional)
    #[arg(long = "load")]
    pub catalogs: Vec<PathBuf>,

    /// Directory catalogs are resolved against
    #[arg(long = "dir", env = "PHRASEBOOK_DIR", default_value = ".")]
    pub directory: PathBuf,

    /// Active language code (e.g., en, de, pt-BR)
    #[arg(long, env = "PHRASEBOOK_LANG", default_value = "en")]
    pub lang: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Positional arguments consumed by directives and slots, in order
    pub args: Vec<String>,
}

/// JSON output for format results.
#[derive(Serialize)]
pub struct FormatResult {
    pub result: String,
}

/// Run the format command.
pub fn run_format(args: FormatArgs) -> miette::Result<i32> {
    let mut translator = Translator::builder()
        .language(args.lang)
        .directory(args.directory)
        .build();

    for catalog in &args.catalogs {
        if let Err(e) = translator.load(catalog) {
            report_error(args.json, "Load error", &e.to_string())?;
            return Ok(exitcode::DATAERR);
        }
    }

    let values: Vec<Value> = args
        .args
        .iter()
        .map(String::as_str)
        .map(Value::parse_lossy)
        .collect();

    match translator.format(&args.template, &values) {
        Ok(result) => {
            if args.json {
                let output = FormatResult { result };
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                println!("{result}");
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            report_error(args.json, "Format error", &e.to_string())?;
            Ok(exitcode::DATAERR)
        }
    }
}

fn report_error(json: bool, label: &str, message: &str) -> miette::Result<()> {
    if json {
        let output = json!({ "error": message });
        eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        eprintln!("{label}: {message}");
    }
    Ok(())
}
