use std::path::PathBuf;

use clap::Parser;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "article-guard")]
#[command(author, version, about = "Pre-publication checks for static HTML articles")]
#[command(long_about = "Scans a single HTML article file and reports formatting and \
    consistency problems before publication.\n\n\
    Exit codes:\n  \
    0 - All checks passed (warnings allowed)\n  \
    1 - Critical issues found, or the file could not be read")]
pub struct Cli {
    /// Path to the article HTML file
    pub file: PathBuf,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress per-check progress output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
