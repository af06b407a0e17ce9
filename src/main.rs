use std::fs;
use std::io::{self, Write};
use std::path::Path;

use clap::Parser;
use clap::error::ErrorKind;

use article_guard::checker::ArticleChecker;
use article_guard::cli::Cli;
use article_guard::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use article_guard::{ArticleGuardError, EXIT_SUCCESS, EXIT_VALIDATION_FAILED};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => handle_parse_error(&e),
    };

    std::process::exit(run_validate(&cli));
}

/// Argument errors print usage to stdout and exit 1; all diagnostics of this
/// tool go to stdout, with the exit code as the only machine signal.
/// `--help` and `--version` keep clap's success behavior.
fn handle_parse_error(err: &clap::Error) -> ! {
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        print!("{err}");
        std::process::exit(EXIT_SUCCESS);
    }
    println!("{err}");
    std::process::exit(EXIT_VALIDATION_FAILED);
}

fn run_validate(cli: &Cli) -> i32 {
    match run_validate_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            println!("❌ {e}");
            EXIT_VALIDATION_FAILED
        }
    }
}

fn run_validate_impl(cli: &Cli) -> article_guard::Result<i32> {
    let content = read_article(&cli.file)?;

    let show_progress = !cli.quiet && cli.format == OutputFormat::Text;
    let mut stdout = io::stdout();
    let mut sink = io::sink();
    let progress: &mut dyn Write = if show_progress { &mut stdout } else { &mut sink };

    writeln!(progress, "🔍 Validating: {}\n", cli.file.display()).ok();

    let report = ArticleChecker::new().validate(&content, progress);

    let formatter: &dyn OutputFormatter = match cli.format {
        OutputFormat::Text => &TextFormatter,
        OutputFormat::Json => &JsonFormatter,
    };
    let rendered = formatter.format(&report)?;
    println!("{}", rendered.trim_end_matches('\n'));

    Ok(report.exit_code())
}

/// Reads the whole article into memory; the handle is released before any
/// check runs. Missing file and unreadable content are the only fatal errors.
fn read_article(path: &Path) -> article_guard::Result<String> {
    if !path.exists() {
        return Err(ArticleGuardError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    fs::read_to_string(path).map_err(|source| ArticleGuardError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}
