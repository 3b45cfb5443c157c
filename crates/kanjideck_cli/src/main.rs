//! Prints the deck browser query for the vocabulary checklist.
//!
//! # Responsibility
//! - Act as a thin output sink over `kanjideck_core::BrowserQuery`.
//! - With no arguments, scan the embedded checklist and print one line.

use clap::Parser;
use kanjideck_core::{
    default_log_level, flush_logging, init_logging, summarize_checklist, BrowserQuery,
    VOCABULARY_CHECKLIST,
};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

/// Build a flashcard browser query from the kanji in a vocabulary checklist
#[derive(Parser, Debug)]
#[command(name = "kanjideck", version, about, long_about = None)]
struct Cli {
    /// Read text from this file instead of the embedded checklist (`-` for stdin)
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "KANJIDECK_LOG_DIR", value_name = "DIR")]
    log_dir: Option<String>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, env = "KANJIDECK_LOG_LEVEL", value_name = "LEVEL")]
    log_level: Option<String>,
}

#[derive(Debug)]
enum InputError {
    Stdin(std::io::Error),
    File {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdin(err) => write!(f, "failed to read standard input: {err}"),
            Self::File { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Stdin(err) => Some(err),
            Self::File { source, .. } => Some(source),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match (cli.log_dir.as_deref(), cli.log_level.as_deref()) {
        (Some(log_dir), level) => {
            if let Err(err) = init_logging(level.unwrap_or(default_log_level()), log_dir) {
                // Logging is optional; the query is still printed.
                eprintln!("kanjideck: logging disabled: {err}");
            }
        }
        (None, Some(level)) => {
            eprintln!("kanjideck: log level `{level}` ignored: no log directory given");
        }
        (None, None) => {}
    }

    let text = match read_input(cli.input.as_ref()) {
        Ok(text) => text,
        Err(err) => {
            warn!("event=input_read module=cli status=error error={err}");
            eprintln!("kanjideck: {err}");
            flush_logging();
            return ExitCode::FAILURE;
        }
    };

    let query = BrowserQuery::from_text(&text);
    let checklist = summarize_checklist(&text);
    info!(
        "event=query_built module=cli status=ok source={} checklist_entries={} checked_entries={} entries_without_kanji={} kanji_count={}",
        source_label(cli.input.as_ref()),
        checklist.entries,
        checklist.checked,
        checklist.without_kanji,
        query.len()
    );

    println!("{query}");
    flush_logging();
    ExitCode::SUCCESS
}

fn read_input(input: Option<&PathBuf>) -> Result<String, InputError> {
    match input {
        None => Ok(VOCABULARY_CHECKLIST.to_string()),
        Some(path) if path.as_os_str() == "-" => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(InputError::Stdin)?;
            Ok(text)
        }
        Some(path) => std::fs::read_to_string(path).map_err(|source| InputError::File {
            path: path.clone(),
            source,
        }),
    }
}

fn source_label(input: Option<&PathBuf>) -> &'static str {
    match input {
        None => "embedded",
        Some(path) if path.as_os_str() == "-" => "stdin",
        Some(_) => "file",
    }
}
