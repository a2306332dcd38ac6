//! # xwc
//!
//! Print newline, word, and byte counts for each FILE, and a total line
//! if more than one FILE is specified. A word is a non-zero-length
//! sequence of non-whitespace characters delimited by white space.
//!
//! ## Usage
//!
//! ```bash
//! # Default columns (lines, words, bytes)
//! xwc notes.txt
//!
//! # Characters and longest line only
//! xwc -m -L notes.txt
//!
//! # Several files get a total row
//! xwc a.txt b.txt
//!
//! # With no FILE, read standard input
//! cat notes.txt | xwc
//!
//! # Structured output
//! xwc --json a.txt b.txt
//! ```
//!
//! Unreadable files are reported on stderr and skipped; the remaining
//! files are still processed and the exit code stays zero.

use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use xwclib::{count_source, format_row, Fields, Report, Source};

const VERSION_TEXT: &str = concat!(
    "xwc ",
    env!("CARGO_PKG_VERSION"),
    "\n\nThis is free software: you are free to change and redistribute it.\n",
    "There is NO WARRANTY, to the extent permitted by law.",
);

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("xwc")
        .about(
            "Print newline, word, and byte counts for each FILE, and a total line if \
             more than one FILE is specified",
        )
        .arg(
            Arg::new("lines")
                .short('l')
                .long("lines")
                .action(ArgAction::SetTrue)
                .help("Print the newline counts"),
        )
        .arg(
            Arg::new("words")
                .short('w')
                .long("words")
                .action(ArgAction::SetTrue)
                .help("Print the word counts"),
        )
        .arg(
            Arg::new("chars")
                .short('m')
                .long("chars")
                .action(ArgAction::SetTrue)
                .help("Print the character counts"),
        )
        .arg(
            Arg::new("bytes")
                .short('c')
                .long("bytes")
                .action(ArgAction::SetTrue)
                .help("Print the byte counts"),
        )
        .arg(
            Arg::new("max-line-length")
                .short('L')
                .long("max-line-length")
                .action(ArgAction::SetTrue)
                .help("Print the maximum line width"),
        )
        .arg(
            Arg::new("total")
                .short('t')
                .long("total")
                .action(ArgAction::SetTrue)
                .help("Print a line with total counts"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the report as JSON"),
        )
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .action(ArgAction::SetTrue)
                .help("Output version information and exit"),
        )
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .action(ArgAction::Append)
                .help("Files to read; with no FILE, read standard input"),
        )
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    if matches.get_flag("version") {
        println!("{VERSION_TEXT}");
        return Ok(());
    }

    let fields = Fields::from_flags(
        matches.get_flag("lines"),
        matches.get_flag("words"),
        matches.get_flag("chars"),
        matches.get_flag("bytes"),
        matches.get_flag("max-line-length"),
    );

    let files: Vec<String> = matches
        .get_many::<String>("file")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();
    let sources = Source::from_args(files);
    let want_total = matches.get_flag("total") || sources.len() > 1;
    let json = matches.get_flag("json");

    let mut report = Report::new();
    for source in &sources {
        match count_source(source) {
            Ok(stats) => {
                if !json {
                    println!("{}", format_row(&stats, &fields, &source.display_name()));
                }
                report.push(source.display_name(), stats);
            }
            // Unavailable sources are reported and skipped; the run
            // still succeeds.
            Err(e) => eprintln!("xwc: {e}"),
        }
    }

    if want_total {
        report.total = Some(report.aggregate());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let Some(total) = report.total {
        println!("{}", format_row(&total, &fields, "total"));
    }

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("xwc: {e:#}");
            ExitCode::FAILURE
        }
    }
}
