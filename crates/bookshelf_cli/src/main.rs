//! Interactive terminal shell for the Bookshelf catalog.
//!
//! # Responsibility
//! - Read one user event per stdin line and forward it to the core shell.
//! - Print the rendered screen after every event that changes it.

mod command;

use bookshelf_core::{
    default_log_level, init_logging, CatalogStore, InMemoryCatalog, Library, Route, ShellError,
    TimestampIdGenerator,
};
use clap::Parser;
use command::{parse_command, Command, HELP};
use log::info;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "bookshelf", version, about = "Browse and add books in an in-memory catalog")]
struct Args {
    /// Log level: trace|debug|info|warn|error. Defaults by build mode.
    #[arg(long)]
    log_level: Option<String>,
    /// Absolute directory for rolling log files. Logging is off without it.
    #[arg(long)]
    log_dir: Option<String>,
    /// Path opened at start-up.
    #[arg(long, default_value = "/")]
    start: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("bookshelf: {err}");
            return ExitCode::FAILURE;
        }
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        bookshelf_core::core_version()
    );

    let mut library = start_library(&args.start);

    match run(&mut library, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("bookshelf: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Seeded catalog whose history begins at `start`.
fn start_library(start: &str) -> Library {
    Library::with_start(
        InMemoryCatalog::seeded(),
        TimestampIdGenerator::new(),
        Route::parse(start),
    )
}

fn run<S, R, W>(library: &mut Library<S>, input: R, mut out: W) -> io::Result<()>
where
    S: CatalogStore,
    R: BufRead,
    W: Write,
{
    write!(out, "{}", library.render())?;
    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "error: {err}")?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Show => write!(out, "{}", library.render())?,
            Command::Dump => {
                let json = serde_json::to_string_pretty(library.store().list())
                    .map_err(io::Error::other)?;
                writeln!(out, "{json}")?;
            }
            Command::Open(path) => {
                library.open(&path);
                write!(out, "{}", library.render())?;
            }
            Command::Back => {
                if !library.back() {
                    writeln!(out, "already at the first page")?;
                }
                write!(out, "{}", library.render())?;
            }
            Command::Search(text) => match library.search(text) {
                Ok(()) => write!(out, "{}", library.render())?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            Command::Set(field, value) => {
                if let Err(err) = library.set_field(field, value) {
                    writeln!(out, "error: {err}")?;
                }
            }
            Command::Submit => match library.submit() {
                Ok(id) => {
                    writeln!(out, "added book {id}")?;
                    write!(out, "{}", library.render())?;
                }
                Err(ShellError::Form(_)) => {
                    if let Some(notice) = library.dismiss_notice() {
                        writeln!(out, "! {notice}")?;
                    }
                }
                Err(err) => writeln!(out, "error: {err}")?,
            },
        }
    }
    Ok(())
}
