//! CLI entry point for graphical password registration and authentication

use clap::Parser;
use std::process::ExitCode;
use stripkey::io::cli::{Cli, SessionShell, summarize};
use stripkey::io::logging;

// Allow print for the user-facing outcome line
#[allow(clippy::print_stdout, clippy::print_stderr)]
fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let command = cli.command.clone();
    let outcome = SessionShell::new(cli).process();
    let summary = summarize(&command, &outcome);

    if summary.is_error() {
        eprintln!("{}", summary.message);
    } else {
        println!("{}", summary.message);
    }

    ExitCode::from(summary.exit_status)
}
