//! htmlcheck — shallow HTML well-formedness guard for commit hooks.
//!
//! # Usage
//!
//! ```text
//! htmlcheck <file> [<file>...]
//! ```
//!
//! Prints per-file diagnostics to stdout. Exit code 0 if every file reads
//! and validates, 1 otherwise. All files are checked; a bad file never
//! stops the rest.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use clinicsite_htmlcheck::check_file;

#[derive(Parser, Debug)]
#[command(
    name = "htmlcheck",
    version,
    about = "Check HTML files for balanced, correctly nested tags",
    long_about = None,
)]
struct Cli {
    /// HTML files to check.
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut all_ok = true;

    for path in &cli.files {
        match check_file(path) {
            Ok(report) if report.is_valid() => {
                println!("{} {}", "✓".green(), path.display());
            }
            Ok(report) => {
                all_ok = false;
                println!("{} {}", "✗".red(), path.display());
                for diagnostic in &report.diagnostics {
                    println!("    {diagnostic}");
                }
            }
            Err(e) => {
                all_ok = false;
                println!("{} {}", "✗".red(), e);
            }
        }
    }

    if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
