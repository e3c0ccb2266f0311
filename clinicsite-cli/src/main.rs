//! Clinicsite — static-site generator for the clinic page.
//!
//! # Usage
//!
//! ```text
//! clinicsite [--templates-root <dir>] [--output <file>]
//!            [--skip-verify] [--verify-attempts <n>] [--verify-command <cmd>]
//! ```
//!
//! With no arguments, reads `templates/` and writes `docs/index.html`, then
//! runs `pre-commit run --all-files` with up to 3 attempts. Exit code 0 on
//! success, non-zero on any stage failure.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use colored::Colorize;

use clinicsite_site::{pipeline, GenerateOptions, VerifyCommand};

#[derive(Parser, Debug)]
#[command(
    name = "clinicsite",
    version,
    about = "Generate the clinic page from text fragments and an HTML template",
    long_about = None,
)]
struct Cli {
    /// Root of the input tree (welcome text, staff directories, template).
    #[arg(long, default_value = "templates")]
    templates_root: PathBuf,

    /// Output file path.
    #[arg(long, default_value = "docs/index.html")]
    output: PathBuf,

    /// Skip the post-generation verification step.
    #[arg(long)]
    skip_verify: bool,

    /// Attempt cap for the verification loop (at least 1).
    #[arg(
        long,
        default_value_t = clinicsite_site::verifier::DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    verify_attempts: u32,

    /// Verification command, whitespace-separated (default: pre-commit run
    /// --all-files).
    #[arg(long)]
    verify_command: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let verify_command = match cli.verify_command.as_deref() {
        Some(line) => match VerifyCommand::parse(line) {
            Some(cmd) => cmd,
            None => bail!("--verify-command was empty"),
        },
        None => VerifyCommand::default(),
    };

    let opts = GenerateOptions {
        templates_root: cli.templates_root,
        output: cli.output,
        skip_verify: cli.skip_verify,
        verify_command,
        verify_attempts: cli.verify_attempts,
    };

    let result = pipeline::run(&opts, |stage, detail| {
        let marker = match stage {
            pipeline::Stage::Verify if opts.skip_verify => "⚠".yellow(),
            _ => "✓".green(),
        };
        println!("{marker} {detail}");
    });

    match result {
        Ok(done) => {
            println!("{} generated {}", "✓".green(), done.path.display());
            Ok(())
        }
        Err(e) => {
            println!("{} generation failed", "✗".red());
            Err(e.into())
        }
    }
}
