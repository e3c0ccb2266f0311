//! Generation pipeline — Load → Assemble → Render → Write → Verify.
//!
//! Strictly sequential and single-threaded; every stage either completes or
//! aborts the run with a [`SiteError`]. The caller observes stage completion
//! through a progress callback, which the CLI uses to print per-stage
//! markers.

use std::path::{Path, PathBuf};

use clinicsite_core::loader;
use clinicsite_renderer::{Engine, SiteContext};

use crate::error::SiteError;
use crate::verifier::{self, VerifyCommand, DEFAULT_MAX_ATTEMPTS};
use crate::writer;

/// Template file name expected in the templates root.
const TEMPLATE_FILE: &str = "index.html.tera";

/// A completed pipeline stage, reported through the progress callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Content loaded from the templates tree.
    Load,
    /// Render context assembled (roster ordered, timestamp stamped).
    Assemble,
    /// HTML rendered by the template engine.
    Render,
    /// Output written to disk.
    Write,
    /// External verification finished (or was skipped).
    Verify,
}

/// Options for one generation run. `Default` reproduces the fixed paths the
/// tool has always used: `templates/` in, `docs/index.html` out.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Root of the input tree (welcome text, staff dirs, template).
    pub templates_root: PathBuf,
    /// Output file path.
    pub output: PathBuf,
    /// Skip the external verification step entirely.
    pub skip_verify: bool,
    /// External command run once per verification attempt.
    pub verify_command: VerifyCommand,
    /// Attempt cap for the verification loop.
    pub verify_attempts: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            templates_root: PathBuf::from("templates"),
            output: Path::new("docs").join("index.html"),
            skip_verify: false,
            verify_command: VerifyCommand::default(),
            verify_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Outcome of a successful run: the rendered page and where it landed.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub html: String,
    pub path: PathBuf,
}

/// Run the full pipeline.
///
/// `progress` is invoked once after each stage completes, with a short
/// human-readable detail line. Stages run in declaration order; the first
/// failure aborts the run and no later stage's callback fires.
pub fn run(
    opts: &GenerateOptions,
    mut progress: impl FnMut(Stage, &str),
) -> Result<GenerationResult, SiteError> {
    let root = opts.templates_root.as_path();

    let welcome = loader::load_welcome(root)?;
    let roster = loader::load_roster(root)?;
    progress(Stage::Load, &format!("loaded welcome text and {} staff members", roster.len()));

    let ctx = SiteContext::assemble_now(welcome, roster);
    progress(Stage::Assemble, &format!("assembled context at {}", ctx.generated_at));

    let engine = Engine::from_template_file(&root.join(TEMPLATE_FILE))?;
    let html = engine.render(&ctx)?;
    progress(Stage::Render, &format!("rendered {} bytes", html.len()));

    writer::write_site(&opts.output, &html)?;
    progress(Stage::Write, &format!("wrote {}", opts.output.display()));

    if opts.skip_verify {
        progress(Stage::Verify, "verification skipped");
    } else {
        let attempts = verifier::verify_and_fix(&opts.verify_command, opts.verify_attempts)?;
        progress(
            Stage::Verify,
            &format!("`{}` passed on attempt {attempts}", opts.verify_command),
        );
    }

    Ok(GenerationResult {
        html,
        path: opts.output.clone(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
