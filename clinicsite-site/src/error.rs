//! Error types for clinicsite-site.

use std::path::PathBuf;

use thiserror::Error;

use clinicsite_core::LoadError;
use clinicsite_renderer::RenderError;

/// All errors that can arise from a generation run.
#[derive(Debug, Error)]
pub enum SiteError {
    /// A required input file or fragment was absent or unreadable.
    #[error("content load error: {0}")]
    Load(#[from] LoadError),

    /// The template engine failed.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An I/O error while writing output, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The external verification command could not be spawned.
    #[error("failed to invoke `{command}`: {source}")]
    VerifierSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The external verification command failed on every attempt.
    #[error("`{command}` still failing after {attempts} attempts:\n{output}")]
    VerifierExhausted {
        command: String,
        attempts: u32,
        /// Tail of the final attempt's stdout/stderr.
        output: String,
    },
}

/// Convenience constructor for [`SiteError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SiteError {
    SiteError::Io {
        path: path.into(),
        source,
    }
}
