//! Error types for clinicsite-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while loading site content.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A required input file was absent.
    ///
    /// An absent staff *directory* is not an error (that entry is skipped);
    /// a present directory missing one of its four files is.
    #[error("missing required resource: {path}")]
    MissingResource { path: PathBuf },

    /// Underlying I/O failure (permission denied, unreadable file, etc.).
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`LoadError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> LoadError {
    LoadError::Io {
        path: path.into(),
        source,
    }
}
