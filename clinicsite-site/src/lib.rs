//! # clinicsite-site
//!
//! Output writing, post-generation verification, and the generation
//! pipeline.
//!
//! Call [`pipeline::run`] to execute the full Load → Assemble → Render →
//! Write → Verify sequence for a templates tree.

pub mod error;
pub mod pipeline;
pub mod verifier;
pub mod writer;

pub use error::SiteError;
pub use pipeline::{run, GenerateOptions, GenerationResult, Stage};
pub use verifier::VerifyCommand;
