//! Tera rendering engine — loads the page template and renders it.
//!
//! The template is a single file (conventionally `index.html.tera` in the
//! templates root). Tera is treated as an opaque substitution engine: this
//! crate only reproduces the call contract `render(template, context) ->
//! String` and never interprets template syntax itself.

use std::path::{Path, PathBuf};

use tera::Tera;

use crate::context::SiteContext;
use crate::error::RenderError;

/// Name the template is registered under inside the Tera instance.
const TEMPLATE_NAME: &str = "index.html";

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

/// Tera-based engine for the single page template.
///
/// Create once with [`Engine::from_template_file`] and reuse for any number
/// of renders.
#[derive(Debug)]
pub struct Engine {
    tera: Tera,
}

impl Engine {
    /// Load the page template from `path`.
    ///
    /// A missing file is [`RenderError::TemplateNotFound`]; a file that
    /// Tera cannot parse is [`RenderError::Tera`].
    pub fn from_template_file(path: &Path) -> Result<Self, RenderError> {
        let source = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RenderError::TemplateNotFound {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => return Err(io_err(path, e)),
        };
        Self::from_template_source(&source)
    }

    /// Build an engine from in-memory template source.
    pub fn from_template_source(source: &str) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, source)?;
        Ok(Engine { tera })
    }

    /// Render the page for the supplied context.
    ///
    /// A template construct the engine cannot resolve (for example a
    /// reference to an undefined context key) fails with
    /// [`RenderError::Tera`].
    pub fn render(&self, ctx: &SiteContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        Ok(self.tera.render(TEMPLATE_NAME, &tera_ctx)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
