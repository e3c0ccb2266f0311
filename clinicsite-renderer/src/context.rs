//! Render context — serializable payload handed to the template.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use clinicsite_core::StaffMember;

use crate::error::RenderError;

/// Timestamp format stamped into the rendered page footer.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Everything the page template can reference.
///
/// Built fresh per generation run and never persisted. Field names are the
/// template's variable names, so renames here are template-breaking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContext {
    /// Welcome blurb shown at the top of the page.
    pub welcome_text: String,
    /// Staff roster, already in fixed display order.
    pub staff: Vec<StaffMember>,
    /// Wall-clock generation time, `YYYY-MM-DD HH:MM:SS`.
    pub generated_at: String,
}

impl SiteContext {
    /// Assemble a context from loaded content and an explicit timestamp.
    ///
    /// Pure — always succeeds. The explicit-timestamp form exists so tests
    /// can freeze the clock and compare rendered output byte for byte.
    pub fn assemble(
        welcome_text: String,
        staff: Vec<StaffMember>,
        generated_at: DateTime<Local>,
    ) -> Self {
        SiteContext {
            welcome_text,
            staff,
            generated_at: generated_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Assemble a context stamped with the current local time.
    pub fn assemble_now(welcome_text: String, staff: Vec<StaffMember>) -> Self {
        Self::assemble(welcome_text, staff, Local::now())
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
