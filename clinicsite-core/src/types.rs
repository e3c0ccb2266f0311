//! Domain types for the clinicsite generator.
//!
//! All types are serializable via serde so the renderer can hand them to the
//! template engine without an intermediate mapping layer.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Roster order
// ---------------------------------------------------------------------------

/// Fixed roster order for the clinic page.
///
/// This is a manually maintained list, not inferred from the filesystem:
/// entries render in exactly this order, and an identifier whose directory
/// does not exist is skipped without reordering the rest.
pub const ROSTER_ORDER: &[&str] = &[
    "doctor-orly",
    "doctor-dafi",
    "nurse",
    "dietitian",
    "psychologist",
];

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed staff identifier — the subdirectory name under the
/// templates root holding one staff member's four text fragments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaffId(pub String);

impl fmt::Display for StaffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for StaffId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for StaffId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Staff record
// ---------------------------------------------------------------------------

/// One staff member's page content, loaded from four required text files.
///
/// The staff identifier is deliberately not stored here: it only locates the
/// directory and fixes roster order, and the rendered page never shows it.
/// Immutable after loading; lives for a single generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Display name (`name.txt`).
    pub name: String,
    /// Role title shown under the name (`title.txt`).
    pub title: String,
    /// Portrait path or URL (`image.txt`).
    pub image: String,
    /// Biography paragraph (`bio.txt`).
    pub bio: String,
}
