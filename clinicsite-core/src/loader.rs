//! Content loader — reads text fragments from the templates tree.
//!
//! Layout, relative to the templates root:
//!
//! ```text
//! templates/
//!   welcome.txt
//!   index.html.tera
//!   <staff-id>/
//!     name.txt
//!     title.txt
//!     image.txt
//!     bio.txt
//! ```
//!
//! `welcome.txt` is required. Each staff identifier in [`ROSTER_ORDER`] is
//! probed: an absent subdirectory skips that entry, a present subdirectory
//! must carry all four files.

use std::fs;
use std::path::Path;

use crate::error::{io_err, LoadError};
use crate::types::{StaffId, StaffMember, ROSTER_ORDER};

/// The four per-staff fragment files, in record-field order.
const STAFF_FILES: [&str; 4] = ["name.txt", "title.txt", "image.txt", "bio.txt"];

/// Read one UTF-8 text fragment and strip surrounding whitespace.
///
/// A missing file is [`LoadError::MissingResource`]; any other read failure
/// is [`LoadError::Io`] with the path attached.
fn read_fragment(path: &Path) -> Result<String, LoadError> {
    match fs::read_to_string(path) {
        Ok(s) => Ok(s.trim().to_string()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(LoadError::MissingResource {
                path: path.to_path_buf(),
            })
        }
        Err(e) => Err(io_err(path, e)),
    }
}

/// Load the welcome blurb from `<root>/welcome.txt`.
pub fn load_welcome(root: &Path) -> Result<String, LoadError> {
    read_fragment(&root.join("welcome.txt"))
}

/// Load one staff member from `<root>/<id>/`.
///
/// Returns `Ok(None)` if the subdirectory does not exist. A subdirectory
/// that exists but lacks any of the four files is an error — partial staff
/// records are never produced.
pub fn load_staff_member(root: &Path, id: &StaffId) -> Result<Option<StaffMember>, LoadError> {
    let dir = root.join(&id.0);
    if !dir.is_dir() {
        return Ok(None);
    }

    let [name, title, image, bio] = STAFF_FILES.map(|f| dir.join(f));
    Ok(Some(StaffMember {
        name: read_fragment(&name)?,
        title: read_fragment(&title)?,
        image: read_fragment(&image)?,
        bio: read_fragment(&bio)?,
    }))
}

/// Load the full roster in [`ROSTER_ORDER`], skipping absent entries.
pub fn load_roster(root: &Path) -> Result<Vec<StaffMember>, LoadError> {
    let mut roster = Vec::with_capacity(ROSTER_ORDER.len());
    for id in ROSTER_ORDER.iter().map(|&raw| StaffId::from(raw)) {
        if let Some(member) = load_staff_member(root, &id)? {
            roster.push(member);
        }
    }
    Ok(roster)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
