//! Shallow HTML well-formedness checking for `clinicsite-htmlcheck`.
//!
//! `validate(html)` scans tags and checks name balance with a stack of open
//! tags. This is deliberately naive and shallow: no attribute validation,
//! no nesting-legality rules, no entity decoding — just "every opening tag
//! has a matching, correctly nested closing tag". Tag names are compared
//! ASCII case-insensitively.
//!
//! All problems are accumulated; the checker never stops at the first
//! diagnostic, since its job is to enumerate everything wrong with a file
//! before a commit.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// HTML void elements: no content, no closing tag, never pushed.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Raw-text elements: content is script/CSS, not markup, so `<` and `>`
/// inside the body must not be scanned as tags.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// One well-formedness problem found in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A closing tag did not match the innermost open tag.
    MismatchedTag { expected: String, found: String },
    /// A closing tag appeared with no tag open at all.
    UnexpectedClosingTag { tag: String },
    /// An opening tag was never closed by end of input.
    UnclosedTag { tag: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MismatchedTag { expected, found } => {
                write!(f, "mismatched tag: expected </{expected}>, found </{found}>")
            }
            Diagnostic::UnexpectedClosingTag { tag } => {
                write!(f, "unexpected closing tag </{tag}> with nothing open")
            }
            Diagnostic::UnclosedTag { tag } => write!(f, "unclosed tag <{tag}>"),
        }
    }
}

/// Accumulated result of validating one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    /// Valid means zero diagnostics recorded.
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Errors from checking a file on disk.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Validate in-memory HTML.
pub fn validate(html: &str) -> Report {
    let mut stack: Vec<String> = Vec::new();
    let mut diagnostics = Vec::new();

    for tag in scan_tags(html) {
        match tag {
            Tag::Open(name) => {
                if !is_void(&name) {
                    stack.push(name);
                }
            }
            Tag::SelfClosed | Tag::Skip => {}
            Tag::Close(name) => match stack.last() {
                None => diagnostics.push(Diagnostic::UnexpectedClosingTag { tag: name }),
                Some(top) if *top == name => {
                    stack.pop();
                }
                // Mismatch: record it, leave the stack alone so the open
                // tag still shows up as unclosed at end of input.
                Some(top) => diagnostics.push(Diagnostic::MismatchedTag {
                    expected: top.clone(),
                    found: name,
                }),
            },
        }
    }

    // Innermost-first, matching the order a reader would close them.
    while let Some(tag) = stack.pop() {
        diagnostics.push(Diagnostic::UnclosedTag { tag });
    }

    Report { diagnostics }
}

/// Read and validate one file.
pub fn check_file(path: &Path) -> Result<Report, CheckError> {
    let html = std::fs::read_to_string(path).map_err(|source| CheckError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(validate(&html))
}

// ---------------------------------------------------------------------------
// Tag scanning
// ---------------------------------------------------------------------------

enum Tag {
    Open(String),
    Close(String),
    /// `<x/>` syntax — treated like a void element, never pushed.
    SelfClosed,
    /// Comment, doctype, or processing instruction.
    Skip,
}

fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.contains(&name)
}

/// Walk the input and yield every `<...>` construct.
///
/// Quoted attribute values are honoured when looking for the closing `>`,
/// so `<a title="a > b">` scans as one tag. A `<` not starting a plausible
/// tag is treated as text.
fn scan_tags(html: &str) -> Vec<Tag> {
    let bytes = html.as_bytes();
    let mut tags = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'<' {
            i += 1;
            continue;
        }

        if html[i..].starts_with("<!--") {
            i = match html[i..].find("-->") {
                Some(end) => i + end + 3,
                None => bytes.len(),
            };
            tags.push(Tag::Skip);
            continue;
        }

        let rest = &bytes[i + 1..];
        match rest.first() {
            Some(b'!') | Some(b'?') => {
                i = skip_to_tag_end(bytes, i + 1);
                tags.push(Tag::Skip);
            }
            Some(b'/') => {
                let name = read_tag_name(bytes, i + 2);
                i = skip_to_tag_end(bytes, i + 2);
                if !name.is_empty() {
                    tags.push(Tag::Close(name));
                }
            }
            Some(c) if c.is_ascii_alphabetic() => {
                let name = read_tag_name(bytes, i + 1);
                let end = skip_to_tag_end(bytes, i + 1);
                let self_closed = html[i..end].trim_end_matches('>').ends_with('/');
                i = end;
                if self_closed {
                    tags.push(Tag::SelfClosed);
                } else {
                    if RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
                        // Jump straight to the matching close tag; the body
                        // is raw text. Without one, the element runs to end
                        // of input and is reported as unclosed.
                        i = find_close_ci(bytes, i, &name).unwrap_or(bytes.len());
                    }
                    tags.push(Tag::Open(name));
                }
            }
            // Bare '<' in text.
            _ => i += 1,
        }
    }

    tags
}

/// Lowercased tag name starting at `from` (letters, digits, `-`).
fn read_tag_name(bytes: &[u8], from: usize) -> String {
    let mut name = String::new();
    let mut i = from;
    while i < bytes.len() {
        let c = bytes[i];
        if c.is_ascii_alphanumeric() || c == b'-' {
            name.push(c.to_ascii_lowercase() as char);
            i += 1;
        } else {
            break;
        }
    }
    name
}

/// Byte index of the ASCII-case-insensitive `</name` starting at or after
/// `from`, if any.
fn find_close_ci(bytes: &[u8], from: usize, name: &str) -> Option<usize> {
    let pat: Vec<u8> = format!("</{name}").into_bytes();
    bytes[from..]
        .windows(pat.len())
        .position(|w| w.iter().zip(&pat).all(|(a, b)| a.to_ascii_lowercase() == *b))
        .map(|p| from + p)
}

/// Index just past the `>` closing the tag that starts before `from`,
/// skipping over single- and double-quoted attribute values.
fn skip_to_tag_end(bytes: &[u8], from: usize) -> usize {
    let mut i = from;
    let mut quote: Option<u8> = None;
    while i < bytes.len() {
        let c = bytes[i];
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == b'"' || c == b'\'' => quote = Some(c),
            None if c == b'>' => return i + 1,
            None => {}
        }
        i += 1;
    }
    bytes.len()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
