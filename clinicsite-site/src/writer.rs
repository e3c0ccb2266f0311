//! Output writer — atomic tmp+rename write of the rendered page.
//!
//! Protocol:
//!
//! 1. Ensure the output's parent directory exists (created recursively).
//! 2. Write the full UTF-8 content to `<path>.clinicsite.tmp`.
//! 3. Rename to the final path (atomic on POSIX), truncating prior content.
//!
//! A rename failure removes the tmp file and leaves any previous output
//! intact. There is no content hashing: the page is small and is rewritten
//! in full on every run.

use std::path::{Path, PathBuf};

use crate::error::{io_err, SiteError};

/// Write `content` to `path`, replacing whatever was there before.
pub fn write_site(path: &Path, content: &str) -> Result<(), SiteError> {
    let tmp = PathBuf::from(format!("{}.clinicsite.tmp", path.display()));
    write_site_with_tmp(path, content, &tmp)
}

fn write_site_with_tmp(path: &Path, content: &str, tmp: &Path) -> Result<(), SiteError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
        }
    }

    std::fs::write(tmp, content).map_err(|e| io_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote {}", path.display());
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn writes_content_to_new_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("index.html");
        write_site(&path, "<html></html>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<html></html>");
    }

    #[test]
    fn creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("docs").join("index.html");
        write_site(&path, "page").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn truncates_prior_content() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("index.html");
        write_site(&path, "a much longer first version of the page").unwrap();
        write_site(&path, "short").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn tmp_file_removed_after_write() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("index.html");
        write_site(&path, "page").unwrap();
        let tmp_path = PathBuf::from(format!("{}.clinicsite.tmp", path.display()));
        assert!(!tmp_path.exists(), ".clinicsite.tmp must be cleaned up");
    }

    #[test]
    #[cfg(unix)]
    fn rename_failure_leaves_original_and_cleans_tmp() {
        use std::os::unix::fs::PermissionsExt;

        let root = TempDir::new().unwrap();
        let readonly_dir = root.path().join("readonly");
        fs::create_dir_all(&readonly_dir).unwrap();

        let path = readonly_dir.join("index.html");
        fs::write(&path, "original").unwrap();

        let mut perms = fs::metadata(&readonly_dir).unwrap().permissions();
        perms.set_mode(0o555);
        fs::set_permissions(&readonly_dir, perms).unwrap();

        let tmp_dir = TempDir::new().unwrap();
        let tmp_path = tmp_dir.path().join("index.html.clinicsite.tmp");

        let err = write_site_with_tmp(&path, "new content", &tmp_path)
            .expect_err("rename should fail on readonly dir");
        let _ = err;

        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
        assert!(!tmp_path.exists(), ".clinicsite.tmp should be cleaned up");

        let mut perms = fs::metadata(&readonly_dir).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&readonly_dir, perms).unwrap();
    }
}
