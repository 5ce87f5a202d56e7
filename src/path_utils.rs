//! Filesystem primitives the container format is built on top of.
//!
//! Kept deliberately thin: the container core treats the host filesystem as
//! an external collaborator and only ever asks it two things — does a
//! regular file exist at this path, and can one path be renamed to another.

use std::io;
use std::path::Path;

/// Returns `true` if `path` refers to an existing regular file.
///
/// Mirrors a `stat` + `S_ISREG` check: a directory, symlink-to-directory,
/// device node, etc. at `path` is not considered "existing" for the
/// container's purposes.
pub fn exists(path: impl AsRef<Path>) -> bool {
    std::fs::metadata(path.as_ref()).is_ok_and(|meta| meta.is_file())
}

/// Best-effort rename of `from` to `to`.
///
/// Returns `true` on success, `false` on any failure (the container's
/// relocation logic treats a failed rename as non-fatal to probe with, but
/// surfaces the error through [`rename_or_err`] where it must not be
/// swallowed).
pub fn rename(from: impl AsRef<Path>, to: impl AsRef<Path>) -> bool {
    std::fs::rename(from, to).is_ok()
}

/// Renames `from` to `to`, surfacing the underlying I/O error on failure.
pub fn rename_or_err(from: impl AsRef<Path>, to: impl AsRef<Path>) -> io::Result<()> {
    std::fs::rename(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exists_is_false_for_missing_path() {
        assert!(!exists("/nonexistent/path/for/ggtr/tests"));
    }

    #[test]
    fn exists_is_false_for_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!exists(dir.path()));
    }

    #[test]
    fn exists_is_true_for_regular_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f");
        std::fs::write(&path, b"x").unwrap();
        assert!(exists(&path));
    }

    #[test]
    fn rename_moves_file() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("a");
        let to = dir.path().join("b");
        std::fs::write(&from, b"data").unwrap();
        assert!(rename(&from, &to));
        assert!(!exists(&from));
        assert!(exists(&to));
    }

    #[test]
    fn rename_reports_failure_for_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("missing");
        let to = dir.path().join("b");
        assert!(!rename(&from, &to));
    }
}
