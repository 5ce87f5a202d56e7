//! Renaming the backing container file.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::container::FileSystem;
use crate::error::Result;
use crate::path_utils;

impl FileSystem {
    /// Moves the container to `to`, displacing any file already there.
    ///
    /// If `to` exists, it is first renamed to `<to>.bak` (removing any
    /// prior `.bak` sibling first); the container is then renamed to `to`
    /// and the handle's stored path is updated. This is a rename-based
    /// swap, not a copy — `to` must be on the same host filesystem as the
    /// container's current path.
    pub fn move_database(&mut self, to: impl AsRef<Path>) -> Result<()> {
        let to = to.as_ref();

        if path_utils::exists(to) {
            let bak = backup_path(to);
            if path_utils::exists(&bak) {
                std::fs::remove_file(&bak)?;
            }
            path_utils::rename_or_err(to, &bak)?;
            debug!(to = %to.display(), bak = %bak.display(), "displaced existing file to backup");
        }

        path_utils::rename_or_err(&self.path, to)?;
        debug!(from = %self.path.display(), to = %to.display(), "moved container");
        self.path = to.to_path_buf();

        Ok(())
    }
}

/// Builds the `.bak` sibling path for a displaced destination file.
fn backup_path(to: &Path) -> PathBuf {
    let mut name = to.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}
