//! Configuration for opening a container.

use std::path::Path;

use crate::container::FileSystem;
use crate::error::Result;

/// Default allocation chunk size: 256 MiB, a reasonable default for image
/// and archive corpora without pushing every container to over-allocate on
/// first write.
pub const DEFAULT_CHUNK_SIZE: u64 = 256 * 1024 * 1024;

/// Builder for opening a [`FileSystem`] with a non-default allocation
/// chunk size.
///
/// # Example
///
/// ```no_run
/// use ggtr::OpenOptions;
///
/// let db = OpenOptions::new()
///     .chunk_size(512 * 1024 * 1024)
///     .open("images.ggtr")
///     .expect("failed to open container");
/// ```
#[derive(Debug, Clone, Copy)]
#[must_use = "an OpenOptions does nothing until .open() is called"]
pub struct OpenOptions {
    /// Allocation chunk size `A`, remembered on the handle for every later
    /// region extension.
    chunk_size: u64,
}

impl Default for OpenOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl OpenOptions {
    /// Starts a builder with the default chunk size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the allocation chunk size `A` in bytes.
    ///
    /// Once a container is bootstrapped with a given `A`, later opens
    /// should use the same value — extension arithmetic is defined in
    /// terms of whatever `A` the handle is constructed with, not whatever
    /// value happened to create the file.
    pub const fn chunk_size(mut self, bytes: u64) -> Self {
        self.chunk_size = bytes;
        self
    }

    /// Opens or bootstraps the container at `path`.
    pub fn open(self, path: impl AsRef<Path>) -> Result<FileSystem> {
        FileSystem::open(path, self.chunk_size)
    }
}
