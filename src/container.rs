//! The container file itself: header layout, bootstrap, and the handle that
//! tracks its in-memory state between calls.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::buffers::BufferPool;
use crate::error::{Error, Result};
use crate::path_utils;

/// The four magic bytes every container file opens with.
pub(crate) const MAGIC: [u8; 4] = *b"ggtr";
/// Size of the fixed header: 4 magic bytes + an 8-byte little-endian
/// `data_end` offset.
pub(crate) const HEADER_SIZE: u64 = 12;

/// Handle to one append-only blob container.
///
/// Holds no long-lived file descriptor — every public operation follows
/// open-do-close: it acquires the backing file, performs its work, and
/// releases the file before returning. The only state that persists
/// between calls is the path, the data-end offset, the current region
/// size, the allocation chunk size, and the two scratch buffers.
#[derive(Debug)]
pub struct FileSystem {
    /// Path the container is currently backed by; updated in place by
    /// [`move_database`](Self::move_database).
    pub(crate) path: PathBuf,
    /// Byte offset of the first unused position in the data region.
    pub(crate) data_end: u64,
    /// Current total size of the backing file, always `>= data_end`.
    pub(crate) region_bytes: u64,
    /// Allocation unit `A` the region is extended by; fixed for the life
    /// of the handle.
    pub(crate) chunk_size: u64,
    /// Scratch buffers reused across calls on this handle.
    pub(crate) buffers: BufferPool,
}

impl FileSystem {
    /// Opens the container at `path`, bootstrapping a new one if it does
    /// not exist.
    ///
    /// `chunk_size` is the allocation unit `A` the region grows by; it is
    /// remembered on the handle and used for every later extension,
    /// regardless of what value (if any) originally created the file.
    pub fn open(path: impl AsRef<Path>, chunk_size: u64) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let (data_end, region_bytes) = if path_utils::exists(&path) {
            Self::bootstrap_existing(&path)?
        } else {
            Self::bootstrap_fresh(&path, chunk_size)?
        };

        debug!(path = %path.display(), data_end, region_bytes, chunk_size, "container opened");

        Ok(Self {
            path,
            data_end,
            region_bytes,
            chunk_size,
            buffers: BufferPool::default(),
        })
    }

    /// Creates a brand new container: writes the magic, an initial
    /// `data_end` of [`HEADER_SIZE`], and one preallocated chunk.
    fn bootstrap_fresh(path: &Path, chunk_size: u64) -> Result<(u64, u64)> {
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|source| Error::OpenFailed {
                path: path.to_path_buf(),
                mode: "write-create-truncate",
                source,
            })?;

        let data_end = HEADER_SIZE;
        file.write_all(&MAGIC)?;
        file.write_all(&data_end.to_le_bytes())?;
        write_zeros(&mut file, chunk_size)?;
        file.sync_all()?;

        let region_bytes = HEADER_SIZE + chunk_size;
        Ok((data_end, region_bytes))
    }

    /// Opens an existing container and validates its header.
    fn bootstrap_existing(path: &Path) -> Result<(u64, u64)> {
        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .open(path)
            .map_err(|source| Error::OpenFailed {
                path: path.to_path_buf(),
                mode: "read",
                source,
            })?;

        let mut magic = [0_u8; 4];
        file.read_exact(&mut magic)?;
        if magic != MAGIC {
            return Err(Error::InvalidHeader {
                path: path.to_path_buf(),
            });
        }

        let mut data_end_bytes = [0_u8; 8];
        file.read_exact(&mut data_end_bytes)?;
        let data_end = u64::from_le_bytes(data_end_bytes);

        let region_bytes = file.seek(SeekFrom::End(0))?;

        Ok((data_end, region_bytes))
    }

    /// Extends the region by whole chunks until it can hold `need` more
    /// bytes past the current `data_end`.
    pub(crate) fn extend_region(&mut self, file: &mut File, need: u64) -> Result<()> {
        while self.data_end + need > self.region_bytes {
            file.seek(SeekFrom::Start(self.region_bytes))?;
            write_zeros(file, self.chunk_size)?;
            self.region_bytes += self.chunk_size;
        }
        Ok(())
    }

    /// Rewrites the `data_end` header field to match the in-memory value.
    ///
    /// Called at the end of every call that advances `data_end`, keeping
    /// the on-disk header durable across calls even though the handle
    /// holds no persistent file descriptor.
    pub(crate) fn sync_header(&self) -> Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .open(&self.path)
            .map_err(|source| Error::OpenFailed {
                path: self.path.clone(),
                mode: "append-update",
                source,
            })?;
        file.seek(SeekFrom::Start(4))?;
        file.write_all(&self.data_end.to_le_bytes())?;
        Ok(())
    }

    /// Opens the container file for reading and writing at arbitrary
    /// offsets.
    pub(crate) fn open_read_write(&self) -> Result<File> {
        std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .open(&self.path)
            .map_err(|source| Error::OpenFailed {
                path: self.path.clone(),
                mode: "append-update",
                source,
            })
    }

    /// Opens the container file read-only.
    pub(crate) fn open_read(&self) -> Result<File> {
        std::fs::OpenOptions::new()
            .read(true)
            .open(&self.path)
            .map_err(|source| Error::OpenFailed {
                path: self.path.clone(),
                mode: "read",
                source,
            })
    }

    /// Returns the current path of the container file.
    #[must_use]
    pub fn dbpath(&self) -> &Path {
        &self.path
    }
}

/// Writes `n` zero bytes to `file` at its current position, in one
/// buffered pass rather than `n` single-byte writes.
fn write_zeros(file: &mut File, n: u64) -> std::io::Result<()> {
    const CHUNK: usize = 64 * 1024;
    let zeros = [0_u8; CHUNK];
    let mut remaining = n;
    while remaining > 0 {
        let take = remaining.min(CHUNK as u64) as usize;
        file.write_all(&zeros[..take])?;
        remaining -= take as u64;
    }
    Ok(())
}
