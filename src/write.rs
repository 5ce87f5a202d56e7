//! Single-blob and batched multi-blob insertion.

use std::io::{BufWriter, Seek, SeekFrom, Write};

use tracing::debug;

use crate::container::FileSystem;
use crate::error::Result;
use crate::locator::FileInfo;

impl FileSystem {
    /// Appends `bytes` to the container and returns its locator.
    ///
    /// The returned offset is the value of `data_end` before this insert;
    /// `data_end` then advances by `bytes.len()`.
    pub fn insert_one(&mut self, bytes: &[u8]) -> Result<FileInfo> {
        let size = bytes.len() as u64;
        let offset = self.data_end;

        let mut file = self.open_read_write()?;
        self.extend_region(&mut file, size)?;
        self.buffers.ensure_stream(bytes.len());

        let mut writer = BufWriter::with_capacity(self.buffers.stream_capacity(), file);
        writer.seek(SeekFrom::Start(offset))?;
        writer.write_all(bytes)?;
        writer.flush()?;
        drop(writer);

        self.data_end += size;
        self.sync_header()?;

        debug!(offset, size, "inserted blob");
        Ok(FileInfo::new(offset, size))
    }

    /// Appends every payload in `bytes` to the container in one coalesced
    /// write and returns each payload's locator, in input order.
    ///
    /// Offsets are assigned deterministically in input order — the first
    /// payload lands at the pre-call `data_end`, the second immediately
    /// after it, and so on — regardless of how the payloads are staged
    /// internally. The whole batch succeeds or fails together: a failure
    /// partway through staging or writing leaves `data_end` unchanged.
    pub fn insert_many(&mut self, bytes: &[&[u8]]) -> Result<Vec<FileInfo>> {
        if bytes.is_empty() {
            return Ok(Vec::new());
        }

        let insert_start = self.data_end;
        let mut infos = Vec::with_capacity(bytes.len());
        let mut prefix = 0_u64;
        for payload in bytes {
            let size = payload.len() as u64;
            infos.push(FileInfo::new(insert_start + prefix, size));
            prefix += size;
        }
        let total = prefix;

        let mut file = self.open_read_write()?;
        self.extend_region(&mut file, total)?;
        self.buffers.ensure_stream(total as usize);

        {
            let staging = self.buffers.staging_mut(total as usize);
            let mut cursor = 0_usize;
            for payload in bytes {
                staging[cursor..cursor + payload.len()].copy_from_slice(payload);
                cursor += payload.len();
            }
        }

        let mut writer = BufWriter::with_capacity(self.buffers.stream_capacity(), file);
        writer.seek(SeekFrom::Start(insert_start))?;
        writer.write_all(&self.buffers.staging_mut(total as usize)[..total as usize])?;
        writer.flush()?;
        drop(writer);

        self.data_end += total;
        self.sync_header()?;

        debug!(insert_start, total, count = bytes.len(), "inserted blob batch");
        Ok(infos)
    }
}
