//! Single-blob and batched multi-blob queries.

use std::io::{BufReader, Read, Seek, SeekFrom};

use tracing::debug;

use crate::blob::{Blob, BlobList};
use crate::container::FileSystem;
use crate::error::{Error, Result};
use crate::locator::FileInfo;
use crate::path_utils;

impl FileSystem {
    /// Reads back the blob addressed by `info`.
    pub fn query_one(&mut self, info: FileInfo) -> Result<Blob> {
        if !path_utils::exists(&self.path) {
            return Err(Error::DatabaseMissing {
                path: self.path.clone(),
            });
        }

        self.buffers.ensure_stream(info.size as usize);
        let file = self.open_read()?;
        let mut reader = BufReader::with_capacity(self.buffers.stream_capacity().max(1), file);

        let mut data = vec![0_u8; info.size as usize].into_boxed_slice();
        reader.seek(SeekFrom::Start(info.offset))?;
        reader.read_exact(&mut data)?;

        debug!(offset = info.offset, size = info.size, "queried blob");
        Ok(Blob::new(data))
    }

    /// Reads back every blob addressed by `infos`, returning a list whose
    /// `i`-th element is the payload for `infos[i]` — independent of the
    /// order `infos` itself is in.
    ///
    /// Internally the locators are sorted by on-disk offset before issuing
    /// any I/O, turning a scattered access pattern into one monotonically
    /// forward seek pattern; each locator's caller-visible position is
    /// carried alongside it so the output can be rebuilt in input order
    /// without a second sort.
    pub fn query_many(&mut self, infos: &[FileInfo]) -> Result<BlobList> {
        if !path_utils::exists(&self.path) {
            return Err(Error::DatabaseMissing {
                path: self.path.clone(),
            });
        }

        if infos.is_empty() {
            return Ok(BlobList::new(Box::new([]), Vec::new()));
        }

        let mut by_offset: Vec<(usize, FileInfo)> =
            infos.iter().copied().enumerate().collect();
        by_offset.sort_by_key(|&(_, info)| info.offset);

        let total: u64 = infos.iter().map(|info| info.size).sum();
        let max_size = infos.iter().map(|info| info.size).max().unwrap_or(0);

        self.buffers.ensure_stream(max_size as usize);
        let file = self.open_read()?;
        let mut reader = BufReader::with_capacity(self.buffers.stream_capacity().max(1), file);

        let mut region = vec![0_u8; total as usize].into_boxed_slice();
        let mut views = vec![(0_usize, 0_usize); infos.len()];

        let mut cursor = 0_usize;
        for (original_pos, info) in by_offset {
            let size = info.size as usize;
            reader.seek(SeekFrom::Start(info.offset))?;
            reader.read_exact(&mut region[cursor..cursor + size])?;
            views[original_pos] = (cursor, size);
            cursor += size;
        }

        debug!(count = infos.len(), total, "queried blob batch");
        Ok(BlobList::new(region, views))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_one_round_trips_a_single_insert() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.ggtr");
        let mut db = FileSystem::open(&path, 1024).unwrap();

        let info = db.insert_one(b"hello").unwrap();
        let blob = db.query_one(info).unwrap();
        assert_eq!(&*blob, b"hello");
    }

    #[test]
    fn query_many_restores_original_order_under_shuffled_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.ggtr");
        let mut db = FileSystem::open(&path, 4096).unwrap();

        let payloads: [&[u8]; 3] = [b"AAA", b"BB", b"C"];
        let infos = db.insert_many(&payloads).unwrap();

        let reversed: Vec<FileInfo> = infos.iter().rev().copied().collect();
        let list = db.query_many(&reversed).unwrap();

        assert_eq!(list.get(0).unwrap(), b"C");
        assert_eq!(list.get(1).unwrap(), b"BB");
        assert_eq!(list.get(2).unwrap(), b"AAA");
    }

    #[test]
    fn query_many_each_entry_matches_independent_query_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.ggtr");
        let mut db = FileSystem::open(&path, 4096).unwrap();

        let infos = vec![
            db.insert_one(b"first").unwrap(),
            db.insert_one(b"second!!").unwrap(),
            db.insert_one(b"3").unwrap(),
        ];

        let list = db.query_many(&infos).unwrap();
        for (i, info) in infos.iter().enumerate() {
            let single = db.query_one(*info).unwrap();
            assert_eq!(list.get(i).unwrap(), &*single);
        }
    }

    #[test]
    fn query_many_index_out_of_range_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.ggtr");
        let mut db = FileSystem::open(&path, 64).unwrap();
        let info = db.insert_one(b"x").unwrap();
        let list = db.query_many(&[info]).unwrap();
        assert!(matches!(list.get(5), Err(Error::IndexOutOfRange { index: 5, len: 1 })));
    }

    #[test]
    fn query_on_missing_database_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("db.ggtr");
        let mut db = FileSystem::open(&path, 64).unwrap();
        let info = db.insert_one(b"x").unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(db.query_one(info), Err(Error::DatabaseMissing { .. })));
        assert!(matches!(db.query_many(&[info]), Err(Error::DatabaseMissing { .. })));
    }
}
