//! An append-only single-file blob container.
//!
//! `ggtr` stores arbitrary byte payloads ("blobs") as a contiguous append-only
//! region inside one regular file and hands callers back a stable
//! `(offset, size)` locator — [`FileInfo`] — that can later be used to read
//! the blob back. It is meant as a packing substrate for applications that
//! need to bundle many small files (an image corpus, for example) into one
//! host-filesystem object, trading per-file metadata overhead for bulk
//! sequential I/O.
//!
//! The container is intentionally minimal: there is no delete, no update,
//! no compaction, no enumeration, and no integrity check. Deleting a blob
//! is only possible by not looking at its locator again — the format keeps
//! no index of what it holds, just where things are.
//!
//! # Quick start
//!
//! ```no_run
//! use ggtr::FileSystem;
//!
//! let mut db = FileSystem::open("images.ggtr", 256 * 1024 * 1024)
//!     .expect("failed to open container");
//!
//! let info = db.insert_one(b"a tiny payload").expect("insert failed");
//! let blob = db.query_one(info).expect("query failed");
//! assert_eq!(&*blob, b"a tiny payload");
//! ```
//!
//! # Concurrency
//!
//! A [`FileSystem`] handle is not safe to share across processes, and two
//! handles open on the same path will corrupt each other's bookkeeping.
//! Every public call follows open-do-close: it acquires the file, does its
//! work, and releases it, so within one handle calls may simply be made in
//! sequence.

mod blob;
mod buffers;
mod config;
mod container;
mod error;
mod locator;
mod path_utils;
mod read;
mod relocate;
mod write;

pub use blob::{Blob, BlobList};
pub use config::{OpenOptions, DEFAULT_CHUNK_SIZE};
pub use container::FileSystem;
pub use error::{Error, Result};
pub use locator::FileInfo;
