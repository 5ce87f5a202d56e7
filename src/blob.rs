//! Caller-owned read results.
//!
//! The source format exposes heap buffers across its API boundary with an
//! explicit `Dispose()` call the caller must remember to make. In Rust,
//! ownership and `Drop` already express that contract: a [`Blob`] or
//! [`BlobList`] releases its backing allocation when it goes out of scope,
//! with no separate release call to forget.

use std::ops::{Deref, Index};

use crate::error::{Error, Result};

/// The result of a single [`query_one`](crate::FileSystem::query_one) call:
/// an owned, contiguous copy of one stored blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    data: Box<[u8]>,
}

impl Blob {
    /// Wraps an owned byte region as a `Blob`.
    pub(crate) const fn new(data: Box<[u8]>) -> Self {
        Self { data }
    }

    /// Returns the blob's length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the blob is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the blob's bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Deref for Blob {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

/// The result of a batched [`query_many`](crate::FileSystem::query_many)
/// call: one contiguous owned region holding every requested payload, plus
/// a view table addressing each payload at its caller-visible index.
///
/// Dropping the list frees the single backing region exactly once; there is
/// no per-entry release to get wrong, unlike the source's manual-dispose
/// API where releasing an entry obtained from a list was a required no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobList {
    region: Box<[u8]>,
    /// `(start, len)` into `region`, indexed by caller-visible position.
    views: Vec<(usize, usize)>,
}

impl BlobList {
    /// Builds a list from a backing region and per-entry `(start, len)`
    /// views, both already in caller-visible order.
    pub(crate) const fn new(region: Box<[u8]>, views: Vec<(usize, usize)>) -> Self {
        Self { region, views }
    }

    /// Returns the number of entries in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Returns `true` if the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Returns a non-owning view of the payload at `index`, or
    /// [`Error::IndexOutOfRange`] if `index >= self.len()`.
    pub fn get(&self, index: usize) -> Result<&[u8]> {
        let (start, len) = self.views.get(index).copied().ok_or(Error::IndexOutOfRange {
            index,
            len: self.views.len(),
        })?;
        Ok(&self.region[start..start + len])
    }

    /// Returns an iterator over the payloads in caller-visible order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.views.iter().map(move |&(start, len)| &self.region[start..start + len])
    }
}

impl Index<usize> for BlobList {
    type Output = [u8];

    fn index(&self, index: usize) -> &[u8] {
        self.get(index).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<'a> IntoIterator for &'a BlobList {
    type Item = &'a [u8];
    type IntoIter = Box<dyn Iterator<Item = &'a [u8]> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
