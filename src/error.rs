//! Error types for `ggtr` container operations.

use std::path::PathBuf;

/// Alias for `Result<T, ggtr::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by container operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The first four bytes of the container did not match the `ggtr` magic.
    #[error("invalid container header at {path}")]
    InvalidHeader {
        /// Path of the file whose header failed validation.
        path: PathBuf,
    },

    /// The backing file could not be opened in the requested mode.
    #[error("failed to open {path} in mode {mode}")]
    OpenFailed {
        /// Path that failed to open.
        path: PathBuf,
        /// The open-mode description (e.g. `"read"`, `"write-create"`, `"append-update"`).
        mode: &'static str,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A query was issued but the backing file no longer exists.
    #[error("database missing at {path}")]
    DatabaseMissing {
        /// Path that was expected to exist.
        path: PathBuf,
    },

    /// `BlobList` indexing with an out-of-range index.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of entries actually present.
        len: usize,
    },

    /// Any other I/O failure not covered by a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
