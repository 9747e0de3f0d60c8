use buffer::BufferError;
use file::FileError;
use page::{DirectoryError, PageError};
use thiserror::Error;

/// Errors raised by [`crate::HeapFile`] operations.
#[derive(Debug, Error)]
pub enum HeapError {
    /// `insert_record` was called with a key already present in the hash
    /// index. The original design silently overwrote the index entry,
    /// stranding the old record's slot; this rewrite rejects the insert
    /// instead (see SPEC_FULL.md §4.5).
    #[error("key {0} already exists")]
    DuplicateKey(i32),
    /// The buffer manager failed to serve or evict a page.
    #[error("buffer error: {0}")]
    Buffer(#[from] BufferError),
    /// A page-level operation failed.
    #[error("page error: {0}")]
    Page(#[from] PageError),
    /// The page directory rejected an operation or failed to decode.
    #[error("directory error: {0}")]
    Directory(#[from] DirectoryError),
    /// A direct file operation (outside the buffer pool) failed.
    #[error("file error: {0}")]
    File(#[from] FileError),
}
