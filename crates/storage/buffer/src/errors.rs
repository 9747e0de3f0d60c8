use file::FileError;
use page::{PageError, PageId};
use replacement::ReplacementError;
use thiserror::Error;

/// Errors raised by [`crate::BufferManager`] operations.
#[derive(Debug, Error)]
pub enum BufferError {
    /// `page_id` has no backing page on disk yet.
    #[error("page {0} does not exist on disk")]
    PageNotFound(PageId),
    /// Every frame in the pool is occupied and the replacement policy could
    /// not find an eviction victim (should not happen in practice: any
    /// resident page is always tracked as evictable by this single-threaded
    /// design, see SPEC_FULL.md §4.4).
    #[error("buffer pool is full and no victim could be evicted: {0}")]
    BufferFull(#[from] ReplacementError),
    /// An operation that requires `page_id` to already be resident (for
    /// example `mark_dirty`) was called on a page that is not currently in
    /// the pool. The original design silently no-ops in this situation;
    /// this rewrite fails loudly instead (see SPEC_FULL.md §4.4).
    #[error("page {0} is not currently resident in the buffer pool")]
    NotResident(PageId),
    /// The underlying file manager failed.
    #[error("file I/O error: {0}")]
    File(#[from] FileError),
    /// Decoding or encoding a page image failed.
    #[error("page error: {0}")]
    Page(#[from] PageError),
}
