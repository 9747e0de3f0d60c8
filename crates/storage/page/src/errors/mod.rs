use crate::page_id::PageId;
use binary_helpers::bin_error::BinaryError;
use thiserror::Error;

/// Errors raised by [`crate::Page`] operations.
#[derive(Debug, Error)]
pub enum PageError {
    /// Attempted to insert into a slot that is already occupied.
    #[error("slot {slot} on {page_id} is already occupied")]
    SlotOccupied {
        /// Page the offending slot belongs to.
        page_id: PageId,
        /// Index of the occupied slot.
        slot: usize,
    },
    /// Attempted to read or delete a slot that has no record in it.
    #[error("slot {slot} on {page_id} is empty")]
    SlotEmpty {
        /// Page the offending slot belongs to.
        page_id: PageId,
        /// Index of the empty slot.
        slot: usize,
    },
    /// Slot index was outside `[0, SLOT_COUNT)`.
    #[error("slot index {slot} is out of range for {page_id} (SLOT_COUNT = {slot_count})")]
    SlotIndexOutOfRange {
        /// Page the out-of-range index was requested on.
        page_id: PageId,
        /// Index that was requested.
        slot: usize,
        /// Number of slots in a page.
        slot_count: usize,
    },
    /// `from_bytes` was given a slice whose length does not equal `PAGE_SIZE`.
    #[error("page image has length {actual}, expected {expected}")]
    MalformedImage {
        /// Expected length (`PAGE_SIZE`).
        expected: usize,
        /// Actual length of the provided slice.
        actual: usize,
    },
    /// A little-endian encode/decode inside the page failed.
    #[error("binary encoding error")]
    Binary(#[from] BinaryError),
}

/// Errors raised by [`crate::PageDirectory`] operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// `update_page_info` was called with an offset not present in the
    /// directory. The original implementation silently no-ops in this case;
    /// this rewrite treats it as a programmer error and fails loudly
    /// (see SPEC_FULL.md §4.2).
    #[error("no page at offset {offset} in the directory")]
    UnknownOffset {
        /// Offset that was not found.
        offset: u64,
    },
    /// The serialized directory was shorter than its own declared length.
    #[error("directory sidecar file is truncated")]
    Truncated,
    /// A little-endian decode of the directory bytes failed.
    #[error("binary encoding error")]
    Binary(#[from] BinaryError),
}
