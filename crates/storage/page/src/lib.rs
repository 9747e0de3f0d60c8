//! Fixed-size slotted pages, the page directory, and the `Record` contract
//! pages are built around.
//!
//! A page is exactly [`PAGE_SIZE`] bytes: a slot-used bitmap followed by
//! [`SLOT_COUNT`] fixed-width record slots, with any leftover bytes after
//! the last slot left unused. Both constants are fixed for this build.

pub mod directory;
pub mod errors;
pub mod page;
pub mod page_id;
pub mod record;

pub use directory::{PageDirectory, PageInfo};
pub use errors::{DirectoryError, PageError};
pub use page::Page;
pub use page_id::PageId;
pub use record::Record;

/// Size in bytes of one page on disk.
pub const PAGE_SIZE: usize = 4096;

/// Number of record slots per page, fixed for this build.
pub const SLOT_COUNT: usize = 32;

/// Fixed width, in bytes, of one encoded record (key + payload).
pub const RECORD_WIDTH: usize = 48;

/// Number of bytes reserved for the slot-used bitmap (one bit per slot,
/// rounded up to a whole byte).
pub const BITMAP_BYTES: usize = SLOT_COUNT.div_ceil(8);

const _: () = assert!(
    BITMAP_BYTES + SLOT_COUNT * RECORD_WIDTH <= PAGE_SIZE,
    "SLOT_COUNT * RECORD_WIDTH must fit in PAGE_SIZE alongside the slot bitmap"
);
