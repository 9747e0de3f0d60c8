//! The page directory: an ordered, persistent catalog of every page in the
//! heap file, tracking each page's byte offset and free-slot count.
//!
//! Byte format (little-endian, see spec.md §6 and §9's "Directory
//! serialization format" open question): a `u32` count, followed by that
//! many `(u64 offset, u32 free_slots)` entries, 12 bytes each.

use crate::errors::DirectoryError;
use crate::SLOT_COUNT;
use binary_helpers::le::{read_le, write_le};

const ENTRY_LEN: usize = 12;

/// Per-page metadata tracked by the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Byte offset of the page within the data file; always a multiple of
    /// `PAGE_SIZE`.
    pub offset: u64,
    /// Number of free slots remaining on the page, in `[0, SLOT_COUNT]`.
    pub free_slots: u32,
}

impl PageInfo {
    /// Creates a new `PageInfo`.
    pub fn new(offset: u64, free_slots: u32) -> Self {
        debug_assert!(free_slots as usize <= SLOT_COUNT);
        Self { offset, free_slots }
    }
}

/// Ordered sequence of [`PageInfo`]; page `i`'s identifier equals its index
/// here, and its offset equals `i * PAGE_SIZE` (spec.md §3's density
/// invariant).
#[derive(Debug, Default, Clone)]
pub struct PageDirectory {
    pages: Vec<PageInfo>,
}

impl PageDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// Appends a new entry. The caller guarantees `info.offset == len() *
    /// PAGE_SIZE` (spec.md §4.2).
    pub fn add_page(&mut self, info: PageInfo) {
        self.pages.push(info);
    }

    /// The ordered sequence of pages, for iteration.
    pub fn get_pages(&self) -> &[PageInfo] {
        &self.pages
    }

    /// Number of pages tracked.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// True if no pages have been allocated yet.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Replaces the entry whose offset matches `info.offset`.
    ///
    /// The original implementation silently no-ops when the offset is
    /// unknown; per spec.md §9 this rewrite treats that as a programmer
    /// error and fails loudly instead.
    pub fn update_page_info(&mut self, info: PageInfo) -> Result<(), DirectoryError> {
        let slot = self
            .pages
            .iter_mut()
            .find(|p| p.offset == info.offset)
            .ok_or(DirectoryError::UnknownOffset {
                offset: info.offset,
            })?;
        *slot = info;
        Ok(())
    }

    /// Serializes the directory to its on-disk byte format.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = vec![0u8; 4 + self.pages.len() * ENTRY_LEN];
        write_le::<u32>(&mut buf, 0, self.pages.len() as u32).expect("buffer sized for count");
        for (i, page) in self.pages.iter().enumerate() {
            let base = 4 + i * ENTRY_LEN;
            write_le::<u64>(&mut buf, base, page.offset).expect("buffer sized for entry");
            write_le::<u32>(&mut buf, base + 8, page.free_slots).expect("buffer sized for entry");
        }
        buf
    }

    /// Deserializes a directory from its on-disk byte format. Total over
    /// well-formed input; rejects anything shorter than its own declared
    /// length as [`DirectoryError::Truncated`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DirectoryError> {
        if bytes.len() < 4 {
            return Err(DirectoryError::Truncated);
        }
        let count = read_le::<u32>(bytes, 0)? as usize;
        let expected_len = 4 + count * ENTRY_LEN;
        if bytes.len() < expected_len {
            return Err(DirectoryError::Truncated);
        }

        let mut pages = Vec::with_capacity(count);
        for i in 0..count {
            let base = 4 + i * ENTRY_LEN;
            let offset = read_le::<u64>(bytes, base)?;
            let free_slots = read_le::<u32>(bytes, base + 8)?;
            pages.push(PageInfo { offset, free_slots });
        }
        Ok(Self { pages })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_bytes() {
        let mut dir = PageDirectory::new();
        dir.add_page(PageInfo::new(0, 32));
        dir.add_page(PageInfo::new(4096, 10));
        dir.add_page(PageInfo::new(8192, 0));

        let bytes = dir.to_bytes();
        let restored = PageDirectory::from_bytes(&bytes).unwrap();

        assert_eq!(restored.get_pages(), dir.get_pages());
    }

    #[test]
    fn empty_directory_round_trips() {
        let dir = PageDirectory::new();
        let bytes = dir.to_bytes();
        let restored = PageDirectory::from_bytes(&bytes).unwrap();
        assert!(restored.is_empty());
    }

    #[test]
    fn update_known_offset_replaces_entry() {
        let mut dir = PageDirectory::new();
        dir.add_page(PageInfo::new(0, 32));
        dir.update_page_info(PageInfo::new(0, 31)).unwrap();
        assert_eq!(dir.get_pages()[0].free_slots, 31);
    }

    #[test]
    fn update_unknown_offset_fails_loudly() {
        let mut dir = PageDirectory::new();
        dir.add_page(PageInfo::new(0, 32));
        let err = dir.update_page_info(PageInfo::new(4096, 31));
        assert!(matches!(err, Err(DirectoryError::UnknownOffset { offset: 4096 })));
    }

    #[test]
    fn truncated_bytes_are_rejected() {
        let mut dir = PageDirectory::new();
        dir.add_page(PageInfo::new(0, 32));
        let mut bytes = dir.to_bytes();
        bytes.truncate(bytes.len() - 1);
        assert!(matches!(
            PageDirectory::from_bytes(&bytes),
            Err(DirectoryError::Truncated)
        ));
    }
}
