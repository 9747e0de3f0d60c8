//! A fixed-size slotted page: a slot-used bitmap followed by `SLOT_COUNT`
//! fixed-width record slots.
//!
//! ```text
//!   ┌──────────────────┬───────────┬───────────┬─────┬───────────┬─────────┐
//!   │ bitmap (BITMAP_   │  slot 0   │  slot 1   │ ... │ slot N-1  │ padding │
//!   │ BYTES bytes)      │ (RECORD_  │           │     │           │(unused) │
//!   │                   │  WIDTH)   │           │     │           │         │
//!   └──────────────────┴───────────┴───────────┴─────┴───────────┴─────────┘
//! ```
//!
//! Slot `i`'s used bit lives at bit `i` of the bitmap (bit 0 of byte `i /
//! 8`); its record bytes live at `BITMAP_BYTES + i * RECORD_WIDTH`. Both the
//! slot index and the byte layout are fixed, so any slot is addressable
//! without scanning (spec.md §4.1's design choice).

use crate::errors::PageError;
use crate::page_id::PageId;
use crate::record::Record;
use crate::{BITMAP_BYTES, PAGE_SIZE, RECORD_WIDTH, SLOT_COUNT};
use std::marker::PhantomData;

/// A fixed-size page holding up to `SLOT_COUNT` records of type `R`.
#[derive(Debug, Clone)]
pub struct Page<R: Record> {
    page_id: PageId,
    bitmap: [u8; BITMAP_BYTES],
    slots: Vec<u8>,
    _record: PhantomData<R>,
}

impl<R: Record> Page<R> {
    /// Creates a new, entirely empty page for `page_id`.
    pub fn new_empty(page_id: PageId) -> Self {
        Self {
            page_id,
            bitmap: [0u8; BITMAP_BYTES],
            slots: vec![0u8; SLOT_COUNT * RECORD_WIDTH],
            _record: PhantomData,
        }
    }

    /// The page's identifier.
    pub fn page_id(&self) -> PageId {
        self.page_id
    }

    fn check_slot_range(&self, slot: usize) -> Result<(), PageError> {
        if slot >= SLOT_COUNT {
            return Err(PageError::SlotIndexOutOfRange {
                page_id: self.page_id,
                slot,
                slot_count: SLOT_COUNT,
            });
        }
        Ok(())
    }

    /// True if `slot` currently holds a record.
    pub fn is_slot_used(&self, slot: usize) -> bool {
        if slot >= SLOT_COUNT {
            return false;
        }
        let byte = self.bitmap[slot / 8];
        (byte >> (slot % 8)) & 1 == 1
    }

    fn set_slot_used(&mut self, slot: usize, used: bool) {
        let mask = 1u8 << (slot % 8);
        if used {
            self.bitmap[slot / 8] |= mask;
        } else {
            self.bitmap[slot / 8] &= !mask;
        }
    }

    /// Returns the record stored at `slot`.
    ///
    /// Reading an unused slot is a programmer error (spec.md §4.1); this
    /// returns `Err(PageError::SlotEmpty)` rather than panicking so calling
    /// code (here, always `heap::HeapFile`, which never does this) can
    /// propagate the failure like any other.
    pub fn get_record(&self, slot: usize) -> Result<R, PageError> {
        self.check_slot_range(slot)?;
        if !self.is_slot_used(slot) {
            return Err(PageError::SlotEmpty {
                page_id: self.page_id,
                slot,
            });
        }
        let start = slot * RECORD_WIDTH;
        let bytes: &[u8; RECORD_WIDTH] = self.slots[start..start + RECORD_WIDTH]
            .try_into()
            .expect("slot region is exactly RECORD_WIDTH bytes");
        Ok(R::decode(bytes))
    }

    /// Places `record` into `slot`.
    ///
    /// Inserting into an already-used slot is a programmer error; returns
    /// `Err(PageError::SlotOccupied)` instead of overwriting silently.
    pub fn insert_record(&mut self, slot: usize, record: &R) -> Result<(), PageError> {
        self.check_slot_range(slot)?;
        if self.is_slot_used(slot) {
            return Err(PageError::SlotOccupied {
                page_id: self.page_id,
                slot,
            });
        }
        let start = slot * RECORD_WIDTH;
        self.slots[start..start + RECORD_WIDTH].copy_from_slice(&record.encode());
        self.set_slot_used(slot, true);
        Ok(())
    }

    /// Clears `slot`, freeing it for reuse.
    pub fn delete_record(&mut self, slot: usize) -> Result<(), PageError> {
        self.check_slot_range(slot)?;
        if !self.is_slot_used(slot) {
            return Err(PageError::SlotEmpty {
                page_id: self.page_id,
                slot,
            });
        }
        self.set_slot_used(slot, false);
        Ok(())
    }

    /// Index of the first free slot, if any.
    pub fn first_free_slot(&self) -> Option<usize> {
        (0..SLOT_COUNT).find(|&slot| !self.is_slot_used(slot))
    }

    /// Number of free slots on the page, derived by counting the bitmap.
    pub fn free_slot_count(&self) -> usize {
        (0..SLOT_COUNT).filter(|&slot| !self.is_slot_used(slot)).count()
    }

    /// Encodes the page to its fixed-size on-disk image. Total: every slot
    /// (used or not) round-trips through `to_bytes`/`from_bytes`.
    pub fn to_bytes(&self) -> [u8; PAGE_SIZE] {
        let mut buf = [0u8; PAGE_SIZE];
        buf[..BITMAP_BYTES].copy_from_slice(&self.bitmap);
        buf[BITMAP_BYTES..BITMAP_BYTES + self.slots.len()].copy_from_slice(&self.slots);
        buf
    }

    /// Decodes a page image produced by `to_bytes`. `page_id` is supplied by
    /// the caller (it is derived from the page's position in the file, not
    /// stored in the image itself).
    pub fn from_bytes(page_id: PageId, bytes: &[u8]) -> Result<Self, PageError> {
        if bytes.len() != PAGE_SIZE {
            return Err(PageError::MalformedImage {
                expected: PAGE_SIZE,
                actual: bytes.len(),
            });
        }
        let mut bitmap = [0u8; BITMAP_BYTES];
        bitmap.copy_from_slice(&bytes[..BITMAP_BYTES]);
        let slots = bytes[BITMAP_BYTES..BITMAP_BYTES + SLOT_COUNT * RECORD_WIDTH].to_vec();
        Ok(Self {
            page_id,
            bitmap,
            slots,
            _record: PhantomData,
        })
    }
}
