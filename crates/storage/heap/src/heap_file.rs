//! `HeapFile`: the top-level record store. Combines a [`PageDirectory`], a
//! [`BufferManager`], and an in-memory hash index over `key -> (PageId,
//! slot)` rebuilt fully whenever the file is opened.

use crate::errors::HeapError;
use buffer::BufferManager;
use file::FileManager;
use page::{Page, PageDirectory, PageId, PageInfo, Record, SLOT_COUNT};
use replacement::PolicyKind;
use std::collections::HashMap;
use tracing::info;

/// A paged heap file: fixed-capacity buffer pool in front of a single data
/// file and its directory sidecar, with point insert/delete/lookup and range
/// scan over fixed-width records keyed by a signed 32-bit integer.
#[derive(Debug)]
pub struct HeapFile<F: FileManager, R: Record> {
    buffer: BufferManager<F, R>,
    directory: PageDirectory,
    index: HashMap<i32, (PageId, usize)>,
}

impl<F: FileManager, R: Record> HeapFile<F, R> {
    /// Opens (or creates) a heap file backed by `file_manager`, with a
    /// buffer pool of `pool_size` frames evicted via `policy_kind`.
    ///
    /// Reads the directory sidecar if one exists, then rebuilds the hash
    /// index by walking every page it names — there is no separate
    /// persisted index (spec.md §3).
    pub fn open(
        file_manager: F,
        pool_size: usize,
        policy_kind: PolicyKind,
    ) -> Result<Self, HeapError> {
        let mut buffer = BufferManager::new(file_manager, pool_size, policy_kind);

        let directory = match buffer.read_directory()? {
            Some(bytes) => PageDirectory::from_bytes(&bytes)?,
            None => PageDirectory::new(),
        };

        let mut index = HashMap::new();
        for page_number in 0..directory.len() {
            let page_id = PageId::new(page_number as u32);
            let page = buffer.get_page(page_id)?;
            for slot in 0..SLOT_COUNT {
                if page.is_slot_used(slot) {
                    let record: R = page.get_record(slot)?;
                    index.insert(record.key(), (page_id, slot));
                }
            }
        }

        Ok(Self {
            buffer,
            directory,
            index,
        })
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True if the heap file holds no records.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of buffer pool accesses served without a disk read.
    pub fn buffer_hit_count(&self) -> u64 {
        self.buffer.hit_count()
    }

    /// Number of buffer pool accesses that required a disk read.
    pub fn buffer_miss_count(&self) -> u64 {
        self.buffer.miss_count()
    }

    /// Fraction of buffer pool accesses that were hits.
    pub fn buffer_hit_ratio(&self) -> f64 {
        self.buffer.hit_ratio()
    }

    /// Name of the buffer pool's eviction algorithm (`"lru"`, `"mru"`, or
    /// `"clock"`).
    pub fn replacement_policy_name(&self) -> &'static str {
        self.buffer.replacement_policy_name()
    }

    /// Resets the buffer pool's hit/miss counters to zero.
    pub fn reset_buffer_stats(&mut self) {
        self.buffer.reset_hit_miss_counters();
    }

    /// Inserts `record`, rejecting it if its key already exists.
    ///
    /// Allocates a new page (zero-filled, written directly through the
    /// buffer manager) only when every existing page is full. The data page
    /// write always lands before the directory update so a crash in between
    /// leaves at worst an unreferenced allocated page, never a directory
    /// entry pointing at a write that never happened (spec.md §9).
    pub fn insert_record(&mut self, record: &R) -> Result<(), HeapError> {
        let key = record.key();
        if self.index.contains_key(&key) {
            return Err(HeapError::DuplicateKey(key));
        }

        let (page_id, free_slots) = self.page_with_free_slot()?;

        let page = self.buffer.get_page_mut(page_id)?;
        let slot = page
            .first_free_slot()
            .expect("directory promised a free slot on this page");
        page.insert_record(slot, record)?;
        self.buffer.mark_dirty(page_id)?;
        self.buffer.flush_page(page_id)?;

        self.directory
            .update_page_info(PageInfo::new(page_id.offset(), free_slots - 1))?;
        self.persist_directory()?;

        self.index.insert(key, (page_id, slot));
        Ok(())
    }

    /// Finds a page with at least one free slot, allocating a new one if
    /// none exists. Returns the page id and its free-slot count *before*
    /// the caller consumes one.
    fn page_with_free_slot(&mut self) -> Result<(PageId, u32), HeapError> {
        let existing = self
            .directory
            .get_pages()
            .iter()
            .enumerate()
            .find(|(_, info)| info.free_slots > 0)
            .map(|(i, info)| (PageId::new(i as u32), info.free_slots));

        if let Some(found) = existing {
            return Ok(found);
        }

        let page_id = PageId::new(self.directory.len() as u32);
        let empty_page = Page::<R>::new_empty(page_id);
        self.buffer
            .write_new_page_direct(page_id.offset(), &empty_page.to_bytes())?;
        self.directory
            .add_page(PageInfo::new(page_id.offset(), SLOT_COUNT as u32));

        Ok((page_id, SLOT_COUNT as u32))
    }

    /// Deletes the record with `key`, if present. Returns whether a record
    /// was actually removed.
    pub fn delete_record(&mut self, key: i32) -> Result<bool, HeapError> {
        let Some((page_id, slot)) = self.index.get(&key).copied() else {
            return Ok(false);
        };

        let page = self.buffer.get_page_mut(page_id)?;
        page.delete_record(slot)?;
        self.buffer.mark_dirty(page_id)?;
        self.buffer.flush_page(page_id)?;

        let free_slots = self.directory.get_pages()[page_id.number() as usize].free_slots;
        self.directory
            .update_page_info(PageInfo::new(page_id.offset(), free_slots + 1))?;
        self.persist_directory()?;

        self.index.remove(&key);
        Ok(true)
    }

    /// Looks up `key` via the in-memory hash index.
    pub fn search_record_with_hash(&mut self, key: i32) -> Result<Option<R>, HeapError> {
        let Some((page_id, slot)) = self.index.get(&key).copied() else {
            return Ok(None);
        };
        let page = self.buffer.get_page(page_id)?;
        Ok(Some(page.get_record(slot)?))
    }

    /// Looks up `key` by scanning every page in directory order, ignoring
    /// the hash index. Kept alongside `search_record_with_hash` as the
    /// scan-based lookup path spec.md §1 calls for.
    pub fn search_record(&mut self, key: i32) -> Result<Option<R>, HeapError> {
        for page_number in 0..self.directory.len() {
            let page_id = PageId::new(page_number as u32);
            let page = self.buffer.get_page(page_id)?;
            for slot in 0..SLOT_COUNT {
                if page.is_slot_used(slot) {
                    let record: R = page.get_record(slot)?;
                    if record.key() == key {
                        return Ok(Some(record));
                    }
                }
            }
        }
        Ok(None)
    }

    /// Returns every record with a key in `[start, end]`, in page-then-slot
    /// order (spec.md §4.5/§8), not sorted by key.
    pub fn range_scan(&mut self, start: i32, end: i32) -> Result<Vec<R>, HeapError> {
        let mut results = Vec::new();
        for page_number in 0..self.directory.len() {
            let page_id = PageId::new(page_number as u32);
            let page = self.buffer.get_page(page_id)?;
            for slot in 0..SLOT_COUNT {
                if page.is_slot_used(slot) {
                    let record: R = page.get_record(slot)?;
                    if record.key() >= start && record.key() <= end {
                        results.push(record);
                    }
                }
            }
        }
        Ok(results)
    }

    /// Logs each page's slot occupancy. A diagnostic only; spec.md §1 scopes
    /// statistics/demo surfaces out of the core, so this never participates
    /// in correctness and only needs to not panic.
    pub fn print_all_pages(&mut self) -> Result<(), HeapError> {
        for page_number in 0..self.directory.len() {
            let page_id = PageId::new(page_number as u32);
            let page = self.buffer.get_page(page_id)?;
            let used = (0..SLOT_COUNT).filter(|&s| page.is_slot_used(s)).count();
            info!(page = %page_id, used, free = SLOT_COUNT - used, "page occupancy");
        }
        Ok(())
    }

    /// Flushes every dirty page and persists the directory.
    pub fn flush(&mut self) -> Result<(), HeapError> {
        self.buffer.flush_all()?;
        self.persist_directory()
    }

    fn persist_directory(&mut self) -> Result<(), HeapError> {
        let bytes = self.directory.to_bytes();
        self.buffer.write_directory(&bytes)?;
        Ok(())
    }
}
