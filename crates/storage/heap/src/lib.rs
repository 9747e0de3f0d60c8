//! The top-level record store: a paged heap file over a fixed-capacity
//! buffer pool, with an in-memory hash index and inclusive range scans.

pub mod errors;
pub mod heap_file;
pub mod record;

pub use errors::HeapError;
pub use heap_file::HeapFile;
pub use page::Record;
pub use record::FixedRecord;

#[cfg(test)]
mod tests {
    use super::*;
    use file::InMemoryFileManager;
    use replacement::PolicyKind;

    fn record(key: i32) -> FixedRecord {
        FixedRecord::new(key, [0u8; record::PAYLOAD_LEN])
    }

    #[test]
    fn insert_then_search_round_trips() {
        let mut heap: HeapFile<_, FixedRecord> =
            HeapFile::open(InMemoryFileManager::new(), 4, PolicyKind::Lru).unwrap();

        heap.insert_record(&record(1)).unwrap();
        heap.insert_record(&record(2)).unwrap();

        assert_eq!(heap.search_record_with_hash(1).unwrap(), Some(record(1)));
        assert_eq!(heap.search_record(2).unwrap(), Some(record(2)));
        assert_eq!(heap.search_record(99).unwrap(), None);
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let mut heap: HeapFile<_, FixedRecord> =
            HeapFile::open(InMemoryFileManager::new(), 4, PolicyKind::Lru).unwrap();
        heap.insert_record(&record(1)).unwrap();
        let err = heap.insert_record(&record(1));
        assert!(matches!(err, Err(HeapError::DuplicateKey(1))));
    }

    #[test]
    fn delete_then_reinsert_reuses_the_freed_slot() {
        let mut heap: HeapFile<_, FixedRecord> =
            HeapFile::open(InMemoryFileManager::new(), 4, PolicyKind::Lru).unwrap();
        heap.insert_record(&record(1)).unwrap();

        assert!(heap.delete_record(1).unwrap());
        assert!(!heap.delete_record(1).unwrap());
        assert_eq!(heap.search_record_with_hash(1).unwrap(), None);

        heap.insert_record(&record(2)).unwrap();
        assert_eq!(heap.len(), 1);
    }

    #[test]
    fn insert_spills_onto_a_second_page_once_the_first_is_full() {
        let mut heap: HeapFile<_, FixedRecord> =
            HeapFile::open(InMemoryFileManager::new(), 4, PolicyKind::Lru).unwrap();

        for key in 0..(page::SLOT_COUNT as i32 + 1) {
            heap.insert_record(&record(key)).unwrap();
        }

        assert_eq!(heap.len(), page::SLOT_COUNT + 1);
        for key in 0..(page::SLOT_COUNT as i32 + 1) {
            assert_eq!(heap.search_record_with_hash(key).unwrap(), Some(record(key)));
        }
    }

    #[test]
    fn range_scan_returns_matches_in_page_then_slot_order() {
        let mut heap: HeapFile<_, FixedRecord> =
            HeapFile::open(InMemoryFileManager::new(), 4, PolicyKind::Lru).unwrap();
        for key in [5, 1, 9, 3, 7] {
            heap.insert_record(&record(key)).unwrap();
        }

        // Records land in first-free-slot order (5, 1, 9, 3, 7), so matches
        // for [3, 7] come out in that order, not sorted by key.
        let results = heap.range_scan(3, 7).unwrap();
        let keys: Vec<i32> = results.iter().map(|r| r.key()).collect();
        assert_eq!(keys, vec![5, 3, 7]);
    }

    #[test]
    fn eviction_under_a_small_pool_does_not_lose_data() {
        let mut heap: HeapFile<_, FixedRecord> =
            HeapFile::open(InMemoryFileManager::new(), 1, PolicyKind::Lru).unwrap();

        for key in 0..(page::SLOT_COUNT as i32 * 3) {
            heap.insert_record(&record(key)).unwrap();
        }

        for key in 0..(page::SLOT_COUNT as i32 * 3) {
            assert_eq!(heap.search_record_with_hash(key).unwrap(), Some(record(key)));
        }
    }

    #[test]
    fn hash_index_rebuilds_on_reopen() {
        let fm = InMemoryFileManager::new();
        {
            let mut heap: HeapFile<_, FixedRecord> =
                HeapFile::open(fm.clone(), 4, PolicyKind::Lru).unwrap();
            heap.insert_record(&record(1)).unwrap();
            heap.insert_record(&record(2)).unwrap();
            heap.flush().unwrap();
        }

        let mut reopened: HeapFile<_, FixedRecord> =
            HeapFile::open(fm, 4, PolicyKind::Lru).unwrap();
        assert_eq!(reopened.len(), 2);
        assert_eq!(reopened.search_record_with_hash(1).unwrap(), Some(record(1)));
        assert_eq!(reopened.search_record_with_hash(2).unwrap(), Some(record(2)));
    }

    #[test]
    fn mru_evicts_the_just_touched_page_under_a_hot_key_workload() {
        // With a one-frame pool, every access to a different page is a
        // miss; under MRU the page just brought in is the one evicted next,
        // which is still required to come back with correct data.
        let mut heap: HeapFile<_, FixedRecord> =
            HeapFile::open(InMemoryFileManager::new(), 1, PolicyKind::Mru).unwrap();

        for key in 0..(page::SLOT_COUNT as i32 * 2) {
            heap.insert_record(&record(key)).unwrap();
        }
        for key in 0..(page::SLOT_COUNT as i32 * 2) {
            assert_eq!(heap.search_record_with_hash(key).unwrap(), Some(record(key)));
        }
    }

    #[test]
    fn lru_hit_ratio_vastly_exceeds_mru_under_a_hot_page_workload() {
        // Four full pages (0 hot, 1..3 cold) over a two-frame pool. Each
        // cycle touches the hot page twice, then a rotating cold page once.
        // Under LRU the hot page is always the more-recently-touched of the
        // two resident frames by the time the cold miss needs a victim, so
        // it never gets evicted. Under MRU the hot page's own second touch
        // makes it the most-recently-used entry, so the very next cold miss
        // evicts it — the hot page is reloaded from disk almost every cycle.
        let slots = page::SLOT_COUNT as i32;
        let hot_key = 0;
        let cold_keys = [slots, slots * 2, slots * 3];

        let hit_ratio_for = |policy| {
            let mut heap: HeapFile<_, FixedRecord> =
                HeapFile::open(InMemoryFileManager::new(), 2, policy).unwrap();
            for key in 0..slots * 4 {
                heap.insert_record(&record(key)).unwrap();
            }
            heap.reset_buffer_stats();

            for _ in 0..20 {
                for &cold_key in &cold_keys {
                    heap.search_record_with_hash(hot_key).unwrap();
                    heap.search_record_with_hash(hot_key).unwrap();
                    heap.search_record_with_hash(cold_key).unwrap();
                }
            }
            heap.buffer_hit_ratio()
        };

        let lru_ratio = hit_ratio_for(PolicyKind::Lru);
        let mru_ratio = hit_ratio_for(PolicyKind::Mru);

        assert!(
            lru_ratio > mru_ratio * 1.8,
            "expected LRU hit ratio ({lru_ratio}) to vastly exceed MRU's ({mru_ratio})"
        );
    }
}
