//! Demo binary exercising the heap file engine end to end: opens (or
//! creates) a data file according to `heapdb.toml`, inserts a handful of
//! records, looks a few up, and prints page occupancy.
//!
//! This binary is an external collaborator to the engine, not part of its
//! tested contract — it only needs to demonstrate the public API.

use heapdb::config::EngineConfig;
use heapdb::{DiskFileManager, FixedRecord, HeapFile, Record};

fn main() {
    heapdb::logging::init_logging();

    let cfg = match EngineConfig::load_from_file("heapdb.toml") {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(2);
        }
    };

    let file_manager = DiskFileManager::new(
        cfg.storage.data_path.clone(),
        cfg.storage.directory_path.clone(),
    );

    let mut heap: HeapFile<_, FixedRecord> = match HeapFile::open(
        file_manager,
        cfg.storage.pool_size.get(),
        cfg.storage.replacement_policy.into(),
    ) {
        Ok(heap) => heap,
        Err(e) => {
            tracing::error!("failed to open heap file: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(existing_records = heap.len(), "opened heap file");

    for key in 1..=5 {
        let payload = [key as u8; heap::record::PAYLOAD_LEN];
        match heap.insert_record(&FixedRecord::new(key, payload)) {
            Ok(()) => tracing::info!(key, "inserted record"),
            Err(e) => tracing::warn!(key, "insert skipped: {e}"),
        }
    }

    if let Some(record) = heap.search_record_with_hash(3).unwrap() {
        tracing::info!(key = record.key(), "found record via hash index");
    }

    for record in heap.range_scan(2, 4).unwrap() {
        tracing::info!(key = record.key(), "record in range [2, 4]");
    }

    if let Err(e) = heap.print_all_pages() {
        tracing::warn!("failed to print page occupancy: {e}");
    }

    if let Err(e) = heap.flush() {
        tracing::error!("failed to flush heap file on exit: {e}");
        std::process::exit(1);
    }
}
