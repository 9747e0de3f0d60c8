//! # heapdb
//!
//! A single-node, single-threaded paged heap file with a fixed-capacity
//! buffer pool and pluggable eviction policy (LRU / MRU / CLOCK).
//!
//! The engine itself is split across the crates under `crates/storage/`:
//!
//! - `binary-helpers`: little-endian integer encode/decode.
//! - [`page`]: the fixed-size slotted page, page directory, and `Record`
//!   contract.
//! - [`file`]: scoped-acquisition disk I/O plus an in-memory test double.
//! - [`replacement`]: the LRU/MRU/CLOCK eviction policies.
//! - [`buffer`]: the page cache sitting in front of the data file.
//! - [`heap`]: [`heap::HeapFile`], the top-level record store.
//!
//! This crate adds the pieces around that engine: configuration, logging,
//! and a small demo binary.

pub mod config;
pub mod logging;

pub use buffer::BufferManager;
pub use config::EngineConfig;
pub use file::{DiskFileManager, FileManager};
pub use heap::{FixedRecord, HeapError, HeapFile, Record};
pub use page::PageId;
pub use replacement::PolicyKind;
