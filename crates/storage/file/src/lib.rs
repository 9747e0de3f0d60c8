//! The `file` crate is responsible for the interaction between the engine and
//! the file system: reading and writing fixed-size pages and the page
//! directory sidecar for a single heap file.
//!
//! Every method opens the file it needs, performs one read or write, and
//! closes it before returning (spec.md §5's "scoped acquisition" design) —
//! there is no cached, long-lived file handle anywhere in this crate.

pub mod api;
pub mod disk_file_manager;
pub mod errors;
pub mod in_memory_file_manager;

pub use api::FileManager;
pub use disk_file_manager::DiskFileManager;
pub use errors::FileError;
pub use in_memory_file_manager::InMemoryFileManager;
