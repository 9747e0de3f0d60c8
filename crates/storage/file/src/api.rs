//! Public API for the `file` crate.

use crate::errors::FileError;

/// Manages the byte-level storage backing a single heap file: the fixed-size
/// data pages and the page directory sidecar.
///
/// Implementations do not cache open file handles between calls; each method
/// is free to open and close whatever resource it needs internally.
pub trait FileManager {
    /// Reads exactly `destination.len()` bytes starting at `offset` in the
    /// data file into `destination`.
    ///
    /// Returns `Ok(false)` if `offset` is at or past the current end of the
    /// data file (the page has not been allocated yet) rather than treating
    /// that as an error.
    fn read_page(&self, offset: u64, destination: &mut [u8]) -> Result<bool, FileError>;

    /// Writes `page_data` at `offset` in the data file, extending the file if
    /// necessary.
    fn write_page(&self, offset: u64, page_data: &[u8]) -> Result<(), FileError>;

    /// Reads the full contents of the directory sidecar, if it exists yet.
    fn read_directory(&self) -> Result<Option<Vec<u8>>, FileError>;

    /// Overwrites the directory sidecar with `bytes` in full.
    fn write_directory(&self, bytes: &[u8]) -> Result<(), FileError>;
}
