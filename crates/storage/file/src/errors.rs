use std::io;
use thiserror::Error;

/// Errors raised by a [`crate::FileManager`] implementation.
#[derive(Debug, Error)]
pub enum FileError {
    /// An underlying I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A read returned fewer bytes than the caller's destination buffer
    /// requires, without reaching an error — the page does not exist yet.
    #[error("short read at offset {offset}: expected {expected} bytes, got {actual}")]
    ShortRead {
        offset: u64,
        expected: usize,
        actual: usize,
    },
    /// A write did not place all bytes before the underlying writer stopped
    /// accepting more, and retrying produced no further progress.
    #[error("short write at offset {offset}: wrote {written} of {expected} bytes")]
    ShortWrite {
        offset: u64,
        written: usize,
        expected: usize,
    },
}
