use std::array::TryFromSliceError;
use thiserror::Error;

/// Errors raised while reading or writing little-endian integers from/to a
/// byte slice.
#[derive(Error, Debug)]
pub enum BinaryError {
    /// The provided slice did not contain `expected` bytes starting at
    /// `from_offset`.
    #[error(
        "attempt to read {expected} bytes from offset {from_offset}, but the slice does not contain that range"
    )]
    ReadErrorInvalidSliceSize {
        /// Number of bytes the read required.
        expected: usize,
        /// Offset at which the read was attempted.
        from_offset: usize,
    },
    /// A fixed-size array conversion failed after a length check already
    /// passed; kept for the rare case `try_into` still fails.
    #[error("error converting a slice")]
    SliceConversionError(#[from] TryFromSliceError),
    /// Attempted to write a value whose encoded length does not match the
    /// destination slice.
    #[error("error writing data due to size mismatch: source {src} vs target {target}")]
    WriteErrorSliceSizeMismatch {
        /// Length of the encoded value.
        src: usize,
        /// Length of the destination slice.
        target: usize,
    },
}
