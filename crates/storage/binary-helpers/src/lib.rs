//! Little-endian byte (de)serialization helpers shared by the `page` crate's
//! page header/slot bitmap encoding and the page directory's sidecar format.

pub mod bin_error;
pub mod conversions;
pub mod le;
