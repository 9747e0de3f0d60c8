//! A concrete, fixed-width [`Record`] implementation: a key plus an
//! uninterpreted payload filling out the rest of the slot. Not part of the
//! core's contract — `page`, `buffer`, and `HeapFile` only ever depend on
//! the `Record` trait — this is the reference type used by tests and the
//! demo binary.

use page::{Record, RECORD_WIDTH};

/// Number of payload bytes available after the 4-byte key.
pub const PAYLOAD_LEN: usize = RECORD_WIDTH - 4;

/// A record carrying a signed 32-bit key and a fixed-width byte payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedRecord {
    key: i32,
    payload: [u8; PAYLOAD_LEN],
}

impl FixedRecord {
    /// Builds a record from a key and its full payload.
    pub fn new(key: i32, payload: [u8; PAYLOAD_LEN]) -> Self {
        Self { key, payload }
    }

    /// The record's uninterpreted payload bytes.
    pub fn payload(&self) -> &[u8; PAYLOAD_LEN] {
        &self.payload
    }
}

impl Record for FixedRecord {
    fn key(&self) -> i32 {
        self.key
    }

    fn encode(&self) -> [u8; RECORD_WIDTH] {
        let mut buf = [0u8; RECORD_WIDTH];
        buf[..4].copy_from_slice(&self.key.to_le_bytes());
        buf[4..].copy_from_slice(&self.payload);
        buf
    }

    fn decode(bytes: &[u8; RECORD_WIDTH]) -> Self {
        let key = i32::from_le_bytes(bytes[..4].try_into().expect("4-byte key prefix"));
        let mut payload = [0u8; PAYLOAD_LEN];
        payload.copy_from_slice(&bytes[4..]);
        Self { key, payload }
    }
}
