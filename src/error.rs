use thiserror::Error;

use crate::envelope::{MINIMUM_LENGTH, SIGNATURE};

/// Reasons a message can fail to decode.
///
/// Every failure is reported as data. Nothing is retried and no partial
/// record is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("message too short: {actual} bytes, need at least {}", MINIMUM_LENGTH)]
    TooShort { actual: usize },

    #[error("header mismatch: expected {}, found {}", hex::encode_upper(SIGNATURE), hex::encode_upper(.found))]
    HeaderMismatch { found: Vec<u8> },

    #[error("unknown section id {0}")]
    UnknownSectionId(u8),

    #[error("bad message length: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("last byte is {0:02X}h, not the terminator F7h")]
    MissingTerminator(u8),

    #[error("reserved byte 8 is {0}, expected 0")]
    ReservedByteNonZero(u8),

    #[error("enable flag is {0}, expected 0 or 1")]
    InvalidEnableFlag(u8),

    #[error("{field}: value {raw} is outside the table of {table_size} entries")]
    IndexOutOfRange { field: &'static str, raw: u8, table_size: usize },

    #[error("{field}: value {raw} selects no known layout")]
    UnknownVariant { field: &'static str, raw: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_mismatch_shows_hex() {
        let e = DecodeError::HeaderMismatch { found: vec![0xF0, 0x43, 0x00, 0x79, 0x12, 0x00] };
        assert_eq!(e.to_string(), "header mismatch: expected F04100791200, found F04300791200");
    }

    #[test]
    fn length_mismatch_message() {
        let e = DecodeError::LengthMismatch { expected: 19, actual: 18 };
        assert_eq!(e.to_string(), "bad message length: expected 19 bytes, got 18");
    }

    #[test]
    fn index_out_of_range_message() {
        let e = DecodeError::IndexOutOfRange { field: "reverb type", raw: 9, table_size: 5 };
        assert_eq!(e.to_string(), "reverb type: value 9 is outside the table of 5 entries");
    }
}
