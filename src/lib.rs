//! # gxpatch
//!
//! `gxpatch` decodes the patch System Exclusive messages of the BOSS GX-700
//! guitar effects processor.
//!
//! A patch is sent as one header message carrying the patch name, followed by
//! one message for each of the thirteen effect sections. [`decode`] turns one
//! complete message into a [`SectionRecord`]; anything malformed comes back as
//! a [`DecodeError`] and never as a partly filled record.

use std::fs;
use std::io::Read;
use log::warn;

pub mod dispatch;
pub mod diagnostics;
pub mod envelope;
pub mod error;
pub mod modulation;
pub mod patch;
pub mod sections;
pub mod tables;
pub mod values;

pub use dispatch::{decode, decode_message, decode_with, PatchMessage, SectionRecord};
pub use diagnostics::{DiagnosticSink, UnmappedCollector, UnmappedNote};
pub use envelope::{validate_envelope, Envelope, Section};
pub use error::DecodeError;
pub use patch::{assemble, Patch};
pub use values::{pan, packed_magnitude, signed_offset, table_lookup, LookupTable, Offset, Balance, Unmapped};

/// System Exclusive message initiator.
pub const INITIATOR: u8 = 0xf0;

/// System Exclusive message terminator.
pub const TERMINATOR: u8 = 0xf7;

/// Returns the number of System Exclusive messages in `data`,
/// based on the count of terminator bytes.
pub fn message_count(data: &[u8]) -> usize {
    data.iter().filter(|&n| *n == TERMINATOR).count()
}

/// Splits `data` after each terminator byte, keeping the terminator.
/// Trailing bytes without a terminator form the last part.
pub fn split_messages(data: &[u8]) -> Vec<Vec<u8>> {
    data.split_inclusive(|&n| n == TERMINATOR)
        .map(|part| part.to_vec())
        .collect()
}

/// Reads the whole file, or logs why it could not be read.
pub fn read_file(name: &str) -> Option<Vec<u8>> {
    let mut f = match fs::File::open(name) {
        Ok(f) => f,
        Err(e) => {
            warn!("unable to open {}: {}", name, e);
            return None;
        }
    };

    let mut buffer = Vec::new();
    match f.read_to_end(&mut buffer) {
        Ok(_) => Some(buffer),
        Err(e) => {
            warn!("unable to read {}: {}", name, e);
            None
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::envelope::{Section, SIGNATURE};
    use crate::TERMINATOR;

    /// Builds a well-formed message for `section` with all field bytes zero,
    /// then applies `overrides` as (offset, value) pairs.
    pub fn make_message(section: Section, patch: u8, enabled: bool, overrides: &[(usize, u8)]) -> Vec<u8> {
        let mut data = vec![0u8; section.expected_length()];
        data[..SIGNATURE.len()].copy_from_slice(&SIGNATURE);
        data[6] = patch;
        data[7] = section.id();
        if section != Section::Header {
            data[9] = enabled as u8;
        }
        let last = data.len() - 1;
        data[last] = TERMINATOR;
        for &(offset, value) in overrides {
            data[offset] = value;
        }
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_messages() {
        let data = vec![0xF0, 0x41, 0xF7, 0xF0, 0x41, 0xF7];
        assert_eq!(message_count(&data), 2);
    }

    #[test]
    fn split_keeps_terminators() {
        let data = vec![0xF0, 0x41, 0xF7, 0xF0, 0x43, 0x00, 0xF7];
        let parts = split_messages(&data);
        assert_eq!(parts, vec![vec![0xF0, 0x41, 0xF7], vec![0xF0, 0x43, 0x00, 0xF7]]);
    }

    #[test]
    fn split_then_decode_bank() {
        let mut bank = Vec::new();
        for section in Section::ALL {
            bank.extend(testing::make_message(section, 2, true, &[]));
        }
        let parts = split_messages(&bank);
        assert_eq!(parts.len(), 14);
        let decoded: Result<Vec<_>, _> = parts.iter().map(|p| decode_message(p)).collect();
        let patches = assemble(decoded.unwrap());
        assert_eq!(patches.len(), 1);
        assert_eq!(patches[0].number, 3);
        assert!(patches[0].is_complete());
    }

    #[test]
    fn missing_file() {
        assert_eq!(read_file("/nonexistent/patch.syx"), None);
    }
}
