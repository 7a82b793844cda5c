//! Validation of the fixed message wrapper: signature, section id,
//! length, terminator and the enable flag.

use std::fmt;
use log::debug;

use crate::error::DecodeError;
use crate::TERMINATOR;

/// Roland manufacturer id, device 0, GX-700 model id, DT1 command, address high byte.
pub const SIGNATURE: [u8; 6] = [0xf0, 0x41, 0x00, 0x79, 0x12, 0x00];

/// Shortest message that can carry a section.
pub const MINIMUM_LENGTH: usize = 15;

/// Total message length for each section id.
pub const MESSAGE_LENGTHS: [usize; 14] = [77, 19, 24, 17, 21, 15, 18, 16, 16, 88, 32, 20, 16, 20];

const PATCH_OFFSET: usize = 6;
const SECTION_OFFSET: usize = 7;
const RESERVED_OFFSET: usize = 8;
const ENABLE_OFFSET: usize = 9;

/// One block of a patch. The discriminant is the section id on the wire.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Section {
    Header = 0,
    Compression,
    Wah,
    Overdrive,
    Preamp,
    Loop,
    Equalization,
    SpeakerSimulation,
    NoiseSuppression,
    Modulation,
    Delay,
    Chorus,
    TremoloPan,
    Reverb,
}

impl Section {
    pub const ALL: [Section; 14] = [
        Section::Header,
        Section::Compression,
        Section::Wah,
        Section::Overdrive,
        Section::Preamp,
        Section::Loop,
        Section::Equalization,
        Section::SpeakerSimulation,
        Section::NoiseSuppression,
        Section::Modulation,
        Section::Delay,
        Section::Chorus,
        Section::TremoloPan,
        Section::Reverb,
    ];

    pub fn id(&self) -> u8 {
        *self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Section::ALL.get(id as usize).copied()
    }

    /// Total length in bytes of a message carrying this section.
    pub fn expected_length(&self) -> usize {
        MESSAGE_LENGTHS[self.id() as usize]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Section::Header => "Header",
            Section::Compression => "Compression",
            Section::Wah => "Wah",
            Section::Overdrive => "Overdrive / Distortion",
            Section::Preamp => "Preamp",
            Section::Loop => "Loop",
            Section::Equalization => "Equalization",
            Section::SpeakerSimulation => "Speaker Simulation",
            Section::NoiseSuppression => "Noise Suppression",
            Section::Modulation => "Modulation",
            Section::Delay => "Delay",
            Section::Chorus => "Chorus",
            Section::TremoloPan => "Tremolo / Panning",
            Section::Reverb => "Reverb",
        }
    }
}

impl TryFrom<u8> for Section {
    type Error = DecodeError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Section::from_id(id).ok_or(DecodeError::UnknownSectionId(id))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The validated wrapper of a message.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Envelope {
    /// Patch number, 1-based.
    pub patch_number: u16,
    pub section: Section,
    /// `None` for the header message, which has no enable byte.
    pub enabled: Option<bool>,
    /// The byte before the terminator. Not verified.
    pub checksum: u8,
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Patch {} - {}", self.patch_number, self.section)?;
        match self.enabled {
            Some(true) => write!(f, " - Enabled"),
            Some(false) => write!(f, " - Disabled"),
            None => Ok(()),
        }
    }
}

/// Checks the message wrapper. The first failing check wins.
pub fn validate_envelope(data: &[u8]) -> Result<Envelope, DecodeError> {
    if data.len() < MINIMUM_LENGTH {
        return Err(DecodeError::TooShort { actual: data.len() });
    }

    if data[..SIGNATURE.len()] != SIGNATURE {
        return Err(DecodeError::HeaderMismatch { found: data[..SIGNATURE.len()].to_vec() });
    }

    let section = Section::try_from(data[SECTION_OFFSET])?;

    let expected = section.expected_length();
    if data.len() != expected {
        return Err(DecodeError::LengthMismatch { expected, actual: data.len() });
    }

    let last = data[data.len() - 1];
    if last != TERMINATOR {
        return Err(DecodeError::MissingTerminator(last));
    }

    let enabled = if section == Section::Header {
        None
    } else {
        if data[RESERVED_OFFSET] != 0 {
            return Err(DecodeError::ReservedByteNonZero(data[RESERVED_OFFSET]));
        }
        match data[ENABLE_OFFSET] {
            0 => Some(false),
            1 => Some(true),
            b => return Err(DecodeError::InvalidEnableFlag(b)),
        }
    };

    let envelope = Envelope {
        patch_number: data[PATCH_OFFSET] as u16 + 1,
        section,
        enabled,
        checksum: data[data.len() - 2],
    };
    debug!("envelope: {}", envelope);
    Ok(envelope)
}
