//! Field decoders for the header and the effect sections,
//! apart from modulation which has a module of its own.

use log::debug;

use crate::error::DecodeError;
use crate::tables::*;
use crate::values::{Fields, Offset, Unmapped};

/// Width of the patch name in characters.
pub const NAME_LENGTH: usize = 12;

const NAME_OFFSET: usize = 23;
const RESERVED_OFFSET: usize = NAME_OFFSET + NAME_LENGTH;
const CHECKSUM_OFFSET: usize = 75;

/// The patch header message. Only the name is decoded;
/// the bytes around it are kept raw.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct PatchHeader {
    /// Fixed-width name, padded with spaces by the device.
    pub name: String,
    /// Bytes 8..23, not decoded.
    pub prefix: Vec<u8>,
    /// The 40-byte block after the name, not decoded.
    pub reserved: Vec<u8>,
    /// Trailing checksum byte, not verified.
    pub checksum: u8,
}

impl PatchHeader {
    pub(crate) fn decode(fields: &Fields) -> Self {
        let name = fields
            .bytes(NAME_OFFSET, RESERVED_OFFSET)
            .iter()
            .map(|&b| if (0x20..0x7f).contains(&b) { b as char } else { '?' })
            .collect();

        PatchHeader {
            name,
            prefix: fields.bytes(8, NAME_OFFSET).to_vec(),
            reserved: fields.bytes(RESERVED_OFFSET, CHECKSUM_OFFSET).to_vec(),
            checksum: fields.byte(CHECKSUM_OFFSET),
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Compression {
    pub kind: &'static str,
    pub sustain: u8,
    pub attack: u8,
    pub tone: Offset,
    pub level: u8,
    pub threshold: u8,
    pub release: u8,
}

impl Compression {
    pub(crate) fn decode(fields: &Fields) -> Result<Self, DecodeError> {
        Ok(Compression {
            kind: fields.lookup(&COMPRESSOR_TYPES, 10)?,
            sustain: fields.byte(11),
            attack: fields.byte(12),
            tone: fields.offset(13, 50),
            level: fields.byte(14),
            threshold: fields.byte(15),
            release: fields.byte(16),
        })
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Wah {
    Pedal(PedalWah),
    Touch(TouchWah),
    Auto(AutoWah),
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct PedalWah {
    pub kind: &'static str,
    pub pedal: &'static str,
    pub pedal_position: u8,
    pub pedal_min: u8,
    pub pedal_max: u8,
    pub effect_level: u8,
    pub direct_level: u8,
    pub unmapped: Vec<Unmapped>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TouchWah {
    pub polarity: &'static str,
    pub sensitivity: u8,
    pub manual: u8,
    pub peak: u8,
    pub effect_level: u8,
    pub unmapped: Vec<Unmapped>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AutoWah {
    pub polarity: &'static str,
    pub sensitivity: u8,
    pub manual: u8,
    pub peak: u8,
    pub rate: u8,
    pub depth: u8,
    pub effect_level: u8,
    pub unmapped: Vec<Unmapped>,
}

// End of the wah parameters, just before the checksum.
const WAH_END: usize = 22;

impl Wah {
    pub(crate) fn decode(fields: &Fields) -> Result<Self, DecodeError> {
        let mode = fields.byte(10);
        debug!("wah mode {}", mode);
        match mode {
            0 => Ok(Wah::Pedal(PedalWah {
                kind: fields.lookup(&WAH_TYPES, 11)?,
                pedal: fields.lookup(&WAH_PEDALS, 12)?,
                pedal_position: fields.byte(13),
                pedal_min: fields.byte(14),
                pedal_max: fields.byte(15),
                effect_level: fields.byte(16),
                direct_level: fields.byte(17),
                unmapped: fields.unmapped("Pedal Wah", 18, WAH_END),
            })),
            1 => Ok(Wah::Touch(TouchWah {
                polarity: fields.lookup(&POLARITIES, 11)?,
                sensitivity: fields.byte(12),
                manual: fields.byte(13),
                peak: fields.byte(14),
                effect_level: fields.byte(15),
                unmapped: fields.unmapped("Touch Wah", 16, WAH_END),
            })),
            2 => Ok(Wah::Auto(AutoWah {
                polarity: fields.lookup(&POLARITIES, 11)?,
                sensitivity: fields.byte(12),
                manual: fields.byte(13),
                peak: fields.byte(14),
                rate: fields.byte(15),
                depth: fields.byte(16),
                effect_level: fields.byte(17),
                unmapped: fields.unmapped("Auto Wah", 18, WAH_END),
            })),
            raw => Err(DecodeError::UnknownVariant { field: WAH_MODES.field(), raw }),
        }
    }

    pub fn mode_name(&self) -> &'static str {
        WAH_MODES.labels()[match self {
            Wah::Pedal(_) => 0,
            Wah::Touch(_) => 1,
            Wah::Auto(_) => 2,
        }]
    }

    /// Bytes the selected mode leaves uninterpreted.
    pub fn unmapped(&self) -> &[Unmapped] {
        match self {
            Wah::Pedal(w) => &w.unmapped,
            Wah::Touch(w) => &w.unmapped,
            Wah::Auto(w) => &w.unmapped,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Overdrive {
    pub kind: &'static str,
    pub drive: u8,
    pub bass: Offset,
    pub treble: Offset,
    pub effect_level: u8,
}

impl Overdrive {
    pub(crate) fn decode(fields: &Fields) -> Result<Self, DecodeError> {
        Ok(Overdrive {
            kind: fields.lookup(&DISTORTION_TYPES, 10)?,
            drive: fields.byte(11),
            bass: fields.offset(12, 50),
            treble: fields.offset(13, 50),
            effect_level: fields.byte(14),
        })
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Preamp {
    pub kind: &'static str,
    pub volume: u8,
    pub bass: Offset,
    pub middle: Offset,
    pub treble: Offset,
    pub presence: Offset,
    pub master: u8,
    pub bright: &'static str,
    pub gain: &'static str,
}

impl Preamp {
    pub(crate) fn decode(fields: &Fields) -> Result<Self, DecodeError> {
        Ok(Preamp {
            kind: fields.lookup(&PREAMP_TYPES, 10)?,
            volume: fields.byte(11),
            bass: fields.offset(12, 50),
            middle: fields.offset(13, 50),
            treble: fields.offset(14, 50),
            presence: fields.offset(15, 50),
            master: fields.byte(16),
            bright: fields.lookup(&BRIGHT_SWITCH, 17)?,
            gain: fields.lookup(&PREAMP_GAINS, 18)?,
        })
    }
}

/// External effects loop.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Loop {
    pub mode: &'static str,
    pub send_level: u8,
    pub return_level: u8,
}

impl Loop {
    pub(crate) fn decode(fields: &Fields) -> Result<Self, DecodeError> {
        Ok(Loop {
            mode: fields.lookup(&LOOP_MODES, 10)?,
            send_level: fields.byte(11),
            return_level: fields.byte(12),
        })
    }
}

/// Three-band EQ. Gains are in dB.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Equalization {
    pub low_gain: Offset,
    pub mid_frequency: &'static str,
    pub mid_q: &'static str,
    pub mid_gain: Offset,
    pub high_gain: Offset,
    pub level: Offset,
}

impl Equalization {
    pub(crate) fn decode(fields: &Fields) -> Result<Self, DecodeError> {
        Ok(Equalization {
            low_gain: fields.offset(10, 20),
            mid_frequency: fields.lookup(&EQ_MID_FREQUENCIES, 11)?,
            mid_q: fields.lookup(&EQ_MID_Q, 12)?,
            mid_gain: fields.offset(13, 20),
            high_gain: fields.offset(14, 20),
            level: fields.offset(15, 20),
        })
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SpeakerSimulation {
    pub kind: &'static str,
    pub mic_setting: &'static str,
    pub mic_level: u8,
    pub direct_level: u8,
}

impl SpeakerSimulation {
    pub(crate) fn decode(fields: &Fields) -> Result<Self, DecodeError> {
        Ok(SpeakerSimulation {
            kind: fields.lookup(&SPEAKER_TYPES, 10)?,
            mic_setting: fields.lookup(&MIC_SETTINGS, 11)?,
            mic_level: fields.byte(12),
            direct_level: fields.byte(13),
        })
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct NoiseSuppression {
    pub threshold: u8,
    pub release: u8,
    pub detect: &'static str,
    pub effect_level: u8,
}

impl NoiseSuppression {
    pub(crate) fn decode(fields: &Fields) -> Result<Self, DecodeError> {
        Ok(NoiseSuppression {
            threshold: fields.byte(10),
            release: fields.byte(11),
            detect: fields.lookup(&NS_DETECT, 12)?,
            effect_level: fields.byte(13),
        })
    }
}

/// One delay line.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct DelayTap {
    /// Delay time in milliseconds.
    pub time: u16,
    pub feedback: u8,
    pub high_cut: &'static str,
    pub level: u8,
}

impl DelayTap {
    fn decode(fields: &Fields, offset: usize) -> Result<Self, DecodeError> {
        Ok(DelayTap {
            time: fields.packed(offset, 128),
            feedback: fields.byte(offset + 2),
            high_cut: fields.lookup(&HIGH_CUT_FREQUENCIES, offset + 3)?,
            level: fields.byte(offset + 4),
        })
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum DelayMode {
    Normal { center: DelayTap },
    Dual { left: DelayTap, right: DelayTap, spread: u16 },
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Delay {
    pub mode: DelayMode,
    pub direct_level: u8,
    /// The byte after the direct level.
    pub unmapped: Vec<Unmapped>,
}

impl Delay {
    pub(crate) fn decode(fields: &Fields) -> Result<Self, DecodeError> {
        let mode = match fields.byte(10) {
            0 => DelayMode::Normal { center: DelayTap::decode(fields, 11)? },
            1 => DelayMode::Dual {
                left: DelayTap::decode(fields, 16)?,
                right: DelayTap::decode(fields, 21)?,
                // Stored with base 256, unlike the delay times.
                spread: fields.packed(26, 256),
            },
            raw => return Err(DecodeError::UnknownVariant { field: DELAY_MODES.field(), raw }),
        };
        debug!("delay mode {:?}", mode);

        Ok(Delay {
            mode,
            direct_level: fields.byte(28),
            unmapped: fields.unmapped("Delay", 29, 30),
        })
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Chorus {
    pub mode: &'static str,
    pub rate: u8,
    pub depth: u8,
    pub pre_delay: u8,
    pub low_cut: &'static str,
    pub high_cut: &'static str,
    pub direct_level: u8,
    pub effect_level: u8,
}

impl Chorus {
    pub(crate) fn decode(fields: &Fields) -> Result<Self, DecodeError> {
        Ok(Chorus {
            mode: fields.lookup(&CHORUS_MODES, 10)?,
            rate: fields.byte(11),
            depth: fields.byte(12),
            pre_delay: fields.byte(13),
            low_cut: fields.lookup(&LOW_CUT_FREQUENCIES, 14)?,
            high_cut: fields.lookup(&HIGH_CUT_FREQUENCIES, 15)?,
            direct_level: fields.byte(16),
            effect_level: fields.byte(17),
        })
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TremoloPan {
    pub mode: &'static str,
    pub wave_shape: u8,
    pub rate: u8,
    pub depth: u8,
}

impl TremoloPan {
    pub(crate) fn decode(fields: &Fields) -> Result<Self, DecodeError> {
        Ok(TremoloPan {
            mode: fields.lookup(&TREMOLO_PAN_MODES, 10)?,
            wave_shape: fields.byte(11),
            rate: fields.byte(12),
            depth: fields.byte(13),
        })
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Reverb {
    pub kind: &'static str,
    /// Reverb time in tenths of a second.
    pub time: u8,
    /// Pre-delay in milliseconds.
    pub pre_delay: u8,
    pub low_cut: &'static str,
    pub high_cut: &'static str,
    pub diffusion: u8,
    pub effect_level: u8,
    pub direct_level: u8,
}

impl Reverb {
    pub(crate) fn decode(fields: &Fields) -> Result<Self, DecodeError> {
        Ok(Reverb {
            kind: fields.lookup(&REVERB_TYPES, 10)?,
            time: fields.byte(11),
            pre_delay: fields.byte(12),
            low_cut: fields.lookup(&LOW_CUT_FREQUENCIES, 13)?,
            high_cut: fields.lookup(&HIGH_CUT_FREQUENCIES, 14)?,
            diffusion: fields.byte(15),
            effect_level: fields.byte(16),
            direct_level: fields.byte(17),
        })
    }

    pub fn time_seconds(&self) -> f32 {
        self.time as f32 / 10.0
    }
}
