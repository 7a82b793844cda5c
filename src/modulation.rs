//! The modulation section. One kind byte selects the effect, and each
//! kind keeps its parameters in its own region of the message.
//!
//! Parts of the Harmonist, Vibrato and Humanizer regions, and the block
//! after the last region, have not been worked out. Those bytes are
//! returned as [`Unmapped`] values.

use log::debug;

use crate::error::DecodeError;
use crate::tables::*;
use crate::values::{Balance, Fields, Offset, Unmapped};

const KIND_OFFSET: usize = 10;

// Shared by every kind, up to the checksum byte.
const TRAILING_START: usize = 74;
const TRAILING_END: usize = 86;

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Modulation {
    pub effect: ModulationEffect,
    /// Bytes after the last kind region.
    pub unmapped: Vec<Unmapped>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ModulationEffect {
    Flanger(Flanger),
    Phaser(Phaser),
    PitchShifter(PitchShifter),
    Harmonist(Harmonist),
    Vibrato(Vibrato),
    RingModulator(RingModulator),
    Humanizer(Humanizer),
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Flanger {
    pub rate: u8,
    pub depth: u8,
    pub manual: u8,
    pub resonance: u8,
    pub separation: u8,
    pub level: u8,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Phaser {
    pub stages: &'static str,
    pub rate: u8,
    pub depth: u8,
    pub manual: u8,
    pub resonance: u8,
    pub level: u8,
}

/// One pitch-shifted voice.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ShiftVoice {
    /// Semitones.
    pub pitch: Offset,
    /// Cents.
    pub fine: Offset,
    /// Milliseconds.
    pub pre_delay: u16,
    pub level: u8,
}

impl ShiftVoice {
    fn decode(fields: &Fields, offset: usize) -> Self {
        ShiftVoice {
            pitch: fields.offset(offset, 24),
            fine: fields.offset(offset + 1, 50),
            pre_delay: fields.packed(offset + 2, 128),
            level: fields.byte(offset + 4),
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct PitchShifter {
    pub voices: &'static str,
    pub speed: &'static str,
    pub voice_a: ShiftVoice,
    pub voice_b: ShiftVoice,
    pub feedback: u8,
    pub balance: Balance,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Harmonist {
    pub voices: &'static str,
    pub harmony_a: &'static str,
    pub level_a: u8,
    pub harmony_b: &'static str,
    pub level_b: u8,
    pub balance: Balance,
    /// Key, scale and per-voice pan live somewhere in here.
    pub unmapped: Vec<Unmapped>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Vibrato {
    pub rate: u8,
    pub depth: u8,
    /// Trigger, rise time and pedal assignment.
    pub unmapped: Vec<Unmapped>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct RingModulator {
    pub mode: &'static str,
    pub frequency: u8,
    pub effect_level: u8,
    pub direct_level: u8,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Humanizer {
    pub mode: &'static str,
    pub vowel_1: &'static str,
    pub vowel_2: &'static str,
    pub sensitivity: u8,
    pub rate: u8,
    pub depth: u8,
    pub manual: u8,
    pub level: u8,
    /// Trigger and pedal assignment.
    pub unmapped: Vec<Unmapped>,
}

impl Modulation {
    pub(crate) fn decode(fields: &Fields) -> Result<Self, DecodeError> {
        let kind = fields.byte(KIND_OFFSET);
        debug!("modulation kind {}", kind);

        let decoder: fn(&Fields) -> Result<ModulationEffect, DecodeError> = match kind {
            0 => decode_flanger,
            1 => decode_phaser,
            2 => decode_pitch_shifter,
            3 => decode_harmonist,
            4 => decode_vibrato,
            5 => decode_ring_modulator,
            6 => decode_humanizer,
            raw => return Err(DecodeError::UnknownVariant { field: MODULATION_KINDS.field(), raw }),
        };

        Ok(Modulation {
            effect: decoder(fields)?,
            unmapped: fields.unmapped("Modulation", TRAILING_START, TRAILING_END),
        })
    }

    pub fn kind_name(&self) -> &'static str {
        self.effect.kind_name()
    }

    /// Bytes of the selected kind that could not be interpreted,
    /// followed by the trailing block.
    pub fn unmapped(&self) -> Vec<Unmapped> {
        let mut bytes = self.effect.unmapped().to_vec();
        bytes.extend_from_slice(&self.unmapped);
        bytes
    }
}

impl ModulationEffect {
    pub fn kind_name(&self) -> &'static str {
        MODULATION_KINDS.labels()[match self {
            ModulationEffect::Flanger(_) => 0,
            ModulationEffect::Phaser(_) => 1,
            ModulationEffect::PitchShifter(_) => 2,
            ModulationEffect::Harmonist(_) => 3,
            ModulationEffect::Vibrato(_) => 4,
            ModulationEffect::RingModulator(_) => 5,
            ModulationEffect::Humanizer(_) => 6,
        }]
    }

    /// Bytes in the region of this kind that could not be interpreted.
    pub fn unmapped(&self) -> &[Unmapped] {
        match self {
            ModulationEffect::Harmonist(h) => &h.unmapped,
            ModulationEffect::Vibrato(v) => &v.unmapped,
            ModulationEffect::Humanizer(h) => &h.unmapped,
            _ => &[],
        }
    }
}

fn decode_flanger(fields: &Fields) -> Result<ModulationEffect, DecodeError> {
    Ok(ModulationEffect::Flanger(Flanger {
        rate: fields.byte(11),
        depth: fields.byte(12),
        manual: fields.byte(13),
        resonance: fields.byte(14),
        separation: fields.byte(15),
        level: fields.byte(16),
    }))
}

fn decode_phaser(fields: &Fields) -> Result<ModulationEffect, DecodeError> {
    Ok(ModulationEffect::Phaser(Phaser {
        stages: fields.lookup(&PHASER_STAGES, 17)?,
        rate: fields.byte(18),
        depth: fields.byte(19),
        manual: fields.byte(20),
        resonance: fields.byte(21),
        level: fields.byte(22),
    }))
}

fn decode_pitch_shifter(fields: &Fields) -> Result<ModulationEffect, DecodeError> {
    Ok(ModulationEffect::PitchShifter(PitchShifter {
        voices: fields.lookup(&VOICES, 23)?,
        speed: fields.lookup(&PITCH_SHIFTER_SPEEDS, 24)?,
        voice_a: ShiftVoice::decode(fields, 25),
        voice_b: ShiftVoice::decode(fields, 30),
        feedback: fields.byte(35),
        balance: fields.balance(36),
    }))
}

fn decode_harmonist(fields: &Fields) -> Result<ModulationEffect, DecodeError> {
    Ok(ModulationEffect::Harmonist(Harmonist {
        voices: fields.lookup(&VOICES, 37)?,
        harmony_a: fields.lookup(&HARMONY_INTERVALS, 38)?,
        level_a: fields.byte(39),
        harmony_b: fields.lookup(&HARMONY_INTERVALS, 40)?,
        level_b: fields.byte(41),
        balance: fields.balance(42),
        unmapped: fields.unmapped("Harmonist", 43, 53),
    }))
}

fn decode_vibrato(fields: &Fields) -> Result<ModulationEffect, DecodeError> {
    Ok(ModulationEffect::Vibrato(Vibrato {
        rate: fields.byte(53),
        depth: fields.byte(54),
        unmapped: fields.unmapped("Vibrato", 55, 58),
    }))
}

fn decode_ring_modulator(fields: &Fields) -> Result<ModulationEffect, DecodeError> {
    Ok(ModulationEffect::RingModulator(RingModulator {
        mode: fields.lookup(&RING_MODULATOR_MODES, 58)?,
        frequency: fields.byte(59),
        effect_level: fields.byte(60),
        direct_level: fields.byte(61),
    }))
}

fn decode_humanizer(fields: &Fields) -> Result<ModulationEffect, DecodeError> {
    Ok(ModulationEffect::Humanizer(Humanizer {
        mode: fields.lookup(&HUMANIZER_MODES, 62)?,
        vowel_1: fields.lookup(&VOWELS, 63)?,
        vowel_2: fields.lookup(&VOWELS, 64)?,
        sensitivity: fields.byte(65),
        rate: fields.byte(66),
        depth: fields.byte(67),
        manual: fields.byte(68),
        level: fields.byte(69),
        unmapped: fields.unmapped("Humanizer", 70, 74),
    }))
}
