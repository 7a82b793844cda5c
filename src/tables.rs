//! Lookup tables for the table-indexed fields.
//! The order of each list is the decode table: the raw byte is the index.

use crate::values::LookupTable;

pub static COMPRESSOR_TYPES: LookupTable = LookupTable::new("compressor type", &["Compressor", "Limiter"]);

pub static WAH_MODES: LookupTable = LookupTable::new("wah mode", &["Pedal Wah", "Touch Wah", "Auto Wah"]);

pub static WAH_TYPES: LookupTable = LookupTable::new(
    "wah type",
    &["Cry Wah", "Vo Wah", "Fat Wah", "Light Wah", "7String Wah", "Reso Wah"],
);

// Values past the named pedals select a MIDI controller.
pub static WAH_PEDALS: LookupTable = LookupTable::new("wah pedal", &["EXP Pedal", "CTL Pedal"]);

pub static POLARITIES: LookupTable = LookupTable::new("polarity", &["Down", "Up"]);

pub static DISTORTION_TYPES: LookupTable = LookupTable::new(
    "distortion type",
    &["Vintage OD", "Turbo OD", "Blues", "Distortion", "Turbo DS", "Metal", "Fuzz"],
);

pub static PREAMP_TYPES: LookupTable = LookupTable::new(
    "preamp type",
    &[
        "JC Clean",
        "Clean Twin",
        "Match Drive",
        "BG Lead",
        "MS1959 (I)",
        "MS1959 (II)",
        "MS1959 (I+II)",
        "SLDN Lead",
        "Metal 5150",
        "Metal Lead",
    ],
);

pub static BRIGHT_SWITCH: LookupTable = LookupTable::new("bright", &["Off", "On"]);

pub static PREAMP_GAINS: LookupTable = LookupTable::new("preamp gain", &["Low", "Middle", "High"]);

pub static LOOP_MODES: LookupTable = LookupTable::new("loop mode", &["Series", "Parallel"]);

pub static EQ_MID_FREQUENCIES: LookupTable = LookupTable::new(
    "mid frequency",
    &[
        "100Hz", "125Hz", "160Hz", "200Hz", "250Hz", "315Hz", "400Hz", "500Hz", "630Hz", "800Hz",
        "1.00kHz", "1.25kHz", "1.60kHz", "2.00kHz", "2.50kHz", "3.15kHz", "4.00kHz", "5.00kHz",
        "6.30kHz", "8.00kHz", "10.0kHz",
    ],
);

pub static EQ_MID_Q: LookupTable = LookupTable::new("mid Q", &["0.5", "1", "2", "4", "8", "16"]);

pub static SPEAKER_TYPES: LookupTable = LookupTable::new(
    "speaker type",
    &[
        "Small",
        "Middle",
        "JC-120",
        "Built In 1",
        "Built In 2",
        "Built In 3",
        "Built In 4",
        "BG Stack 1",
        "BG Stack 2",
        "MS Stack 1",
        "MS Stack 2",
        "Metal Stack",
    ],
);

pub static MIC_SETTINGS: LookupTable = LookupTable::new("mic setting", &["1", "2", "3"]);

pub static NS_DETECT: LookupTable = LookupTable::new("detect", &["Guitar In", "NS In"]);

pub static MODULATION_KINDS: LookupTable = LookupTable::new(
    "modulation kind",
    &["Flanger", "Phaser", "Pitch Shifter", "Harmonist", "Vibrato", "Ring Modulator", "Humanizer"],
);

pub static PHASER_STAGES: LookupTable =
    LookupTable::new("phaser stages", &["4 Stage", "8 Stage", "12 Stage", "Bi-Phase"]);

pub static VOICES: LookupTable = LookupTable::new("voices", &["1 Voice", "2 Voice"]);

pub static PITCH_SHIFTER_SPEEDS: LookupTable =
    LookupTable::new("pitch shifter speed", &["Fast", "Medium", "Slow", "Mono"]);

pub static HARMONY_INTERVALS: LookupTable = LookupTable::new(
    "harmony",
    &[
        "-2oct", "-14th", "-13th", "-12th", "-11th", "-10th", "-9th", "-1oct", "-7th", "-6th",
        "-5th", "-4th", "-3rd", "-2nd", "Unison", "+2nd", "+3rd", "+4th", "+5th", "+6th", "+7th",
        "+1oct", "+9th", "+10th", "+11th", "+12th", "+13th", "+14th", "+2oct",
    ],
);

pub static RING_MODULATOR_MODES: LookupTable =
    LookupTable::new("ring modulator mode", &["Normal", "Intelligent"]);

pub static HUMANIZER_MODES: LookupTable = LookupTable::new("humanizer mode", &["Picking", "Auto"]);

pub static VOWELS: LookupTable = LookupTable::new("vowel", &["a", "e", "i", "o", "u"]);

pub static DELAY_MODES: LookupTable = LookupTable::new("delay mode", &["Normal", "Dual"]);

pub static CHORUS_MODES: LookupTable = LookupTable::new("chorus mode", &["Mono", "Stereo"]);

pub static LOW_CUT_FREQUENCIES: LookupTable = LookupTable::new(
    "low cut",
    &["Flat", "55Hz", "110Hz", "165Hz", "200Hz", "280Hz", "340Hz", "400Hz", "500Hz", "630Hz", "800Hz"],
);

pub static HIGH_CUT_FREQUENCIES: LookupTable = LookupTable::new(
    "high cut",
    &[
        "500Hz", "630Hz", "800Hz", "1.00kHz", "1.25kHz", "1.60kHz", "2.00kHz", "2.50kHz",
        "3.15kHz", "4.00kHz", "5.00kHz", "6.30kHz", "8.00kHz", "10.0kHz", "12.5kHz", "Flat",
    ],
);

pub static TREMOLO_PAN_MODES: LookupTable = LookupTable::new("tremolo/pan mode", &["Tremolo", "Pan"]);

pub static REVERB_TYPES: LookupTable =
    LookupTable::new("reverb type", &["Room1", "Room2", "Hall1", "Hall2", "Plate"]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_cut_index_six_is_two_khz() {
        assert_eq!(HIGH_CUT_FREQUENCIES.lookup(6), Ok("2.00kHz"));
    }

    #[test]
    fn low_cut_starts_flat() {
        assert_eq!(LOW_CUT_FREQUENCIES.lookup(0), Ok("Flat"));
    }

    #[test]
    fn harmony_is_centered_on_unison() {
        assert_eq!(HARMONY_INTERVALS.len(), 29);
        assert_eq!(HARMONY_INTERVALS.lookup(14), Ok("Unison"));
    }

    #[test]
    fn distortion_types_in_order() {
        assert_eq!(
            DISTORTION_TYPES.labels(),
            &["Vintage OD", "Turbo OD", "Blues", "Distortion", "Turbo DS", "Metal", "Fuzz"]
        );
    }
}
