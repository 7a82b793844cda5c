//! Routes a validated message to the decoder for its section.

use log::debug;

use crate::diagnostics::{DiagnosticSink, UnmappedNote};
use crate::envelope::{validate_envelope, Envelope, Section};
use crate::error::DecodeError;
use crate::modulation::Modulation;
use crate::sections::*;
use crate::values::{Fields, Unmapped};

/// The decoded content of one message.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum SectionRecord {
    Header(PatchHeader),
    /// A section switched off on the device. Its field bytes are not read.
    Disabled(Section),
    Compression(Compression),
    Wah(Wah),
    Overdrive(Overdrive),
    Preamp(Preamp),
    Loop(Loop),
    Equalization(Equalization),
    SpeakerSimulation(SpeakerSimulation),
    NoiseSuppression(NoiseSuppression),
    Modulation(Modulation),
    Delay(Delay),
    Chorus(Chorus),
    TremoloPan(TremoloPan),
    Reverb(Reverb),
}

impl SectionRecord {
    pub fn section(&self) -> Section {
        match self {
            SectionRecord::Header(_) => Section::Header,
            SectionRecord::Disabled(section) => *section,
            SectionRecord::Compression(_) => Section::Compression,
            SectionRecord::Wah(_) => Section::Wah,
            SectionRecord::Overdrive(_) => Section::Overdrive,
            SectionRecord::Preamp(_) => Section::Preamp,
            SectionRecord::Loop(_) => Section::Loop,
            SectionRecord::Equalization(_) => Section::Equalization,
            SectionRecord::SpeakerSimulation(_) => Section::SpeakerSimulation,
            SectionRecord::NoiseSuppression(_) => Section::NoiseSuppression,
            SectionRecord::Modulation(_) => Section::Modulation,
            SectionRecord::Delay(_) => Section::Delay,
            SectionRecord::Chorus(_) => Section::Chorus,
            SectionRecord::TremoloPan(_) => Section::TremoloPan,
            SectionRecord::Reverb(_) => Section::Reverb,
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, SectionRecord::Disabled(_))
    }

    /// Bytes in this record that have no known meaning.
    pub fn unmapped(&self) -> Vec<Unmapped> {
        match self {
            SectionRecord::Wah(w) => w.unmapped().to_vec(),
            SectionRecord::Modulation(m) => m.unmapped(),
            SectionRecord::Delay(d) => d.unmapped.clone(),
            _ => Vec::new(),
        }
    }
}

/// A decoded message together with its envelope.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct PatchMessage {
    pub envelope: Envelope,
    pub record: SectionRecord,
}

/// Decodes one complete message into its section record.
pub fn decode(data: &[u8]) -> Result<SectionRecord, DecodeError> {
    decode_message(data).map(|message| message.record)
}

/// Decodes one complete message, keeping the envelope.
pub fn decode_message(data: &[u8]) -> Result<PatchMessage, DecodeError> {
    let envelope = validate_envelope(data)?;
    let fields = Fields::new(data);

    let record = if envelope.enabled == Some(false) {
        SectionRecord::Disabled(envelope.section)
    } else {
        debug!("decoding {}", envelope.section);
        decode_section(envelope.section, &fields)?
    };

    Ok(PatchMessage { envelope, record })
}

/// Like [`decode_message`], and also reports each unmapped byte of the
/// record to `sink`. Nothing is reported when decoding fails.
pub fn decode_with(data: &[u8], sink: &dyn DiagnosticSink) -> Result<PatchMessage, DecodeError> {
    let message = decode_message(data)?;
    for byte in message.record.unmapped() {
        sink.unmapped(UnmappedNote {
            patch_number: message.envelope.patch_number,
            section: message.envelope.section,
            byte,
        });
    }
    Ok(message)
}

fn decode_section(section: Section, fields: &Fields) -> Result<SectionRecord, DecodeError> {
    Ok(match section {
        Section::Header => SectionRecord::Header(PatchHeader::decode(fields)),
        Section::Compression => SectionRecord::Compression(Compression::decode(fields)?),
        Section::Wah => SectionRecord::Wah(Wah::decode(fields)?),
        Section::Overdrive => SectionRecord::Overdrive(Overdrive::decode(fields)?),
        Section::Preamp => SectionRecord::Preamp(Preamp::decode(fields)?),
        Section::Loop => SectionRecord::Loop(Loop::decode(fields)?),
        Section::Equalization => SectionRecord::Equalization(Equalization::decode(fields)?),
        Section::SpeakerSimulation => SectionRecord::SpeakerSimulation(SpeakerSimulation::decode(fields)?),
        Section::NoiseSuppression => SectionRecord::NoiseSuppression(NoiseSuppression::decode(fields)?),
        Section::Modulation => SectionRecord::Modulation(Modulation::decode(fields)?),
        Section::Delay => SectionRecord::Delay(Delay::decode(fields)?),
        Section::Chorus => SectionRecord::Chorus(Chorus::decode(fields)?),
        Section::TremoloPan => SectionRecord::TremoloPan(TremoloPan::decode(fields)?),
        Section::Reverb => SectionRecord::Reverb(Reverb::decode(fields)?),
    })
}
