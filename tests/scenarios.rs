use gxpatch::modulation::ModulationEffect;
use gxpatch::sections::{AutoWah, DelayMode, Wah};
use gxpatch::{decode, decode_message, decode_with, DecodeError, Section, SectionRecord, Unmapped, UnmappedCollector};

const SIGNATURE: [u8; 6] = [0xF0, 0x41, 0x00, 0x79, 0x12, 0x00];

/// Signature, then `body`, then zero filler up to `length - 1`, then F7.
fn message(body: &[u8], length: usize) -> Vec<u8> {
    let mut data = SIGNATURE.to_vec();
    data.extend_from_slice(body);
    data.resize(length - 1, 0x00);
    data.push(0xF7);
    data
}

#[test]
fn header_with_patch_name() {
    let mut body = vec![0x00, 0x00];
    body.resize(23 - SIGNATURE.len(), 0x00);
    body.extend_from_slice(b"LANDAU JUICE");
    let data = message(&body, 77);

    match decode(&data) {
        Ok(SectionRecord::Header(header)) => assert_eq!(header.name, "LANDAU JUICE"),
        other => panic!("expected header, got {:?}", other),
    }
}

#[test]
fn compression_enabled() {
    let data = message(&[0x00, 0x01, 0x00, 0x01, 0x00, 40, 10, 60, 80], 19);
    assert_eq!(data.len(), 19);

    match decode(&data) {
        Ok(SectionRecord::Compression(c)) => {
            assert_eq!(c.kind, "Compressor");
            assert_eq!(c.sustain, 40);
            assert_eq!(c.attack, 10);
            assert_eq!(c.tone.value(), 10);
            assert_eq!(c.tone.to_string(), "+10");
            assert_eq!(c.level, 80);
        }
        other => panic!("expected compression, got {:?}", other),
    }
}

#[test]
fn compression_one_byte_short() {
    let data = message(&[0x00, 0x01, 0x00, 0x01, 0x00, 40, 10, 60, 80], 18);
    assert_eq!(decode(&data), Err(DecodeError::LengthMismatch { expected: 19, actual: 18 }));
}

#[test]
fn auto_wah() {
    let data = message(&[0x00, 0x02, 0x00, 0x01, 2, 1, 30, 40, 50, 60, 70, 80], 24);
    assert_eq!(
        decode(&data),
        Ok(SectionRecord::Wah(Wah::Auto(AutoWah {
            polarity: "Up",
            sensitivity: 30,
            manual: 40,
            peak: 50,
            rate: 60,
            depth: 70,
            effect_level: 80,
            unmapped: (18..22)
                .map(|offset| Unmapped { context: "Auto Wah", offset, value: 0 })
                .collect(),
        })))
    );
}

#[test]
fn noise_suppression_bad_enable_flag() {
    let data = message(&[0x00, 0x08, 0x00, 0x02], 16);
    assert_eq!(decode(&data), Err(DecodeError::InvalidEnableFlag(2)));
}

#[test]
fn normal_delay_time() {
    let data = message(&[0x00, 0x0A, 0x00, 0x01, 0, 1, 10], 32);
    match decode(&data) {
        Ok(SectionRecord::Delay(delay)) => match delay.mode {
            DelayMode::Normal { center } => assert_eq!(center.time, 138),
            other => panic!("expected normal delay, got {:?}", other),
        },
        other => panic!("expected delay, got {:?}", other),
    }
}

#[test]
fn every_section_id_decodes() {
    for section in Section::ALL {
        let data = message(&[0x05, section.id(), 0x00, 0x01], section.expected_length());
        let decoded = decode_message(&data).unwrap();
        assert_eq!(decoded.envelope.patch_number, 6);
        assert_eq!(decoded.record.section(), section);
    }
}

#[test]
fn disabled_section_skips_bad_fields() {
    // Kind 9 is not a modulation kind, but the section is switched off.
    let data = message(&[0x00, 0x09, 0x00, 0x00, 9], 88);
    assert_eq!(decode(&data), Ok(SectionRecord::Disabled(Section::Modulation)));
}

#[test]
fn modulation_unknown_kind() {
    let data = message(&[0x00, 0x09, 0x00, 0x01, 9], 88);
    assert_eq!(
        decode(&data),
        Err(DecodeError::UnknownVariant { field: "modulation kind", raw: 9 })
    );
}

#[test]
fn any_other_last_byte_is_missing_terminator() {
    for b in 0..=255u8 {
        if b == 0xF7 {
            continue;
        }
        let mut data = message(&[0x00, 0x0D, 0x00, 0x01], 20);
        data[19] = b;
        assert_eq!(decode(&data), Err(DecodeError::MissingTerminator(b)));
    }
}

#[test]
fn pitch_shifter_through_public_api() {
    let mut body = vec![0x00, 0x09, 0x00, 0x01, 2];
    body.resize(23 - SIGNATURE.len(), 0);
    body.extend_from_slice(&[0, 0, 48, 50]);
    let data = message(&body, 88);
    match decode(&data) {
        Ok(SectionRecord::Modulation(m)) => match m.effect {
            ModulationEffect::PitchShifter(p) => {
                assert_eq!(p.voices, "1 Voice");
                assert_eq!(p.voice_a.pitch.to_string(), "+24");
                assert_eq!(p.voice_a.fine.to_string(), "0");
            }
            other => panic!("expected pitch shifter, got {:?}", other),
        },
        other => panic!("expected modulation, got {:?}", other),
    }
}

#[test]
fn trailing_modulation_byte_reaches_the_collector() {
    let mut body = vec![0x00, 0x09, 0x00, 0x01, 6];
    body.resize(80 - SIGNATURE.len(), 0);
    body.push(0x55);
    let data = message(&body, 88);

    let collector = UnmappedCollector::new();
    decode_with(&data, &collector).unwrap();
    let notes = collector.into_notes();
    assert!(notes.iter().any(|n| n.byte.offset == 80 && n.byte.value == 0x55));
    assert!(notes.iter().all(|n| n.section == Section::Modulation));
}

#[test]
fn wah_byte_past_the_fields_is_not_lost() {
    let quiet = message(&[0x00, 0x02, 0x00, 0x01, 2], 24);
    let mut noisy = quiet.clone();
    noisy[20] = 0x33;
    assert_ne!(decode(&quiet).unwrap(), decode(&noisy).unwrap());
}
