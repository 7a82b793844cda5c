//! Grouping decoded messages into whole patches.

use std::collections::BTreeMap;

use crate::dispatch::{PatchMessage, SectionRecord};
use crate::envelope::Section;

/// One stored preset: a header plus up to thirteen sections.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Patch {
    pub number: u16,
    sections: BTreeMap<Section, SectionRecord>,
}

impl Patch {
    pub fn new(number: u16) -> Self {
        Patch { number, sections: BTreeMap::new() }
    }

    /// Stores a record. A later record for the same section replaces the earlier one.
    pub fn insert(&mut self, record: SectionRecord) {
        self.sections.insert(record.section(), record);
    }

    pub fn section(&self, section: Section) -> Option<&SectionRecord> {
        self.sections.get(&section)
    }

    /// Name from the header message, if it has been seen.
    pub fn name(&self) -> Option<&str> {
        match self.sections.get(&Section::Header) {
            Some(SectionRecord::Header(header)) => Some(header.name.as_str()),
            _ => None,
        }
    }

    /// Records in section id order.
    pub fn records(&self) -> impl Iterator<Item = &SectionRecord> {
        self.sections.values()
    }

    /// Sections for which no message has been seen.
    pub fn missing(&self) -> Vec<Section> {
        Section::ALL
            .iter()
            .filter(|s| !self.sections.contains_key(*s))
            .copied()
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.sections.len() == Section::ALL.len()
    }
}

/// Groups messages by patch number, in ascending patch order.
pub fn assemble<I>(messages: I) -> Vec<Patch>
where
    I: IntoIterator<Item = PatchMessage>,
{
    let mut patches: BTreeMap<u16, Patch> = BTreeMap::new();
    for message in messages {
        let number = message.envelope.patch_number;
        patches
            .entry(number)
            .or_insert_with(|| Patch::new(number))
            .insert(message.record);
    }
    patches.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::decode_message;
    use crate::testing::make_message;

    fn named_header(patch: u8, name: &str) -> Vec<u8> {
        let overrides: Vec<(usize, u8)> = name.bytes().enumerate().map(|(i, b)| (23 + i, b)).collect();
        make_message(Section::Header, patch, true, &overrides)
    }

    #[test]
    fn groups_by_patch_number() {
        let messages = vec![
            decode_message(&make_message(Section::Reverb, 1, true, &[])).unwrap(),
            decode_message(&named_header(0, "CLEAN       ")).unwrap(),
            decode_message(&make_message(Section::Delay, 0, false, &[])).unwrap(),
        ];
        let patches = assemble(messages);
        assert_eq!(patches.len(), 2);
        assert_eq!(patches[0].number, 1);
        assert_eq!(patches[0].name(), Some("CLEAN       "));
        assert_eq!(patches[0].section(Section::Delay), Some(&SectionRecord::Disabled(Section::Delay)));
        assert_eq!(patches[1].number, 2);
        assert_eq!(patches[1].name(), None);
    }

    #[test]
    fn complete_patch() {
        let messages = Section::ALL
            .iter()
            .map(|s| decode_message(&make_message(*s, 9, true, &[])).unwrap());
        let patches = assemble(messages);
        assert_eq!(patches.len(), 1);
        assert!(patches[0].is_complete());
        assert!(patches[0].missing().is_empty());
        assert_eq!(patches[0].records().count(), 14);
    }

    #[test]
    fn missing_sections() {
        let mut patch = Patch::new(3);
        patch.insert(SectionRecord::Disabled(Section::Wah));
        let missing = patch.missing();
        assert_eq!(missing.len(), 13);
        assert!(!missing.contains(&Section::Wah));
        assert!(!patch.is_complete());
    }
}
