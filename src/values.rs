//! Composite value helpers shared by the section decoders.

use std::fmt;

use crate::error::DecodeError;

/// Returns `raw - bias` for a field stored with a fixed offset.
pub fn signed_offset(raw: u8, bias: u8) -> i16 {
    raw as i16 - bias as i16
}

/// Combines a value split across two bytes as `high * base + low`.
/// The base differs per field (128 for delay times, 256 for spread).
pub fn packed_magnitude(high: u8, low: u8, base: u16) -> u16 {
    high as u16 * base + low as u16
}

/// Splits a pan position into (left, right) percentages.
/// Values above 100 are clamped, so the two sides always add up to 100.
pub fn pan(raw: u8) -> (u8, u8) {
    let right = raw.min(100);
    (100 - right, right)
}

/// Looks up the label for `raw` in `table`.
pub fn table_lookup(table: &LookupTable, raw: u8) -> Result<&'static str, DecodeError> {
    table.lookup(raw)
}

/// Ordered list of labels for one field. The raw byte value is the index.
#[derive(Debug)]
pub struct LookupTable {
    field: &'static str,
    labels: &'static [&'static str],
}

impl LookupTable {
    pub const fn new(field: &'static str, labels: &'static [&'static str]) -> Self {
        LookupTable { field, labels }
    }

    /// Name of the field this table decodes, used in error reports.
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn labels(&self) -> &'static [&'static str] {
        self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn lookup(&self, raw: u8) -> Result<&'static str, DecodeError> {
        self.labels
            .get(raw as usize)
            .copied()
            .ok_or(DecodeError::IndexOutOfRange {
                field: self.field,
                raw,
                table_size: self.labels.len(),
            })
    }
}

/// A parameter stored with a bias, shown with an explicit sign.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Offset(pub i16);

impl Offset {
    pub fn new(raw: u8, bias: u8) -> Self {
        Offset(signed_offset(raw, bias))
    }

    pub fn value(&self) -> i16 {
        self.0
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0 > 0 {
            write!(f, "+{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Direct/effect balance in percent.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Balance {
    pub direct: u8,
    pub effect: u8,
}

impl From<u8> for Balance {
    fn from(raw: u8) -> Self {
        let (direct, effect) = pan(raw);
        Balance { direct, effect }
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "D{}:{}E", self.direct, self.effect)
    }
}

/// A byte whose meaning has not been worked out yet.
/// It is carried through as-is rather than given a made-up label.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Unmapped {
    pub context: &'static str,
    pub offset: usize,
    pub value: u8,
}

impl fmt::Display for Unmapped {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: unmapped byte {} = {}", self.context, self.offset, self.value)
    }
}

/// Read access to the fields of a message that already passed
/// envelope validation, so every offset a decoder asks for exists.
pub(crate) struct Fields<'a> {
    data: &'a [u8],
}

impl<'a> Fields<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Fields { data }
    }

    pub(crate) fn byte(&self, offset: usize) -> u8 {
        self.data[offset]
    }

    pub(crate) fn bytes(&self, start: usize, end: usize) -> &'a [u8] {
        &self.data[start..end]
    }

    pub(crate) fn offset(&self, offset: usize, bias: u8) -> Offset {
        Offset::new(self.data[offset], bias)
    }

    /// Reads a packed magnitude with the high byte at `offset`
    /// and the low byte right after it.
    pub(crate) fn packed(&self, offset: usize, base: u16) -> u16 {
        packed_magnitude(self.data[offset], self.data[offset + 1], base)
    }

    pub(crate) fn lookup(&self, table: &LookupTable, offset: usize) -> Result<&'static str, DecodeError> {
        table.lookup(self.data[offset])
    }

    pub(crate) fn balance(&self, offset: usize) -> Balance {
        Balance::from(self.data[offset])
    }

    pub(crate) fn unmapped(&self, context: &'static str, start: usize, end: usize) -> Vec<Unmapped> {
        (start..end)
            .map(|offset| Unmapped { context, offset, value: self.data[offset] })
            .collect()
    }
}
