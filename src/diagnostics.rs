//! Caller-supplied collection of unmapped-byte notes across many decodes.

use std::fmt;
use std::sync::Mutex;

use crate::envelope::Section;
use crate::values::Unmapped;

/// An unmapped byte seen while decoding a particular message.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct UnmappedNote {
    pub patch_number: u16,
    pub section: Section,
    pub byte: Unmapped,
}

impl fmt::Display for UnmappedNote {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Patch {} - {} - {}", self.patch_number, self.section, self.byte)
    }
}

/// Receives notes from [`crate::decode_with`].
/// Implementations that are shared between threads must do their own locking.
pub trait DiagnosticSink {
    fn unmapped(&self, note: UnmappedNote);
}

impl<F: Fn(UnmappedNote)> DiagnosticSink for F {
    fn unmapped(&self, note: UnmappedNote) {
        self(note)
    }
}

/// Sink that keeps every note, safe to share between threads.
#[derive(Debug, Default)]
pub struct UnmappedCollector {
    notes: Mutex<Vec<UnmappedNote>>,
}

impl UnmappedCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the notes collected so far, in arrival order.
    pub fn notes(&self) -> Vec<UnmappedNote> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn into_notes(self) -> Vec<UnmappedNote> {
        self.notes.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<UnmappedNote>> {
        // push is the only mutation, so a poisoned list is still consistent
        self.notes.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DiagnosticSink for UnmappedCollector {
    fn unmapped(&self, note: UnmappedNote) {
        self.lock().push(note);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::sync::Arc;
    use std::thread;

    fn note(offset: usize) -> UnmappedNote {
        UnmappedNote {
            patch_number: 1,
            section: Section::Modulation,
            byte: Unmapped { context: "Vibrato", offset, value: 0 },
        }
    }

    #[test]
    fn closure_sink() {
        let seen = RefCell::new(Vec::new());
        let sink = |n: UnmappedNote| seen.borrow_mut().push(n.byte.offset);
        sink.unmapped(note(55));
        sink.unmapped(note(56));
        assert_eq!(*seen.borrow(), vec![55, 56]);
    }

    #[test]
    fn collector_shared_between_threads() {
        let collector = Arc::new(UnmappedCollector::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let collector = Arc::clone(&collector);
                thread::spawn(move || {
                    for j in 0..10 {
                        collector.unmapped(note(i * 10 + j));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(collector.len(), 40);
    }

    #[test]
    fn note_display() {
        assert_eq!(
            note(56).to_string(),
            "Patch 1 - Modulation - Vibrato: unmapped byte 56 = 0"
        );
    }
}
