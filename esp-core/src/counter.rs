//! Geteilter Encoder-Zähler
//!
//! Wird im Interrupt geschrieben und aus beliebigen Tasks gelesen.
//! Jeder Zugriff läuft über eine Critical Section. Es gibt zwei Wege:
//!
//! - **Interrupt-Kontext:** [`EncoderCounter::step`] / [`EncoderCounter::read_in`]
//!   nutzen die Critical Section, die der Handler bereits hält.
//! - **Task-Kontext:** [`EncoderCounter::read`] betritt selbst eine
//!   Critical Section und verlässt sie auf jedem Pfad wieder.

use core::cell::Cell;

use critical_section::{CriticalSection, Mutex};

use crate::types::Direction;

/// Vorzeichenbehafteter Drehgeber-Zähler
///
/// Startet bei 0, läuft bei Überlauf per Wrapping um.
/// Ein anderer Zugriff als über diese Methoden ist nicht möglich.
pub struct EncoderCounter {
    count: Mutex<Cell<i32>>,
}

impl EncoderCounter {
    pub const fn new() -> Self {
        Self {
            count: Mutex::new(Cell::new(0)),
        }
    }

    /// Aktueller Zählerstand (Task-Kontext)
    pub fn read(&self) -> i32 {
        critical_section::with(|cs| self.read_in(cs))
    }

    /// Aktueller Zählerstand innerhalb einer bestehenden Critical Section
    pub fn read_in(&self, cs: CriticalSection<'_>) -> i32 {
        self.count.borrow(cs).get()
    }

    /// Zählt einen Schritt in die gegebene Richtung (Interrupt-Kontext)
    #[inline]
    pub fn step(&self, cs: CriticalSection<'_>, direction: Direction) {
        let count = self.count.borrow(cs);
        count.set(count.get().wrapping_add(direction.delta()));
    }
}

impl Default for EncoderCounter {
    fn default() -> Self {
        Self::new()
    }
}
