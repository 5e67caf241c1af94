//! Core Types für die Drehgeber-Pipeline
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Drehrichtung eines gültigen Quadratur-Übergangs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// DT == neuer CLK-Pegel → Zähler +1
    Clockwise,
    /// DT != neuer CLK-Pegel → Zähler -1
    CounterClockwise,
}

impl Direction {
    /// Zähler-Änderung für diese Richtung
    pub const fn delta(self) -> i32 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}

/// Bestätigter Tastendruck
///
/// Wird vom Entprell-Timer an alle Consumer-Queues verteilt.
/// Enthält nur die GPIO-Nummer des auslösenden Pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonPress {
    pub pin: u8,
}

/// Zustand der Tasten-Entprellung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
    /// Kein Timer aktiv, nächste fallende Flanke wird angenommen
    Idle,
    /// Timer läuft, weitere Flanken werden ignoriert
    Debouncing,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Direction {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Direction::Clockwise => defmt::write!(fmt, "CW"),
            Direction::CounterClockwise => defmt::write!(fmt, "CCW"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ButtonPress {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "ButtonPress {{ pin: GPIO{} }}", self.pin)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DebounceState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DebounceState::Idle => defmt::write!(fmt, "Idle"),
            DebounceState::Debouncing => defmt::write!(fmt, "Debouncing"),
        }
    }
}
