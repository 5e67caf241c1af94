//! Quadratur-Decoder für den Drehgeber
//!
//! Läuft im GPIO-Interrupt bei jeder Flanke auf CLK (beide Richtungen).
//! Keine Allokation, kein Blockieren, O(1).

use crate::types::Direction;

/// Phasen-Zustand des Decoders
///
/// Gehört exklusiv dem Interrupt-Handler. Speichert den CLK-Pegel
/// nach der zuletzt verarbeiteten Flanke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadratureDecoder {
    last_clk: bool,
}

impl QuadratureDecoder {
    /// Erstellt den Decoder mit dem beim Start gelesenen CLK-Pegel
    pub const fn new(initial_clk: bool) -> Self {
        Self {
            last_clk: initial_clk,
        }
    }

    /// Verarbeitet eine Flanke auf CLK
    ///
    /// - CLK unverändert (doppelte/störende Flanke) → `None`
    /// - DT == neuer CLK → `Clockwise`
    /// - DT != neuer CLK → `CounterClockwise`
    ///
    /// Der neue CLK-Pegel wird in jedem Fall gespeichert.
    ///
    /// # Beispiele
    ///
    /// ```
    /// # use drehgeber_core::{Direction, QuadratureDecoder};
    /// let mut decoder = QuadratureDecoder::new(true);
    /// assert_eq!(decoder.update(false, false), Some(Direction::Clockwise));
    /// assert_eq!(decoder.update(false, true), None);
    /// ```
    #[inline]
    pub fn update(&mut self, clk: bool, dt: bool) -> Option<Direction> {
        let changed = clk != self.last_clk;
        self.last_clk = clk;

        if !changed {
            return None;
        }

        if dt == clk {
            Some(Direction::Clockwise)
        } else {
            Some(Direction::CounterClockwise)
        }
    }

    /// CLK-Pegel nach der letzten verarbeiteten Flanke
    pub const fn last_clk(&self) -> bool {
        self.last_clk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clockwise_when_dt_matches_new_clk() {
        let mut decoder = QuadratureDecoder::new(false);
        assert_eq!(decoder.update(true, true), Some(Direction::Clockwise));
        assert_eq!(decoder.update(false, false), Some(Direction::Clockwise));
    }

    #[test]
    fn test_counter_clockwise_when_dt_differs() {
        let mut decoder = QuadratureDecoder::new(false);
        assert_eq!(decoder.update(true, false), Some(Direction::CounterClockwise));
        assert_eq!(decoder.update(false, true), Some(Direction::CounterClockwise));
    }

    #[test]
    fn test_unchanged_clk_is_ignored() {
        let mut decoder = QuadratureDecoder::new(true);
        assert_eq!(decoder.update(true, false), None);
        assert_eq!(decoder.update(true, true), None);
        assert!(decoder.last_clk());
    }

    #[test]
    fn test_phase_tracks_last_edge() {
        let mut decoder = QuadratureDecoder::new(true);
        decoder.update(false, true);
        assert!(!decoder.last_clk());
    }
}
