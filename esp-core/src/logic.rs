//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

/// Farbe der Tastendruck-Anzeige abhängig vom Zählerstand
///
/// - 0 → Rot
/// - positiv → Grün
/// - negativ → Blau
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use drehgeber_core::press_color;
/// assert_eq!(press_color(3, 10), RGB8 { r: 0, g: 10, b: 0 });
/// ```
pub fn press_color(count: i32, brightness: u8) -> RGB8 {
    match count.signum() {
        0 => RGB8 {
            r: brightness,
            g: 0,
            b: 0,
        },
        1 => RGB8 {
            r: 0,
            g: brightness,
            b: 0,
        },
        _ => RGB8 {
            r: 0,
            g: 0,
            b: brightness,
        },
    }
}
