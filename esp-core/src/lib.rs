//! Drehgeber Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Quadratur-Decoder, Zähler, Entprellung, Fan-out, Reporter und
//! Tastendruck-Anzeige
//! laufen unverändert auf dem ESP32 und in Host-Tests.

#![no_std]

#[macro_use]
mod fmt;

pub mod counter;
pub mod debounce;
pub mod fanout;
pub mod indicator;
pub mod logic;
pub mod quadrature;
pub mod report;
pub mod reporter;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use counter::EncoderCounter;
pub use debounce::{ButtonDebouncer, DEBOUNCE_MS};
pub use fanout::EventFanout;
pub use indicator::{FLASH_MS, PressIndicator};
pub use logic::press_color;
pub use quadrature::QuadratureDecoder;
pub use report::{ReportTarget, build_request, format_body};
pub use reporter::{RECEIVE_TIMEOUT_MS, Reporter};
pub use traits::{LedError, ReportError, ReportNetwork, ReportSocket, SmartLedWriter};
pub use types::{ButtonPress, DebounceState, Direction};
