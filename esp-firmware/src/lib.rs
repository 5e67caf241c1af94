// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von drehgeber-core
pub use drehgeber_core::{
    ButtonDebouncer, ButtonPress, EncoderCounter, EventFanout, LedError, ReportError,
    SmartLedWriter,
};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Channel, Receiver};

use crate::config::{BUTTON_CONSUMERS, BUTTON_QUEUE_CAPACITY};

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Statt:  Receiver<'static, NoopRawMutex, ButtonPress, 1>
// Nutze:  ButtonPressReceiver

/// Queue für Tastendrücke, eine pro Consumer
/// - BUTTON_QUEUE_CAPACITY: 1 (voll → neuer Druck wird verworfen)
pub type ButtonPressChannel = Channel<NoopRawMutex, ButtonPress, BUTTON_QUEUE_CAPACITY>;

/// Empfänger-Seite einer Tastendruck-Queue (genau ein Consumer-Task)
pub type ButtonPressReceiver =
    Receiver<'static, NoopRawMutex, ButtonPress, BUTTON_QUEUE_CAPACITY>;

/// Fan-out an alle Consumer (Reporter + LED-Anzeige)
pub type ButtonFanout =
    EventFanout<'static, NoopRawMutex, ButtonPress, BUTTON_QUEUE_CAPACITY, BUTTON_CONSUMERS>;
