// Hardware Abstraction Layer (HAL) Module
//
// Kapselt GPIO-Interrupts, Netzwerk und LED hinter den Traits
// und Typen aus drehgeber-core.

pub mod inputs;
pub mod led_writer;
pub mod net;

pub use inputs::{ButtonLevel, InputHandles};
pub use led_writer::RmtLedWriter;
pub use net::{StackNetwork, StackSocket};
