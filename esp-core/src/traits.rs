//! Hardware Abstraction Traits
//!
//! Schnittstellen für LED und Netzwerk ohne konkrete Implementierung.
//!
//! # Implementierungen
//! - **Production:** RmtLedWriter, StackNetwork (esp-firmware)
//! - **Testing:** MockLedWriter, MockNetwork (esp-tests)

use rgb::RGB8;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    InitFailed,
    WriteFailed,
}

/// Trait für SmartLED Hardware-Zugriff (WS2812/Neopixel)
pub trait SmartLedWriter {
    /// Schreibt eine RGB-Farbe auf die LED
    fn write(&mut self, color: RGB8) -> Result<(), LedError>;
}

/// Fehler beim Senden eines HTTP-Reports
///
/// Jeder Fehler ist transient: er wird geloggt, danach wartet der
/// Reporter [`backoff_ms`](Self::backoff_ms) und nimmt das nächste Event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportError {
    DnsFailed,
    SocketFailed,
    ConnectFailed,
    WriteFailed,
    ReceiveTimeoutFailed,
    RequestTooLarge,
    /// Beendet nur das Lesen der Antwort
    ReadFailed,
}

impl ReportError {
    /// Wartezeit nach diesem Fehler in Millisekunden
    pub const fn backoff_ms(self) -> u32 {
        match self {
            ReportError::DnsFailed | ReportError::SocketFailed => 1000,
            ReportError::ConnectFailed
            | ReportError::WriteFailed
            | ReportError::ReceiveTimeoutFailed
            | ReportError::RequestTooLarge
            | ReportError::ReadFailed => 4000,
        }
    }
}

/// Netzwerk-Zugriff für den Reporter (DNS + Socket-Allokation)
#[allow(async_fn_in_trait)]
pub trait ReportNetwork {
    type Address: Copy;
    type Socket<'s>: ReportSocket<Address = Self::Address>
    where
        Self: 's;

    /// Löst den Hostnamen zu einer Adresse auf
    async fn resolve(&mut self, host: &str) -> Result<Self::Address, ReportError>;

    /// Allokiert einen Stream-Socket
    fn open(&mut self) -> Result<Self::Socket<'_>, ReportError>;
}

/// Ein TCP-Stream-Socket
///
/// Nach `close()` ist der Socket verbraucht, jeder Pfad im Reporter
/// endet mit genau einem `close()`.
#[allow(async_fn_in_trait)]
pub trait ReportSocket {
    type Address;

    async fn connect(&mut self, address: Self::Address, port: u16) -> Result<(), ReportError>;

    /// Schreibt den kompletten Buffer
    async fn write_all(&mut self, data: &[u8]) -> Result<(), ReportError>;

    fn set_receive_timeout(&mut self, timeout_ms: u32) -> Result<(), ReportError>;

    /// Liest bis zu `buf.len()` Bytes, `Ok(0)` = Gegenseite hat geschlossen
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, ReportError>;

    async fn close(self);
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::InitFailed => defmt::write!(fmt, "LED init failed"),
            LedError::WriteFailed => defmt::write!(fmt, "LED write failed"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ReportError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ReportError::DnsFailed => defmt::write!(fmt, "DNS lookup failed"),
            ReportError::SocketFailed => defmt::write!(fmt, "Failed to allocate socket"),
            ReportError::ConnectFailed => defmt::write!(fmt, "Socket connect failed"),
            ReportError::WriteFailed => defmt::write!(fmt, "Socket send failed"),
            ReportError::ReceiveTimeoutFailed => {
                defmt::write!(fmt, "Failed to set socket receiving timeout")
            }
            ReportError::RequestTooLarge => defmt::write!(fmt, "Request too large"),
            ReportError::ReadFailed => defmt::write!(fmt, "Socket read failed"),
        }
    }
}
