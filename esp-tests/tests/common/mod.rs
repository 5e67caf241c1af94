//! Mocks für Host-Tests
//!
//! Ersetzen Netzwerk, Delay und LED durch In-Memory-Implementierungen.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use drehgeber_core::{LedError, ReportError, ReportNetwork, ReportSocket, SmartLedWriter};
use embedded_hal_async::delay::DelayNs;
use rgb::RGB8;

// ============================================================================
// Mock Network
// ============================================================================

/// Aufgezeichnete Netzwerk-Operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetEvent {
    Resolve(String),
    Open,
    Connect([u8; 4], u16),
    Write(usize),
    SetTimeout(u32),
    Read(usize),
    Close,
}

#[derive(Default)]
pub struct NetState {
    /// Schritt der fehlschlagen soll (nach Fehler-Variante)
    pub fail: Option<ReportError>,
    /// Antwort-Chunks, danach schließt die Gegenseite
    pub response: VecDeque<Vec<u8>>,
    /// Nach der Antwort `Err(ReadFailed)` statt `Ok(0)`
    pub read_error_at_end: bool,
    pub sent: Vec<u8>,
    pub log: Vec<NetEvent>,
}

impl NetState {
    fn check(&self, step: ReportError) -> Result<(), ReportError> {
        match self.fail {
            Some(fail) if fail == step => Err(fail),
            _ => Ok(()),
        }
    }

    pub fn sent_text(&self) -> String {
        String::from_utf8(self.sent.clone()).unwrap()
    }
}

pub const MOCK_ADDRESS: [u8; 4] = [192, 168, 13, 140];

#[derive(Clone, Default)]
pub struct MockNetwork {
    pub state: Rc<RefCell<NetState>>,
}

impl MockNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(step: ReportError) -> Self {
        let network = Self::new();
        network.state.borrow_mut().fail = Some(step);
        network
    }

    pub fn respond_with(&self, chunk: &[u8]) {
        self.state.borrow_mut().response.push_back(chunk.to_vec());
    }

    pub fn log(&self) -> Vec<NetEvent> {
        self.state.borrow().log.clone()
    }
}

pub struct MockSocket {
    state: Rc<RefCell<NetState>>,
}

impl ReportNetwork for MockNetwork {
    type Address = [u8; 4];
    type Socket<'s>
        = MockSocket
    where
        Self: 's;

    async fn resolve(&mut self, host: &str) -> Result<[u8; 4], ReportError> {
        let mut state = self.state.borrow_mut();
        state.log.push(NetEvent::Resolve(host.to_string()));
        state.check(ReportError::DnsFailed)?;
        Ok(MOCK_ADDRESS)
    }

    fn open(&mut self) -> Result<MockSocket, ReportError> {
        let mut state = self.state.borrow_mut();
        state.check(ReportError::SocketFailed)?;
        state.log.push(NetEvent::Open);
        Ok(MockSocket {
            state: self.state.clone(),
        })
    }
}

impl ReportSocket for MockSocket {
    type Address = [u8; 4];

    async fn connect(&mut self, address: [u8; 4], port: u16) -> Result<(), ReportError> {
        let mut state = self.state.borrow_mut();
        state.log.push(NetEvent::Connect(address, port));
        state.check(ReportError::ConnectFailed)
    }

    async fn write_all(&mut self, data: &[u8]) -> Result<(), ReportError> {
        let mut state = self.state.borrow_mut();
        state.check(ReportError::WriteFailed)?;
        state.log.push(NetEvent::Write(data.len()));
        state.sent.extend_from_slice(data);
        Ok(())
    }

    fn set_receive_timeout(&mut self, timeout_ms: u32) -> Result<(), ReportError> {
        let mut state = self.state.borrow_mut();
        state.check(ReportError::ReceiveTimeoutFailed)?;
        state.log.push(NetEvent::SetTimeout(timeout_ms));
        Ok(())
    }

    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, ReportError> {
        let mut state = self.state.borrow_mut();
        let Some(mut chunk) = state.response.pop_front() else {
            if state.read_error_at_end {
                return Err(ReportError::ReadFailed);
            }
            state.log.push(NetEvent::Read(0));
            return Ok(0);
        };

        let n = chunk.len().min(buf.len());
        buf[..n].copy_from_slice(&chunk[..n]);
        if n < chunk.len() {
            state.response.push_front(chunk.split_off(n));
        }
        state.log.push(NetEvent::Read(n));
        Ok(n)
    }

    async fn close(self) {
        self.state.borrow_mut().log.push(NetEvent::Close);
    }
}

// ============================================================================
// Recording Delay
// ============================================================================

/// Delay der nicht wartet, sondern nur die Wartezeiten aufzeichnet
#[derive(Clone, Default)]
pub struct RecordingDelay {
    pub waits_ms: Rc<RefCell<Vec<u32>>>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn waits(&self) -> Vec<u32> {
        self.waits_ms.borrow().clone()
    }
}

impl DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.waits_ms.borrow_mut().push(ns / 1_000_000);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.borrow_mut().push(ms);
    }
}

// ============================================================================
// Mock LED Writer
// ============================================================================

/// LED-Mock mit geteilter Historie
///
/// Klone teilen den Zustand, damit der Test die Schreibvorgänge sieht
/// nachdem der Writer an die Anzeige übergeben wurde.
#[derive(Clone, Default)]
pub struct MockLedWriter {
    pub colors: Rc<RefCell<Vec<RGB8>>>,
    pub fail_next_write: Rc<Cell<bool>>,
}

impl MockLedWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn colors(&self) -> Vec<RGB8> {
        self.colors.borrow().clone()
    }
}

impl SmartLedWriter for MockLedWriter {
    fn write(&mut self, color: RGB8) -> Result<(), LedError> {
        if self.fail_next_write.replace(false) {
            return Err(LedError::WriteFailed);
        }

        self.colors.borrow_mut().push(color);
        Ok(())
    }
}
