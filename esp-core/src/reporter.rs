//! Netzwerk-Reporter
//!
//! Wartet auf Tastendrücke und schickt pro Druck genau einen
//! HTTP POST mit dem aktuellen Zählerstand:
//!
//! 1. DNS-Auflösung
//! 2. Socket allokieren + verbinden
//! 3. Zähler lesen, Request bauen
//! 4. Request senden
//! 5. Receive-Timeout setzen
//! 6. Antwort lesen bis die Gegenseite schließt
//! 7. Socket schließen
//!
//! Strikt sequentiell: solange ein Request läuft wird kein neues Event
//! angenommen. Fehler werden geloggt, danach folgt eine feste Wartezeit.
//! Das auslösende Event wird nicht wiederholt.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Receiver;
use embedded_hal_async::delay::DelayNs;

use crate::counter::EncoderCounter;
use crate::report::{ReportTarget, build_request};
use crate::traits::{ReportError, ReportNetwork, ReportSocket};
use crate::types::ButtonPress;

/// Receive-Timeout für die Antwort
pub const RECEIVE_TIMEOUT_MS: u32 = 5000;

/// Größe eines Lese-Chunks beim Leeren der Antwort
pub const RECEIVE_CHUNK_SIZE: usize = 128;

pub struct Reporter<'a, N: ReportNetwork, D: DelayNs> {
    network: N,
    delay: D,
    counter: &'a EncoderCounter,
    target: ReportTarget<'a>,
}

impl<'a, N: ReportNetwork, D: DelayNs> Reporter<'a, N, D> {
    pub fn new(network: N, delay: D, counter: &'a EncoderCounter, target: ReportTarget<'a>) -> Self {
        Self {
            network,
            delay,
            counter,
            target,
        }
    }

    /// Endlosschleife: blockiert auf der Queue, dann ein Report pro Event
    pub async fn run<M: RawMutex, const CAP: usize>(
        &mut self,
        presses: Receiver<'_, M, ButtonPress, CAP>,
    ) -> ! {
        loop {
            let press = presses.receive().await;
            // Fehler sind in handle() bereits geloggt und abgewartet
            self.handle(press).await.ok();
        }
    }

    /// Verarbeitet einen Tastendruck
    ///
    /// Gibt die Anzahl empfangener Antwort-Bytes zurück. Bei einem Fehler
    /// wurde die Backoff-Zeit bereits abgewartet.
    pub async fn handle(&mut self, press: ButtonPress) -> Result<usize, ReportError> {
        info!(
            "REPORT: Button on GPIO{} pressed, sending POST request",
            press.pin
        );

        let result = self.post().await;
        if let Err(e) = result {
            error!("REPORT: {}, waiting {} ms", e, e.backoff_ms());
            self.delay.delay_ms(e.backoff_ms()).await;
        }
        result
    }

    async fn post(&mut self) -> Result<usize, ReportError> {
        let address = self.network.resolve(self.target.host).await?;
        info!("REPORT: DNS lookup succeeded for '{}'", self.target.host);

        let mut socket = self.network.open()?;
        info!("REPORT: ... allocated socket");

        if let Err(e) = socket.connect(address, self.target.port).await {
            return abandon(socket, e).await;
        }
        info!("REPORT: ... connected");

        let duration = self.counter.read();
        let request = match build_request(&self.target, duration) {
            Ok(request) => request,
            Err(e) => return abandon(socket, e).await,
        };

        if let Err(e) = socket.write_all(request.as_bytes()).await {
            return abandon(socket, e).await;
        }
        info!("REPORT: ... socket send success (duration={})", duration);

        if let Err(e) = socket.set_receive_timeout(RECEIVE_TIMEOUT_MS) {
            return abandon(socket, e).await;
        }
        info!("REPORT: ... set socket receiving timeout success");

        let received = drain_response(&mut socket).await;
        socket.close().await;
        Ok(received)
    }
}

async fn abandon<S: ReportSocket>(socket: S, e: ReportError) -> Result<usize, ReportError> {
    socket.close().await;
    Err(e)
}

/// Liest die Antwort bis die Gegenseite schließt oder nichts mehr kommt
///
/// Keine HTTP-Auswertung, die Bytes werden nur geloggt.
async fn drain_response<S: ReportSocket>(socket: &mut S) -> usize {
    let mut buf = [0u8; RECEIVE_CHUNK_SIZE];
    let mut total = 0;

    loop {
        match socket.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => {
                info!("REPORT: Received: {=[u8]:a}", &buf[..n]);
                total += n;
            }
            Err(e) => {
                warn!("REPORT: read ended: {}", e);
                break;
            }
        }
    }

    info!("REPORT: ... done reading from socket, {} bytes", total);
    total
}
