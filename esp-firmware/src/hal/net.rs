// embassy-net Anbindung für den Reporter
//
// Implementiert ReportNetwork/ReportSocket aus drehgeber-core
// mit DNS-Query und TcpSocket des embassy-net Stacks.

use defmt::{Debug2Format, error, info};
use embassy_net::{IpAddress, Ipv4Address, Stack, dns::DnsQueryType, tcp::TcpSocket};
use embassy_time::{Duration, with_timeout};
use embedded_io_async::Write;

use crate::ReportError;
use crate::config::{CONNECT_TIMEOUT_SECS, DNS_TIMEOUT_SECS};
use drehgeber_core::{ReportNetwork, ReportSocket};

/// Netzwerk-Zugriff über den embassy-net Stack
///
/// Die TCP-Buffers gehören dem aufrufenden Task und werden für
/// jeden Socket wiederverwendet (immer nur ein Request gleichzeitig).
pub struct StackNetwork<'a> {
    stack: Stack<'static>,
    rx_buffer: &'a mut [u8],
    tx_buffer: &'a mut [u8],
}

impl<'a> StackNetwork<'a> {
    pub fn new(stack: Stack<'static>, rx_buffer: &'a mut [u8], tx_buffer: &'a mut [u8]) -> Self {
        Self {
            stack,
            rx_buffer,
            tx_buffer,
        }
    }
}

impl ReportNetwork for StackNetwork<'_> {
    type Address = Ipv4Address;
    type Socket<'s>
        = StackSocket<'s>
    where
        Self: 's;

    async fn resolve(&mut self, host: &str) -> Result<Ipv4Address, ReportError> {
        let result = with_timeout(
            Duration::from_secs(DNS_TIMEOUT_SECS),
            self.stack.dns_query(host, DnsQueryType::A),
        )
        .await;

        match result {
            Ok(Ok(addrs)) => {
                for addr in addrs {
                    if let IpAddress::Ipv4(ipv4) = addr {
                        info!("REPORT: DNS lookup succeeded. IP={}", Debug2Format(&ipv4));
                        return Ok(ipv4);
                    }
                }
                error!("REPORT: DNS lookup for '{}' returned no IPv4 address", host);
                Err(ReportError::DnsFailed)
            }
            Ok(Err(e)) => {
                error!("REPORT: DNS lookup failed: {}", Debug2Format(&e));
                Err(ReportError::DnsFailed)
            }
            Err(_) => {
                error!("REPORT: DNS lookup timed out after {}s", DNS_TIMEOUT_SECS);
                Err(ReportError::DnsFailed)
            }
        }
    }

    fn open(&mut self) -> Result<StackSocket<'_>, ReportError> {
        let mut socket = TcpSocket::new(self.stack, &mut *self.rx_buffer, &mut *self.tx_buffer);
        // Begrenzt den Verbindungsaufbau, wird vor dem Lesen durch
        // das Receive-Timeout ersetzt
        socket.set_timeout(Some(Duration::from_secs(CONNECT_TIMEOUT_SECS)));
        Ok(StackSocket { socket })
    }
}

/// TCP-Socket für einen einzelnen Report
pub struct StackSocket<'s> {
    socket: TcpSocket<'s>,
}

impl ReportSocket for StackSocket<'_> {
    type Address = Ipv4Address;

    async fn connect(&mut self, address: Ipv4Address, port: u16) -> Result<(), ReportError> {
        self.socket.connect((address, port)).await.map_err(|e| {
            error!("REPORT: ... socket connect failed: {}", Debug2Format(&e));
            ReportError::ConnectFailed
        })
    }

    async fn write_all(&mut self, data: &[u8]) -> Result<(), ReportError> {
        Write::write_all(&mut self.socket, data)
            .await
            .map_err(|_| ReportError::WriteFailed)?;
        self.socket
            .flush()
            .await
            .map_err(|_| ReportError::WriteFailed)
    }

    fn set_receive_timeout(&mut self, timeout_ms: u32) -> Result<(), ReportError> {
        self.socket
            .set_timeout(Some(Duration::from_millis(u64::from(timeout_ms))));
        Ok(())
    }

    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, ReportError> {
        self.socket
            .read(buf)
            .await
            .map_err(|_| ReportError::ReadFailed)
    }

    async fn close(mut self) {
        self.socket.close();
        // FIN rausschicken, begrenzt durch das gesetzte Timeout
        let _ = self.socket.flush().await;
    }
}
