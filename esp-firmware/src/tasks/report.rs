// Report Task - HTTP POST mit Zählerstand pro Tastendruck
use defmt::info;
use embassy_net::Stack;
use embassy_time::Delay;

use crate::config::*;
use crate::hal::StackNetwork;
use crate::tasks::wifi::wait_for_network;
use crate::{ButtonPressReceiver, EncoderCounter};
use drehgeber_core::{ReportTarget, Reporter};

/// Report Task - eigener Consumer am Tastendruck-Fan-out
///
/// - Wartet auf Netzwerk-Verbindung
/// - Blockiert auf der eigenen Queue
/// - Pro Druck: DNS → Connect → POST → Antwort lesen → Close
/// - Fehler: loggen, feste Wartezeit, kein erneuter Versuch
///
/// # Parameter
/// - `stack`: embassy-net Stack für Netzwerk-Zugriff
/// - `counter`: Encoder-Zähler (Snapshot pro Request)
/// - `presses`: Queue-Empfänger für Tastendrücke
#[embassy_executor::task]
pub async fn report_task(
    stack: &'static Stack<'static>,
    counter: &'static EncoderCounter,
    presses: ButtonPressReceiver,
) -> ! {
    info!("REPORT: Task started, waiting for network...");
    wait_for_network(stack).await;
    info!(
        "REPORT: Network ready, posting to http://{}:{}{}",
        REPORT_HOST, REPORT_PORT, REPORT_PATH
    );

    let mut rx_buffer = [0u8; TCP_RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TCP_TX_BUFFER_SIZE];
    let network = StackNetwork::new(*stack, &mut rx_buffer, &mut tx_buffer);

    let target = ReportTarget {
        host: REPORT_HOST,
        port: REPORT_PORT,
        path: REPORT_PATH,
    };

    let mut reporter = Reporter::new(network, Delay, counter, target);
    reporter.run(presses).await
}
