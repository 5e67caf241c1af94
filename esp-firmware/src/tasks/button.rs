// Button Task - Timer-Service für die Tasten-Entprellung
use defmt::info;
use embassy_time::Delay;

use crate::hal::ButtonLevel;
use crate::{ButtonDebouncer, ButtonFanout};
use drehgeber_core::DEBOUNCE_MS;

/// Entprell-Timer Task
///
/// Wartet bis die ISR den Timer startet, liest nach DEBOUNCE_MS den
/// Pin neu und verteilt einen bestätigten Druck an alle Queues.
///
/// # Parameter
/// - `debouncer`: Entprell-Zustand (geteilt mit der ISR)
/// - `button`: Pegel-Zugriff auf den Taster
/// - `fanout`: Sender aller Consumer-Queues
#[embassy_executor::task]
pub async fn debounce_task(
    debouncer: &'static ButtonDebouncer,
    button: ButtonLevel,
    fanout: ButtonFanout,
) -> ! {
    info!(
        "BUTTON: Debounce service on GPIO{} started ({} ms window)",
        debouncer.pin(),
        DEBOUNCE_MS
    );

    let mut delay = Delay;
    loop {
        debouncer
            .service(&mut delay, || button.is_pressed(), &fanout)
            .await;
    }
}
