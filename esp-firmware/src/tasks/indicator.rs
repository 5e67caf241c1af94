// Indicator Task - Tastendruck-Anzeige auf der RGB LED
use defmt::{error, info};
use embassy_time::Delay;
use esp_hal_smartled::smart_led_buffer;

use crate::config::{LED_BRIGHTNESS, RMT_CLOCK_MHZ};
use crate::hal::RmtLedWriter;
use crate::{ButtonPressReceiver, EncoderCounter};
use drehgeber_core::PressIndicator;

/// Indicator Task - Embassy Task
///
/// Initialisiert RMT + LED und übergibt an `PressIndicator::run()`.
/// Schlägt die Initialisierung fehl, endet der Task; seine Queue
/// läuft dann voll und verwirft weitere Drücke.
///
/// # Parameter
/// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral
/// - `presses`: Queue-Empfänger für Tastendrücke
/// - `counter`: Encoder-Zähler (bestimmt die Farbe)
#[embassy_executor::task]
pub async fn indicator_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    presses: ButtonPressReceiver,
    counter: &'static EncoderCounter,
) {
    let mut rmt_buffer = smart_led_buffer!(1);

    match RmtLedWriter::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer) {
        Ok(led) => {
            info!("INDICATOR: LED ready");
            let mut indicator = PressIndicator::new(led, Delay, counter, LED_BRIGHTNESS);
            indicator.run(presses).await
        }
        Err(e) => error!("INDICATOR: {}", e),
    }
}
