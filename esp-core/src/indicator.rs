//! Tastendruck-Anzeige
//!
//! Zweiter Consumer am Fan-out: pro Druck leuchtet die LED kurz in der
//! Farbe des Zählerstands und geht dann wieder aus.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Receiver;
use embedded_hal_async::delay::DelayNs;
use rgb::RGB8;

use crate::counter::EncoderCounter;
use crate::logic::press_color;
use crate::traits::SmartLedWriter;
use crate::types::ButtonPress;

/// Leuchtdauer pro Tastendruck
pub const FLASH_MS: u32 = 200;

pub struct PressIndicator<'a, L: SmartLedWriter, D: DelayNs> {
    led: L,
    delay: D,
    counter: &'a EncoderCounter,
    brightness: u8,
}

impl<'a, L: SmartLedWriter, D: DelayNs> PressIndicator<'a, L, D> {
    pub fn new(led: L, delay: D, counter: &'a EncoderCounter, brightness: u8) -> Self {
        Self {
            led,
            delay,
            counter,
            brightness,
        }
    }

    /// Endlosschleife: ein Blinken pro Event aus der eigenen Queue
    pub async fn run<M: RawMutex, const CAP: usize>(
        &mut self,
        presses: Receiver<'_, M, ButtonPress, CAP>,
    ) -> ! {
        loop {
            let press = presses.receive().await;
            self.flash(press).await;
        }
    }

    /// Einmal blinken, gibt die verwendete Farbe zurück
    ///
    /// Schreibfehler werden geloggt, die Sequenz läuft trotzdem durch.
    pub async fn flash(&mut self, press: ButtonPress) -> RGB8 {
        let count = self.counter.read();
        let color = press_color(count, self.brightness);
        info!("INDICATOR: {} with count {}", press, count);

        if let Err(e) = self.led.write(color) {
            error!("INDICATOR: {}", e);
        }

        self.delay.delay_ms(FLASH_MS).await;

        if let Err(e) = self.led.write(RGB8::default()) {
            error!("INDICATOR: {}", e);
        }
        color
    }
}
