//! Tasten-Entprellung mit One-Shot-Timer
//!
//! Zwei Zustände, zwei Ereignisse:
//!
//! ```text
//!            fallende Flanke (ISR)
//!   Idle ─────────────────────────────▶ Debouncing
//!    ▲                                      │
//!    └──────────────────────────────────────┘
//!        Timer abgelaufen (Pin neu lesen,
//!        bei "gedrückt" Event verteilen)
//! ```
//!
//! Flanken während `Debouncing` sind No-ops. Prellen kürzer als das
//! Entprell-Fenster erzeugt kein Event, ein längerer Druck genau eins.

use core::cell::Cell;

use critical_section::{CriticalSection, Mutex};
use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, RawMutex};
use embassy_sync::signal::Signal;
use embedded_hal_async::delay::DelayNs;

use crate::fanout::EventFanout;
use crate::types::{ButtonPress, DebounceState};

/// Entprell-Fenster in Millisekunden
pub const DEBOUNCE_MS: u32 = 50;

/// Entprell-Zustandsmaschine für eine physische Taste
///
/// Die ISR ruft [`on_falling_edge`](Self::on_falling_edge) auf, der
/// Timer-Task [`service`](Self::service). Es ist höchstens ein Timer
/// pro Taste gleichzeitig aktiv.
pub struct ButtonDebouncer {
    pin: u8,
    state: Mutex<Cell<DebounceState>>,
    armed: Signal<CriticalSectionRawMutex, ()>,
}

impl ButtonDebouncer {
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            state: Mutex::new(Cell::new(DebounceState::Idle)),
            armed: Signal::new(),
        }
    }

    /// GPIO-Nummer der Taste
    pub const fn pin(&self) -> u8 {
        self.pin
    }

    pub fn state(&self) -> DebounceState {
        critical_section::with(|cs| self.state.borrow(cs).get())
    }

    /// Fallende Flanke (Interrupt-Kontext)
    ///
    /// Gibt `true` zurück wenn der Timer gestartet wurde,
    /// `false` wenn bereits entprellt wird.
    pub fn on_falling_edge(&self, cs: CriticalSection<'_>) -> bool {
        let state = self.state.borrow(cs);
        match state.get() {
            DebounceState::Idle => {
                state.set(DebounceState::Debouncing);
                self.armed.signal(());
                true
            }
            DebounceState::Debouncing => false,
        }
    }

    /// Timer abgelaufen
    ///
    /// Kehrt immer nach `Idle` zurück. Liefert ein Event nur wenn die
    /// Taste noch gedrückt ist.
    pub fn on_timer_expired(&self, still_pressed: bool) -> Option<ButtonPress> {
        critical_section::with(|cs| self.state.borrow(cs).set(DebounceState::Idle));

        still_pressed.then_some(ButtonPress { pin: self.pin })
    }

    /// Wartet auf einen gestarteten Timer und führt ihn einmal aus
    ///
    /// Entspricht dem Timer-Callback: nach [`DEBOUNCE_MS`] wird der Pin
    /// über `sample` neu gelesen (`true` = gedrückt) und ein bestätigter
    /// Druck an alle Queues verteilt.
    pub async fn service<D, F, M, const CAP: usize, const N: usize>(
        &self,
        delay: &mut D,
        mut sample: F,
        fanout: &EventFanout<'_, M, ButtonPress, CAP, N>,
    ) -> Option<ButtonPress>
    where
        D: DelayNs,
        F: FnMut() -> bool,
        M: RawMutex,
    {
        self.armed.wait().await;
        delay.delay_ms(DEBOUNCE_MS).await;

        let press = self.on_timer_expired(sample());
        match press {
            Some(press) => {
                info!("BUTTON: press confirmed on GPIO{}", press.pin);
                fanout.publish(press);
            }
            None => debug!("BUTTON: bounce on GPIO{} rejected", self.pin),
        }
        press
    }
}
