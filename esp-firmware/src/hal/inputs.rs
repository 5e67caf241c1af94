// GPIO-Interrupt für Drehgeber und Taster
//
// Ein gemeinsamer Handler für alle GPIO-Interrupts:
// - CLK (beide Flanken) → Quadratur-Decoder → Zähler
// - Taster (fallende Flanke) → Entprell-Timer starten
//
// Pins, Decoder-Phase, Zähler und Entprell-Zustand liegen in privaten
// Statics, weil der Handler keine Parameter bekommt. Alle anderen
// Zugriffe laufen über die Handles aus `install()`.

use core::cell::RefCell;

use critical_section::Mutex;
use defmt::info;
use esp_hal::gpio::{Event, Input, Io};
use esp_hal::{handler, ram};

use crate::config::BUTTON_GPIO_PIN;
use crate::{ButtonDebouncer, EncoderCounter};
use drehgeber_core::QuadratureDecoder;

/// Drehgeber-Pins + Phasen-Zustand, gehört exklusiv dem Handler
struct EncoderLines {
    clk: Input<'static>,
    dt: Input<'static>,
    decoder: QuadratureDecoder,
}

static ENCODER: Mutex<RefCell<Option<EncoderLines>>> = Mutex::new(RefCell::new(None));
static BUTTON: Mutex<RefCell<Option<Input<'static>>>> = Mutex::new(RefCell::new(None));

static COUNTER: EncoderCounter = EncoderCounter::new();
static DEBOUNCER: ButtonDebouncer = ButtonDebouncer::new(BUTTON_GPIO_PIN);

/// Zugriff auf den Tasterpegel aus Task-Kontext
#[derive(Clone, Copy)]
pub struct ButtonLevel {
    _private: (),
}

impl ButtonLevel {
    /// `true` wenn der Taster gedrückt ist (Pull-up → gedrückt = low)
    pub fn is_pressed(&self) -> bool {
        critical_section::with(|cs| {
            BUTTON
                .borrow_ref(cs)
                .as_ref()
                .is_some_and(|button| button.is_low())
        })
    }
}

/// Handles für die Tasks, erzeugt in `install()`
pub struct InputHandles {
    pub counter: &'static EncoderCounter,
    pub debouncer: &'static ButtonDebouncer,
    pub button: ButtonLevel,
}

/// Registriert den GPIO-Handler und übergibt die Pins an ihn
///
/// # Parameter
/// - `io`: IO-Treiber für die Handler-Registrierung
/// - `clk`, `dt`: Drehgeber-Kanäle (mit Pull-up konfiguriert)
/// - `button`: Taster (mit Pull-up konfiguriert)
pub fn install(
    io: &mut Io<'_>,
    mut clk: Input<'static>,
    dt: Input<'static>,
    mut button: Input<'static>,
) -> InputHandles {
    io.set_interrupt_handler(gpio_handler);

    // Listen + Ablegen in einer Critical Section: der Handler sieht die
    // Pins erst wenn beide Statics gefüllt sind
    critical_section::with(|cs| {
        let decoder = QuadratureDecoder::new(clk.is_high());
        clk.listen(Event::AnyEdge);
        button.listen(Event::FallingEdge);

        ENCODER
            .borrow_ref_mut(cs)
            .replace(EncoderLines { clk, dt, decoder });
        BUTTON.borrow_ref_mut(cs).replace(button);
    });

    info!("ENCODER: GPIO interrupts installed");

    InputHandles {
        counter: &COUNTER,
        debouncer: &DEBOUNCER,
        button: ButtonLevel { _private: () },
    }
}

#[handler]
#[ram]
fn gpio_handler() {
    critical_section::with(|cs| {
        if let Some(lines) = ENCODER.borrow_ref_mut(cs).as_mut() {
            if lines.clk.is_interrupt_set() {
                lines.clk.clear_interrupt();

                let clk = lines.clk.is_high();
                let dt = lines.dt.is_high();
                if let Some(direction) = lines.decoder.update(clk, dt) {
                    COUNTER.step(cs, direction);
                }
            }
        }

        if let Some(button) = BUTTON.borrow_ref_mut(cs).as_mut() {
            if button.is_interrupt_set() {
                button.clear_interrupt();
                DEBOUNCER.on_falling_edge(cs);
            }
        }
    });
}
