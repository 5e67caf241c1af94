//! Integration Tests für Entprellung und Fan-out
//!
//! Die ISR wird durch `on_falling_edge()` simuliert, der Timer-Task
//! durch `service()` mit einem aufzeichnenden Delay.

mod common;

use common::RecordingDelay;
use drehgeber_core::{ButtonDebouncer, ButtonPress, DEBOUNCE_MS, DebounceState, EventFanout};
use embassy_futures::block_on;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

const BUTTON_PIN: u8 = 9;

type PressQueue = Channel<CriticalSectionRawMutex, ButtonPress, 1>;

fn edges(debouncer: &ButtonDebouncer, count: usize) -> usize {
    (0..count)
        .filter(|_| critical_section::with(|cs| debouncer.on_falling_edge(cs)))
        .count()
}

fn drain(queue: &PressQueue) -> Vec<ButtonPress> {
    let mut events = Vec::new();
    while let Ok(press) = queue.try_receive() {
        events.push(press);
    }
    events
}

#[test]
fn test_burst_within_window_yields_one_event_per_queue() {
    let debouncer = ButtonDebouncer::new(BUTTON_PIN);
    let report_queue = PressQueue::new();
    let indicator_queue = PressQueue::new();
    let fanout = EventFanout::new([report_queue.sender(), indicator_queue.sender()]);
    let mut delay = RecordingDelay::new();

    // Prellen: viele fallende Flanken, nur die erste startet den Timer
    assert_eq!(edges(&debouncer, 8), 1);

    let press = block_on(debouncer.service(&mut delay, || true, &fanout));

    assert_eq!(press, Some(ButtonPress { pin: BUTTON_PIN }));
    assert_eq!(delay.waits(), vec![DEBOUNCE_MS]);
    assert_eq!(drain(&report_queue), vec![ButtonPress { pin: BUTTON_PIN }]);
    assert_eq!(drain(&indicator_queue), vec![ButtonPress { pin: BUTTON_PIN }]);
}

#[test]
fn test_short_tap_is_rejected() {
    // Gedrückt und nach 20 ms losgelassen: beim Timer-Ablauf ist der Pin wieder high
    let debouncer = ButtonDebouncer::new(BUTTON_PIN);
    let queue = PressQueue::new();
    let fanout = EventFanout::new([queue.sender()]);
    let mut delay = RecordingDelay::new();

    edges(&debouncer, 3);
    let press = block_on(debouncer.service(&mut delay, || false, &fanout));

    assert_eq!(press, None);
    assert!(drain(&queue).is_empty());
    assert_eq!(debouncer.state(), DebounceState::Idle);
}

#[test]
fn test_held_press_yields_exactly_one_event() {
    let debouncer = ButtonDebouncer::new(BUTTON_PIN);
    let queue = PressQueue::new();
    let fanout = EventFanout::new([queue.sender()]);
    let mut delay = RecordingDelay::new();

    edges(&debouncer, 1);
    block_on(debouncer.service(&mut delay, || true, &fanout));

    // Loslassen ist eine steigende Flanke und wird nicht gemeldet
    assert_eq!(debouncer.state(), DebounceState::Idle);
    assert_eq!(drain(&queue).len(), 1);
}

#[test]
fn test_new_edge_accepted_after_timer_fired() {
    let debouncer = ButtonDebouncer::new(BUTTON_PIN);
    let queue = PressQueue::new();
    let fanout = EventFanout::new([queue.sender()]);
    let mut delay = RecordingDelay::new();

    edges(&debouncer, 4);
    block_on(debouncer.service(&mut delay, || true, &fanout));
    assert_eq!(drain(&queue).len(), 1);

    assert_eq!(edges(&debouncer, 4), 1);
    block_on(debouncer.service(&mut delay, || true, &fanout));
    assert_eq!(drain(&queue).len(), 1);
    assert_eq!(delay.waits(), vec![DEBOUNCE_MS, DEBOUNCE_MS]);
}

#[test]
fn test_full_queue_does_not_block_other_consumer() {
    let debouncer = ButtonDebouncer::new(BUTTON_PIN);
    let slow_queue = PressQueue::new();
    let fast_queue = PressQueue::new();
    let fanout = EventFanout::new([slow_queue.sender(), fast_queue.sender()]);
    let mut delay = RecordingDelay::new();

    // Erster Druck: beide Queues voll, nur fast_queue wird geleert
    edges(&debouncer, 1);
    block_on(debouncer.service(&mut delay, || true, &fanout));
    assert_eq!(drain(&fast_queue).len(), 1);

    // Zweiter Druck: slow_queue verwirft, fast_queue bekommt ihn
    edges(&debouncer, 1);
    block_on(debouncer.service(&mut delay, || true, &fanout));

    assert_eq!(drain(&slow_queue).len(), 1);
    assert_eq!(drain(&fast_queue).len(), 1);
}
