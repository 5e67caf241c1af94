//! Integration Tests für Quadratur-Decoder und Zähler
//!
//! Simulieren die ISR: jede CLK-Flanke geht durch Decoder und Zähler.

use drehgeber_core::{Direction, EncoderCounter, QuadratureDecoder};

/// Eine CLK-Flanke wie im Interrupt-Handler
fn edge(decoder: &mut QuadratureDecoder, counter: &EncoderCounter, clk: bool, dt: bool) {
    critical_section::with(|cs| {
        if let Some(direction) = decoder.update(clk, dt) {
            counter.step(cs, direction);
        }
    });
}

/// Ein gültiger Übergang: CLK kippt, DT folgt der Drehrichtung
fn turn(decoder: &mut QuadratureDecoder, counter: &EncoderCounter, direction: Direction) {
    let clk = !decoder.last_clk();
    let dt = match direction {
        Direction::Clockwise => clk,
        Direction::CounterClockwise => !clk,
    };
    edge(decoder, counter, clk, dt);
}

fn run(pattern: &[Direction]) -> i32 {
    let mut decoder = QuadratureDecoder::new(true);
    let counter = EncoderCounter::new();
    for &direction in pattern {
        turn(&mut decoder, &counter, direction);
    }
    counter.read()
}

fn reversed(direction: Direction) -> Direction {
    match direction {
        Direction::Clockwise => Direction::CounterClockwise,
        Direction::CounterClockwise => Direction::Clockwise,
    }
}

// ============================================================================
// Tests: Zählerstand
// ============================================================================

#[test]
fn test_three_clockwise_one_counter_clockwise_reads_two() {
    use Direction::*;
    assert_eq!(run(&[Clockwise, Clockwise, Clockwise, CounterClockwise]), 2);
}

#[test]
fn test_net_change_is_cw_minus_ccw() {
    use Direction::*;
    let pattern = [
        Clockwise,
        CounterClockwise,
        CounterClockwise,
        Clockwise,
        Clockwise,
        Clockwise,
        CounterClockwise,
        Clockwise,
        Clockwise,
    ];
    let cw = pattern.iter().filter(|d| **d == Clockwise).count() as i32;
    let ccw = pattern.len() as i32 - cw;

    assert_eq!(run(&pattern), cw - ccw);
}

#[test]
fn test_reversed_pattern_negates_count() {
    use Direction::*;
    let pattern = [Clockwise, Clockwise, CounterClockwise, Clockwise, Clockwise];
    let mirrored: Vec<Direction> = pattern.iter().copied().map(reversed).collect();

    let forward = run(&pattern);
    assert_eq!(forward, 3);
    assert_eq!(run(&mirrored), -forward);
}

#[test]
fn test_duplicate_edge_changes_nothing() {
    let mut decoder = QuadratureDecoder::new(true);
    let counter = EncoderCounter::new();

    turn(&mut decoder, &counter, Direction::Clockwise);
    let phase = decoder.last_clk();
    let count = counter.read();

    // Gleicher CLK-Pegel nochmal, DT egal
    edge(&mut decoder, &counter, phase, !phase);
    edge(&mut decoder, &counter, phase, phase);

    assert_eq!(counter.read(), count);
    assert_eq!(decoder.last_clk(), phase);
}

#[test]
fn test_long_run_stays_consistent() {
    let mut decoder = QuadratureDecoder::new(false);
    let counter = EncoderCounter::new();

    for _ in 0..1000 {
        turn(&mut decoder, &counter, Direction::CounterClockwise);
    }
    for _ in 0..250 {
        turn(&mut decoder, &counter, Direction::Clockwise);
    }

    assert_eq!(counter.read(), -750);
}

#[test]
fn test_task_read_inside_isr_section() {
    let counter = EncoderCounter::new();
    let seen = critical_section::with(|cs| {
        counter.step(cs, Direction::Clockwise);
        counter.read_in(cs)
    });
    assert_eq!(seen, 1);
    assert_eq!(counter.read(), 1);
}
