//! Fan-out von Events an mehrere Consumer-Queues
//!
//! Jeder Consumer hat seine eigene begrenzte Queue. `publish()` sendet
//! non-blocking an alle Queues. Eine volle Queue verwirft das Event
//! nur für diesen Consumer, die anderen bekommen es trotzdem.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Sender;

/// Liste von Queue-Sendern, eine pro Consumer
///
/// - `CAP`: Kapazität jeder Queue
/// - `N`: Anzahl Consumer
pub struct EventFanout<'a, M: RawMutex, T: Clone, const CAP: usize, const N: usize> {
    queues: [Sender<'a, M, T, CAP>; N],
}

impl<'a, M: RawMutex, T: Clone, const CAP: usize, const N: usize> EventFanout<'a, M, T, CAP, N> {
    pub fn new(queues: [Sender<'a, M, T, CAP>; N]) -> Self {
        Self { queues }
    }

    /// Verteilt ein Event an alle Queues (fire-and-forget)
    ///
    /// Blockiert nie. Keine Rückmeldung über Zustellung.
    pub fn publish(&self, event: T) {
        for (index, queue) in self.queues.iter().enumerate() {
            if queue.try_send(event.clone()).is_err() {
                debug!("FANOUT: queue {} full, event dropped", index);
            }
        }
    }
}
