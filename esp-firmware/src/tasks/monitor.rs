// Encoder Monitor Task - loggt den Zählerstand periodisch
use defmt::info;
use embassy_time::{Duration, Timer};

use crate::EncoderCounter;
use crate::config::MONITOR_INTERVAL_SECS;

/// Nur aktiv wenn `MONITOR_ENCODER` gesetzt ist
#[embassy_executor::task]
pub async fn encoder_monitor_task(counter: &'static EncoderCounter) -> ! {
    loop {
        info!("ENCODER: Encoder Value: {}", counter.read());
        Timer::after(Duration::from_secs(MONITOR_INTERVAL_SECS)).await;
    }
}
