use std::thread;
use std::time::Duration;

use log::info;

/// Pause inserted between consecutive model calls for the same page.
pub const CHUNK_DELAY: Duration = Duration::from_millis(2000);

pub fn inter_chunk_pause(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    info!("Waiting {} ms before next chunk...", delay.as_millis());
    thread::sleep(delay);
}
