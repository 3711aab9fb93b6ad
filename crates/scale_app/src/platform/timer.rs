use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};

use scale_core::Msg;

/// Repeating wall-clock timer that feeds `Msg::PollTick` into the UI loop.
///
/// Ticks are scheduled on a fixed cadence, independent of how long the
/// resulting requests take. Missed ticks are skipped, not replayed.
pub struct PollTimer {
    stopped: Arc<AtomicBool>,
}

impl PollTimer {
    pub fn start(interval: Duration, msg_tx: mpsc::Sender<Msg>) -> io::Result<Self> {
        let stopped = Arc::new(AtomicBool::new(false));
        let flag = stopped.clone();

        thread::Builder::new()
            .name("poll-timer".to_string())
            .spawn(move || {
                let mut next = Instant::now() + interval;
                loop {
                    let now = Instant::now();
                    if next > now {
                        thread::sleep(next - now);
                    }
                    if flag.load(Ordering::Acquire) || msg_tx.send(Msg::PollTick).is_err() {
                        break;
                    }
                    next += interval;
                    let now = Instant::now();
                    if next + interval < now {
                        next = now + interval;
                    }
                }
            })?;

        Ok(Self { stopped })
    }

    /// Stops the timer for good. The thread exits at its next wake-up.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }
}

impl Drop for PollTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
