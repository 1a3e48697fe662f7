//! Recurring refresh timer with an explicit cancellation handle.
//!
//! Replaces the toolkit-owned timer of a widget hierarchy: ticks fire on a
//! dedicated thread, and cancellation is an explicit `stop` on the handle
//! rather than an object lifetime. The interval is captured at `start`;
//! changing configuration while running requires a restart to take effect.

use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use flume::{RecvTimeoutError, Sender};
use tracing::{debug, warn};

/// Fires a callback at a fixed interval until stopped.
///
/// At most one tick stream runs per scheduler: `start` while running is a
/// no-op, and `stop` is idempotent. Ticks are deadline-scheduled, so a tick
/// that overruns its interval is followed immediately by the next one;
/// missed ticks are neither skipped ahead of nor queued up.
#[derive(Debug, Default)]
pub struct RefreshScheduler {
    running: Option<TimerHandle>,
}

#[derive(Debug)]
struct TimerHandle {
    stop_tx: Sender<()>,
    thread: JoinHandle<()>,
}

impl RefreshScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Starts ticking every `interval`. Returns false (changing nothing)
    /// if a tick stream is already running; stop it first to pick up a new
    /// interval or callback.
    pub fn start<F>(&mut self, interval: Duration, mut on_tick: F) -> bool
    where
        F: FnMut() + Send + 'static,
    {
        if self.running.is_some() {
            warn!("Scheduler already running, start ignored");
            return false;
        }

        let (stop_tx, stop_rx) = flume::bounded::<()>(1);
        let thread = thread::spawn(move || {
            let mut next = Instant::now() + interval;
            loop {
                let wait = next.saturating_duration_since(Instant::now());
                match stop_rx.recv_timeout(wait) {
                    Err(RecvTimeoutError::Timeout) => {
                        on_tick();
                        next += interval;
                    }
                    // Stop requested, or the handle was dropped.
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            debug!("Scheduler thread exiting");
        });

        self.running = Some(TimerHandle { stop_tx, thread });
        true
    }

    /// Cancels future ticks and waits for the timer thread to exit. Safe
    /// to call on a stopped or never-started scheduler.
    pub fn stop(&mut self) {
        if let Some(handle) = self.running.take() {
            let _ = handle.stop_tx.send(());
            if handle.thread.join().is_err() {
                warn!("Scheduler thread panicked");
            }
        }
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
