//! Background driver that advances a shared engine while "running".
//!
//! The driver thread parks on a condition variable while paused and waits
//! out the step interval on the same condition variable while running, so a
//! pause or shutdown wakes it immediately instead of after the next tick.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, error, info};

use crate::domain::LifeResult;
use super::config::{STEP_INTERVAL_DELTA_MS, clamp_interval, duration_ms};
use super::shared::SharedEngine;

struct Control {
    running: AtomicBool,
    shutdown: AtomicBool,
    interval_ms: AtomicU64,
    gate: Mutex<()>,
    wake: Condvar,
}

impl Control {
    fn lock_gate(&self) -> MutexGuard<'_, ()> {
        self.gate.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Wake the driver after a flag change. Taking the gate first keeps the
    /// notification from slipping in between the driver's check and its wait.
    fn notify(&self) {
        let _gate = self.lock_gate();
        self.wake.notify_all();
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::Acquire)
    }

    fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.load(Ordering::Acquire))
    }

    /// Block until running. Returns false once shutdown is requested.
    fn wait_until_runnable(&self) -> bool {
        let mut gate = self.lock_gate();
        loop {
            if self.is_shutdown() {
                return false;
            }
            if self.is_running() {
                return true;
            }
            gate = self.wake.wait(gate).unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Wait until `interval` has passed since `last_step`. A pause or
    /// shutdown ends the wait early; the deadline survives a pause, so a
    /// resume only waits out what is left of it.
    fn wait_since(&self, last_step: Instant) -> Wake {
        let mut gate = self.lock_gate();
        loop {
            if self.is_shutdown() {
                return Wake::Shutdown;
            }
            if !self.is_running() {
                return Wake::Paused;
            }
            let deadline = last_step + self.interval();
            let now = Instant::now();
            if now >= deadline {
                return Wake::Due;
            }
            gate = self
                .wake
                .wait_timeout(gate, deadline - now)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }
    }
}

enum Wake {
    Due,
    Paused,
    Shutdown,
}

/// Handle to the auto-play thread. Dropping it stops the thread.
pub struct AutoPlay {
    control: Arc<Control>,
    handle: Option<JoinHandle<()>>,
}

impl AutoPlay {
    /// Start a paused driver for `engine`.
    /// `on_step` receives each new generation count after the engine lock is released.
    pub fn spawn<F>(engine: SharedEngine, interval: Duration, on_step: F) -> LifeResult<Self>
    where
        F: FnMut(u64) + Send + 'static,
    {
        let control = Arc::new(Control {
            running: AtomicBool::new(false),
            shutdown: AtomicBool::new(false),
            interval_ms: AtomicU64::new(duration_ms(clamp_interval(interval))),
            gate: Mutex::new(()),
            wake: Condvar::new(),
        });

        let worker = Arc::clone(&control);
        let handle = thread::Builder::new()
            .name("life-autoplay".to_owned())
            .spawn(move || drive(engine, worker, on_step))?;

        Ok(Self { control, handle: Some(handle) })
    }

    pub fn set_running(&self, running: bool) {
        let was = self.control.running.swap(running, Ordering::AcqRel);
        if was != running {
            info!(running, "auto-play toggled");
        }
        self.control.notify();
    }

    /// Flip play/pause and return the new state
    pub fn toggle_running(&self) -> bool {
        let running = !self.control.running.fetch_xor(true, Ordering::AcqRel);
        info!(running, "auto-play toggled");
        self.control.notify();
        running
    }

    pub fn is_running(&self) -> bool {
        self.control.is_running()
    }

    /// Change the delay between steps. A wait already in progress picks it up.
    pub fn set_step_interval(&self, interval: Duration) {
        let interval = clamp_interval(interval);
        self.control
            .interval_ms
            .store(duration_ms(interval), Ordering::Release);
        debug!(interval_ms = duration_ms(interval), "step interval changed");
    }

    pub fn step_interval(&self) -> Duration {
        self.control.interval()
    }

    /// Nudge the interval by one speed step and return the result
    pub fn adjust_speed(&self, faster: bool) -> Duration {
        let current = self.step_interval();
        let delta = Duration::from_millis(STEP_INTERVAL_DELTA_MS);
        let next = if faster {
            current.saturating_sub(delta)
        } else {
            current + delta
        };
        self.set_step_interval(next);
        self.step_interval()
    }

    /// Stop the thread and wait for it to exit
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.control.shutdown.store(true, Ordering::Release);
        self.control.notify();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!("auto-play thread panicked");
            }
        }
    }
}

impl Drop for AutoPlay {
    fn drop(&mut self) {
        self.stop();
    }
}

fn drive<F>(engine: SharedEngine, control: Arc<Control>, mut on_step: F)
where
    F: FnMut(u64),
{
    debug!("auto-play thread started");
    let mut last_step: Option<Instant> = None;
    while control.wait_until_runnable() {
        if let Some(last) = last_step {
            match control.wait_since(last) {
                Wake::Due => {}
                Wake::Paused => continue,
                Wake::Shutdown => break,
            }
        }
        let generation = match engine.step() {
            Ok(generation) => generation,
            Err(err) => {
                error!(%err, "auto-play stopped");
                control.running.store(false, Ordering::Release);
                break;
            }
        };
        last_step = Some(Instant::now());
        on_step(generation);
    }
    debug!("auto-play thread exited");
}
