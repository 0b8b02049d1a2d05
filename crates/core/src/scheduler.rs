//! Tick scheduling - the clock that drives gravity
//!
//! The engine never sleeps or spawns timers itself. It owns a [`Scheduler`]
//! which it starts and stops, and the host asks it how many ticks are due
//! (see [`GameEngine::run_pending`](crate::GameEngine::run_pending)).

use std::time::{Duration, Instant};

/// Fixed-cadence tick clock
pub trait Scheduler {
    /// Start (or restart) the clock with the given interval
    fn start(&mut self, interval: Duration);

    /// Halt the clock. Idempotent.
    fn stop(&mut self);

    fn is_running(&self) -> bool;

    /// Number of ticks due since the previous poll
    fn poll(&mut self) -> u32;
}

/// Test clock: ticks become due only when [`ManualScheduler::advance`] says so
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    running: bool,
    interval: Duration,
    pending: u32,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `ticks` more ticks due. Ignored while stopped.
    pub fn advance(&mut self, ticks: u32) {
        if self.running {
            self.pending = self.pending.saturating_add(ticks);
        }
    }

    /// Interval passed to the last `start`
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Scheduler for ManualScheduler {
    fn start(&mut self, interval: Duration) {
        self.running = true;
        self.interval = interval;
        self.pending = 0;
    }

    fn stop(&mut self) {
        self.running = false;
        self.pending = 0;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn poll(&mut self) -> u32 {
        std::mem::take(&mut self.pending)
    }
}

/// Wall-clock scheduler built on [`Instant`]
#[derive(Debug, Clone)]
pub struct IntervalScheduler {
    interval: Duration,
    /// Deadline of the next tick while running
    next_due: Option<Instant>,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self {
            interval: Duration::from_millis(crate::types::DEFAULT_TICK_MS),
            next_due: None,
        }
    }

    /// Time left until the next tick, `None` when stopped.
    ///
    /// Hosts use this as their input poll timeout.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.next_due
            .map(|due| due.saturating_duration_since(Instant::now()))
    }

    /// At most one tick per poll; intervals missed during a stall are dropped.
    fn poll_at(&mut self, now: Instant) -> u32 {
        match self.next_due {
            Some(due) if due <= now => {
                self.next_due = Some(now + self.interval);
                1
            }
            _ => 0,
        }
    }
}

impl Default for IntervalScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for IntervalScheduler {
    fn start(&mut self, interval: Duration) {
        self.interval = interval.max(Duration::from_millis(1));
        self.next_due = Some(Instant::now() + self.interval);
    }

    fn stop(&mut self) {
        self.next_due = None;
    }

    fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    fn poll(&mut self) -> u32 {
        self.poll_at(Instant::now())
    }
}
