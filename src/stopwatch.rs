use std::time::{Duration, Instant};

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Elapsed-time accounting across pause/resume cycles.
///
/// `start_at` is only set once per run and every pause is tracked as a
/// separate interval, so elapsed time is always `(now - start_at)` minus
/// the time spent paused, including the pause that is currently open.
#[derive(Debug)]
pub struct Stopwatch<C = SystemClock> {
    clock: C,
    running: bool,
    start_at: Option<Instant>,
    paused_total: Duration,
    pause_started: Option<Instant>,
}

impl Stopwatch<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Stopwatch<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Stopwatch<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            running: false,
            start_at: None,
            paused_total: Duration::ZERO,
            pause_started: None,
        }
    }

    pub fn elapsed(&self) -> Duration {
        let Some(start_at) = self.start_at else {
            return Duration::ZERO;
        };

        let now = self.clock.now();

        let mut paused = self.paused_total;
        if !self.running {
            if let Some(pause_started) = self.pause_started {
                paused += now.saturating_duration_since(pause_started);
            }
        }

        now.saturating_duration_since(start_at)
            .saturating_sub(paused)
    }

    pub fn has_started(&self) -> bool {
        self.start_at.is_some()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pause(&mut self) {
        if !self.running {
            return;
        }

        self.running = false;
        self.pause_started = Some(self.clock.now());
    }

    /// Clears everything, including a pause interval that is still open.
    pub fn reset(&mut self) {
        self.running = false;
        self.start_at = None;
        self.paused_total = Duration::ZERO;
        self.pause_started = None;
    }

    pub fn start(&mut self) {
        if self.running {
            return;
        }

        let now = self.clock.now();

        if self.start_at.is_none() {
            self.start_at = Some(now);
        } else if let Some(pause_started) = self.pause_started.take() {
            self.paused_total += now.saturating_duration_since(pause_started);
        }

        self.running = true;
    }
}
