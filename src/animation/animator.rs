//! Minimal frame clock for the tap-to-settle animation cycle.

use web_time::{Duration, Instant};

/// Gates animation updates to at most one per frame delay while running.
///
/// The host event loop polls [`tick`](Self::tick) from its redraw handler
/// instead of this crate blocking between frames; [`stop`](Self::stop)
/// simply stops the ticker. [`start`](Self::start) reports whether the
/// caller should request an immediate redraw.
#[derive(Debug)]
pub struct Animator {
    running: bool,
    frame_delay: Duration,
    last_tick: Option<Instant>,
}

impl Animator {
    /// Stopped animator ticking at most once per `frame_delay`.
    #[must_use]
    pub fn new(frame_delay: Duration) -> Self {
        Self {
            running: false,
            frame_delay,
            last_tick: None,
        }
    }

    /// Start the clock. Returns `true` if it was stopped (the caller should
    /// request a redraw); calling again while running has no effect.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.last_tick = None;
        true
    }

    /// Stop the clock. No effect when already stopped.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Whether the clock is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Configured delay between ticks.
    #[must_use]
    pub fn frame_delay(&self) -> Duration {
        self.frame_delay
    }

    /// Whether an update tick should run at `now`.
    ///
    /// `false` while stopped. While running, the first call after
    /// [`start`](Self::start) always ticks; later calls tick only once
    /// `frame_delay` has elapsed since the previous accepted tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }
        if let Some(prev) = self.last_tick {
            if now.duration_since(prev) < self.frame_delay {
                return false;
            }
        }
        self.last_tick = Some(now);
        true
    }
}
