//! Frame scheduling for the bar animation.
//!
//! [`FrameAnimator`] decides when the next animation frame is due. It never
//! blocks: callers ask it on every redraw whether a frame should run now and
//! how long to wait before redrawing again. Stopping it cancels any pending
//! frame.

use crate::time::{FRAME_INTERVAL_MS, TimeDuration, TimeInstant};

/// Outcome of asking the animator for a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tick<D> {
    /// A frame is due. Run it now and redraw again after the frame interval.
    Frame,
    /// Running, but the next frame is not due for this long.
    Wait(D),
    /// Not running. Nothing to schedule.
    Stopped,
}

/// When the host should draw again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameTiming<D> {
    /// Schedule a redraw after this delay.
    Redraw(D),
    /// Animation is idle. Redraw only on the next input.
    Idle,
}

/// Throttles animation frames to a fixed interval.
///
/// # Type Parameters
/// * `I` - Time instant type
pub struct FrameAnimator<I: TimeInstant> {
    running: bool,
    last_frame: Option<I>,
    interval: I::Duration,
}

impl<I: TimeInstant> FrameAnimator<I> {
    /// Creates a stopped animator with the default frame interval.
    pub fn new() -> Self {
        Self::with_interval(I::Duration::from_millis(FRAME_INTERVAL_MS))
    }

    /// Creates a stopped animator that spaces frames `interval` apart.
    pub fn with_interval(interval: I::Duration) -> Self {
        Self {
            running: false,
            last_frame: None,
            interval,
        }
    }

    /// Starts animating.
    ///
    /// Returns `true` if the animator was stopped, in which case the caller
    /// should request a redraw. The first frame is due immediately.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.last_frame = None;
        true
    }

    /// Stops animating and cancels the pending frame. Idempotent.
    pub fn stop(&mut self) {
        self.running = false;
        self.last_frame = None;
    }

    /// Checks whether a frame is due at `now`.
    ///
    /// A returned [`Tick::Frame`] is recorded as having run at `now`.
    pub fn tick(&mut self, now: I) -> Tick<I::Duration> {
        if !self.running {
            return Tick::Stopped;
        }

        if let Some(last) = self.last_frame {
            let elapsed = now.duration_since(last);
            if elapsed.as_millis() < self.interval.as_millis() {
                return Tick::Wait(self.interval.saturating_sub(elapsed));
            }
        }

        self.last_frame = Some(now);
        Tick::Frame
    }

    /// Returns true while frames are being scheduled.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Time between frames.
    #[inline]
    pub fn interval(&self) -> I::Duration {
        self.interval
    }
}

impl<I: TimeInstant> Default for FrameAnimator<I> {
    fn default() -> Self {
        Self::new()
    }
}
