//! Ties drawing, input and frame scheduling together.
//!
//! [`Renderer`] is what a host view talks to: forward draw requests to
//! [`Renderer::render`] and touch events to [`Renderer::handle_touch`], then
//! schedule the next redraw according to the returned [`FrameTiming`].

use crate::animator::{FrameAnimator, FrameTiming, Tick};
use crate::colors::BACKGROUND;
use crate::geometry::Canvas;
use crate::input::TouchAction;
use crate::sequencer::{BarSequencer, StepEvent};
use crate::time::{TimeInstant, TimeSource};
use heapless::Deque;

/// Number of completed steps remembered by a renderer.
pub const STEP_HISTORY: usize = 8;

/// Renders a stack of `N` bars and drives their animation.
///
/// Each tap runs exactly one leg: the animator is started when the leg
/// begins and stopped as soon as it completes.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `N` - Number of bars
pub struct Renderer<'t, I: TimeInstant, T: TimeSource<I>, const N: usize> {
    sequencer: BarSequencer<N>,
    animator: FrameAnimator<I>,
    time_source: &'t T,
    recent_steps: Deque<StepEvent, STEP_HISTORY>,
}

impl<'t, I: TimeInstant, T: TimeSource<I>, const N: usize> Renderer<'t, I, T, N> {
    /// Creates a renderer with every bar at rest.
    pub fn new(time_source: &'t T) -> Self {
        Self {
            sequencer: BarSequencer::new(),
            animator: FrameAnimator::new(),
            time_source,
            recent_steps: Deque::new(),
        }
    }

    /// Paints the widget and advances the animation if a frame is due.
    ///
    /// # Returns
    /// * `FrameTiming::Redraw(delay)` - Draw again after `delay`
    /// * `FrameTiming::Idle` - Nothing is animating
    pub fn render<C: Canvas>(&mut self, canvas: &mut C) -> FrameTiming<I::Duration> {
        canvas.clear(BACKGROUND);
        self.sequencer.draw(canvas);

        match self.animator.tick(self.time_source.now()) {
            Tick::Frame => {
                if let Some(step) = self.sequencer.update() {
                    self.animator.stop();
                    self.record(step);
                    #[cfg(feature = "defmt")]
                    defmt::debug!("leg complete on node {} at scale {}", step.index, step.scale);
                }
                // One more redraw after the final frame paints the committed scale.
                FrameTiming::Redraw(self.animator.interval())
            }
            Tick::Wait(delay) => FrameTiming::Redraw(delay),
            Tick::Stopped => FrameTiming::Idle,
        }
    }

    /// Handles a tap.
    ///
    /// Starts a leg on the current bar unless one is already running.
    /// Returns `true` if the host should request a redraw.
    pub fn handle_tap(&mut self) -> bool {
        if !self.sequencer.start_updating() {
            #[cfg(feature = "defmt")]
            defmt::trace!("tap ignored, leg in progress");
            return false;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("leg started on node {}", self.sequencer.current());

        self.animator.start()
    }

    /// Handles a touch event. Only [`TouchAction::Down`] counts as a tap.
    pub fn handle_touch(&mut self, action: TouchAction) -> bool {
        action.is_tap() && self.handle_tap()
    }

    fn record(&mut self, step: StepEvent) {
        if self.recent_steps.is_full() {
            self.recent_steps.pop_front();
        }
        let _ = self.recent_steps.push_back(step);
    }

    /// Most recently completed step, if any.
    pub fn last_step(&self) -> Option<StepEvent> {
        self.recent_steps.back().copied()
    }

    /// Completed steps, oldest first. Holds at most [`STEP_HISTORY`] entries.
    pub fn recent_steps(&self) -> impl Iterator<Item = &StepEvent> {
        self.recent_steps.iter()
    }

    /// Returns true while frames are being scheduled.
    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Returns the bar sequencer.
    pub fn sequencer(&self) -> &BarSequencer<N> {
        &self.sequencer
    }

    /// Frame interval as a duration.
    pub fn frame_interval(&self) -> I::Duration {
        self.animator.interval()
    }
}
