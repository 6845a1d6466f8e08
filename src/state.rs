//! Per-node animation state and its single-step update rule.

/// Scale increment applied on every update, multiplied by the sweep sign.
pub const STEP: f32 = 0.1;

/// Tolerance for the arrival check. Ten f32 increments of 0.1 do not sum to
/// exactly 1.0, so the leg boundary is compared with this slack.
const ARRIVAL_EPSILON: f32 = 1e-3;

/// Direction a node's scale is currently moving in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sweep {
    /// Not animating.
    #[default]
    Idle,
    /// Scale moving from 0 toward 1.
    Rising,
    /// Scale moving from 1 toward 0.
    Falling,
}

impl Sweep {
    /// Numeric sign of the sweep: 0, 1 or -1.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Sweep::Idle => 0.0,
            Sweep::Rising => 1.0,
            Sweep::Falling => -1.0,
        }
    }

    /// Sweep that toggles away from a committed scale.
    ///
    /// Committed scales are always 0 or 1, so this is `1 - 2 * prev_scale`.
    #[inline]
    pub fn away_from(prev_scale: f32) -> Self {
        if prev_scale < 0.5 {
            Sweep::Rising
        } else {
            Sweep::Falling
        }
    }
}

/// Event produced by advancing an [`AnimationState`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StateEvent {
    /// A new leg started.
    Started,
    /// The leg finished; carries the committed scale.
    Completed(f32),
}

/// Scale of one node together with the leg it is currently running.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    scale: f32,
    prev_scale: f32,
    dir: Sweep,
}

impl AnimationState {
    /// Creates an idle state at scale 0.
    pub const fn new() -> Self {
        Self {
            scale: 0.0,
            prev_scale: 0.0,
            dir: Sweep::Idle,
        }
    }

    /// Current scale, in `[0, 1]`.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Scale committed at the end of the last leg.
    #[inline]
    pub fn prev_scale(&self) -> f32 {
        self.prev_scale
    }

    /// Current sweep.
    #[inline]
    pub fn dir(&self) -> Sweep {
        self.dir
    }

    /// Returns true while no leg is running.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.dir == Sweep::Idle
    }

    /// Moves the scale one step along the current sweep.
    ///
    /// Once the scale has travelled a full unit from `prev_scale` it snaps to
    /// `prev_scale + dir`, the sweep is cleared and the new scale is committed.
    ///
    /// # Returns
    /// * `Some(scale)` - The leg completed with this committed scale
    /// * `None` - Still moving (or idle)
    pub fn update(&mut self) -> Option<f32> {
        let sign = self.dir.sign();
        self.scale += STEP * sign;
        if (self.scale - self.prev_scale).abs() > 1.0 - ARRIVAL_EPSILON {
            self.scale = self.prev_scale + sign;
            self.dir = Sweep::Idle;
            self.prev_scale = self.scale;
            return Some(self.prev_scale);
        }
        None
    }

    /// Starts a new leg toward the opposite end, if idle.
    ///
    /// Returns `false` and leaves the state untouched while a leg is running.
    pub fn start_updating(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.dir = Sweep::away_from(self.prev_scale);
        true
    }
}

/// Applies one update to `state`, returning the new state and what happened.
pub fn advance(mut state: AnimationState) -> (AnimationState, Option<StateEvent>) {
    let event = state.update().map(StateEvent::Completed);
    (state, event)
}

/// Starts a leg on `state` if idle, returning the new state and the start event.
pub fn begin(mut state: AnimationState) -> (AnimationState, Option<StateEvent>) {
    let event = state.start_updating().then_some(StateEvent::Started);
    (state, event)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn new_state_is_idle_at_zero() {
        let state = AnimationState::new();
        assert_eq!(state.scale(), 0.0);
        assert_eq!(state.prev_scale(), 0.0);
        assert_eq!(state.dir(), Sweep::Idle);
    }

    #[test]
    fn idle_update_does_nothing() {
        let mut state = AnimationState::new();
        assert_eq!(state.update(), None);
        assert_eq!(state.scale(), 0.0);
    }

    #[test]
    fn rising_leg_completes_after_ten_updates() {
        let mut state = AnimationState::new();
        assert!(state.start_updating());
        assert_eq!(state.dir(), Sweep::Rising);

        let mut previous = state.scale();
        for step in 1..10 {
            assert_eq!(state.update(), None, "completed early at step {}", step);
            assert!((state.scale() - previous - STEP).abs() < EPSILON);
            previous = state.scale();
        }

        assert_eq!(state.update(), Some(1.0));
        assert_eq!(state.scale(), 1.0);
        assert_eq!(state.prev_scale(), 1.0);
        assert!(state.is_idle());
    }

    #[test]
    fn falling_leg_returns_to_zero() {
        let mut state = AnimationState::new();
        state.start_updating();
        while state.update().is_none() {}

        assert!(state.start_updating());
        assert_eq!(state.dir(), Sweep::Falling);

        let mut previous = state.scale();
        for _ in 1..10 {
            assert_eq!(state.update(), None);
            assert!(state.scale() < previous);
            previous = state.scale();
        }
        assert_eq!(state.update(), Some(0.0));
        assert_eq!(state.scale(), 0.0);
    }

    #[test]
    fn start_is_ignored_while_animating() {
        let mut state = AnimationState::new();
        assert!(state.start_updating());
        state.update();

        assert!(!state.start_updating());
        assert_eq!(state.dir(), Sweep::Rising);
    }

    #[test]
    fn pure_advance_reports_events() {
        let (state, event) = begin(AnimationState::new());
        assert_eq!(event, Some(StateEvent::Started));

        let (_, again) = begin(state);
        assert_eq!(again, None);

        let mut state = state;
        let mut completed = None;
        for _ in 0..10 {
            let (next, event) = advance(state);
            state = next;
            completed = event;
        }
        assert_eq!(completed, Some(StateEvent::Completed(1.0)));
    }

    #[test]
    fn sweep_signs() {
        assert_eq!(Sweep::Idle.sign(), 0.0);
        assert_eq!(Sweep::Rising.sign(), 1.0);
        assert_eq!(Sweep::Falling.sign(), -1.0);
        assert_eq!(Sweep::away_from(0.0), Sweep::Rising);
        assert_eq!(Sweep::away_from(1.0), Sweep::Falling);
    }
}
