//! Per-step fill state machine.

use crate::easing::update_value;
use crate::shape::TRIS;

/// Outcome of one [`FillState::update`] tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateUpdate {
    /// The sweep is still in progress (or the state is idle).
    Animating,
    /// The sweep overshot a full unit and was snapped to its target.
    /// Carries the committed scale (0.0 or 1.0).
    Settled(f32),
}

/// Scalar animation state for one step.
///
/// `scale` is the live progress value; `direction` is `+1` while filling,
/// `-1` while unfilling, `0` when idle; `prev_scale` is the last committed
/// settled value, always exactly 0.0 or 1.0.
#[derive(Debug, Clone, Default)]
pub struct FillState {
    scale: f32,
    direction: f32,
    prev_scale: f32,
}

impl FillState {
    /// Idle, empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Live animation progress, fed to the shape renderer every frame.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Whether no sweep is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.direction == 0.0
    }

    /// Advance the sweep by one tick.
    ///
    /// The increment magnitude halves during the fill phase (two staggered
    /// sub-fills share it) and doubles back for the rotation phase. Once the
    /// accumulated delta from the committed value overshoots a full unit,
    /// the scale snaps to the exact target, the direction resets, and the
    /// new value is committed.
    pub fn update(&mut self) -> StateUpdate {
        self.scale += update_value(self.scale, self.direction, TRIS, 1);
        if (self.scale - self.prev_scale).abs() > 1.0 {
            self.scale = self.prev_scale + self.direction;
            self.direction = 0.0;
            self.prev_scale = self.scale;
            return StateUpdate::Settled(self.prev_scale);
        }
        StateUpdate::Animating
    }

    /// Begin a sweep toward the opposite committed value.
    ///
    /// Only acts when idle: sets the direction to `+1` from an empty state
    /// or `-1` from a filled one and returns `true`. Returns `false`
    /// (no-op) while a sweep is already in progress.
    pub fn start(&mut self) -> bool {
        if self.direction == 0.0 {
            self.direction = 1.0 - 2.0 * self.prev_scale;
            return true;
        }
        false
    }
}
