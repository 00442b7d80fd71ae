//! Fill animation: the per-step state machine and the frame clock.

pub mod animator;
pub mod state;

pub use animator::Animator;
pub use state::{FillState, StateUpdate};
