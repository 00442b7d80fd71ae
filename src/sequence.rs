//! Fixed sequence of animatable steps with ping-pong traversal.
//!
//! The column holds [`STEPS`] nodes built once at construction. One node is
//! "current"; taps animate it, and each settle advances the current index
//! along the traversal direction. Hitting either end of the column reverses
//! the direction and stays in place, so repeated taps sweep the column up
//! and back down.

use crate::animation::{FillState, StateUpdate};
use crate::canvas::Canvas;
use crate::options::StyleOptions;
use crate::shape::draw_step_node;

/// Number of steps in the column. Fixed at construction.
pub const STEPS: usize = 5;

/// One animatable position in the column: its row index and fill state.
#[derive(Debug, Clone, Default)]
pub struct StepNode {
    index: usize,
    state: FillState,
}

impl StepNode {
    fn new(index: usize) -> Self {
        Self {
            index,
            state: FillState::new(),
        }
    }

    /// Row index in the column.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Live fill progress for rendering.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.state.scale()
    }
}

/// Outcome of one [`StepSequence::update`] tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SequenceUpdate {
    /// The current node's sweep is still in progress.
    Animating,
    /// The current node settled; the active index has already advanced.
    Settled {
        /// Index of the node that settled.
        index: usize,
        /// Committed scale of that node (0.0 or 1.0).
        scale: f32,
    },
}

/// Owns the step nodes, the active index, and the traversal direction.
#[derive(Debug, Clone)]
pub struct StepSequence {
    nodes: [StepNode; STEPS],
    current: usize,
    direction: i32,
}

impl StepSequence {
    /// Column of idle steps, starting at the top going down.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: core::array::from_fn(StepNode::new),
            current: 0,
            direction: 1,
        }
    }

    /// Index of the node the next tap will animate.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Traversal direction: `+1` descending the column, `-1` ascending.
    #[must_use]
    pub fn direction(&self) -> i32 {
        self.direction
    }

    /// Draw every node at its live fill progress.
    pub fn draw(&self, canvas: &mut dyn Canvas, style: &StyleOptions) {
        for node in &self.nodes {
            draw_step_node(canvas, node.index, node.scale(), style);
        }
    }

    /// Advance the current node's sweep by one tick.
    ///
    /// On settle the active index moves one place along the traversal
    /// direction (reversing at the column ends) and the settled node's
    /// index and committed scale are reported.
    pub fn update(&mut self) -> SequenceUpdate {
        match self.nodes[self.current].state.update() {
            StateUpdate::Settled(scale) => {
                let index = self.current;
                self.advance();
                SequenceUpdate::Settled { index, scale }
            }
            StateUpdate::Animating => SequenceUpdate::Animating,
        }
    }

    /// Begin a sweep on the current node. Returns `true` if the node was
    /// idle and a sweep started; `false` while one is already in progress.
    pub fn start_updating(&mut self) -> bool {
        self.nodes[self.current].state.start()
    }

    /// Move the active index one place, reversing at either boundary.
    fn advance(&mut self) {
        let next = self.current as i32 + self.direction;
        if (0..STEPS as i32).contains(&next) {
            self.current = next as usize;
        } else {
            self.direction = -self.direction;
            log::trace!(
                "reversed traversal at step {}, direction {}",
                self.current,
                self.direction
            );
        }
    }
}

impl Default for StepSequence {
    fn default() -> Self {
        Self::new()
    }
}
