//! Per-frame orchestrator.
//!
//! Ties the pieces together: clears the background, draws the step column,
//! advances the animation when the frame clock ticks, and stops the clock as
//! soon as a sweep settles — one full sweep per tap, never a continuous
//! loop. The host event loop schedules frames according to the returned
//! [`Redraw`] request.

use web_time::{Duration, Instant};

use crate::animation::Animator;
use crate::canvas::Canvas;
use crate::input::InputEvent;
use crate::options::Options;
use crate::sequence::{SequenceUpdate, StepSequence};

/// Frame scheduling request returned to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// Nothing is animating; no frame needs to be scheduled.
    None,
    /// Redraw as soon as possible (a sweep just started).
    Now,
    /// Redraw after the given delay (a sweep is in progress).
    After(Duration),
}

/// Top-level widget driver: owns the step sequence, the frame clock, and
/// the options.
#[derive(Debug)]
pub struct Renderer {
    sequence: StepSequence,
    animator: Animator,
    options: Options,
}

impl Renderer {
    /// Idle widget with the given options.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let animator = Animator::new(options.timing.frame_delay());
        Self {
            sequence: StepSequence::new(),
            animator,
            options,
        }
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The step sequence, for host-side introspection.
    #[must_use]
    pub fn sequence(&self) -> &StepSequence {
        &self.sequence
    }

    /// Whether a sweep is currently in progress.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Draw one frame and advance the animation if the clock ticks.
    ///
    /// Clears to the background color and draws every step at its live
    /// progress. While the animator runs, at most one sequence update
    /// executes per frame delay; a settle stops the animator, so each tap
    /// produces exactly one settle-then-stop cycle.
    pub fn render(&mut self, canvas: &mut dyn Canvas, now: Instant) -> Redraw {
        canvas.clear(self.options.style.back_color);
        self.sequence.draw(canvas, &self.options.style);

        if self.animator.tick(now) {
            if let SequenceUpdate::Settled { index, scale } = self.sequence.update() {
                log::debug!("step {index} settled at {scale}");
                self.animator.stop();
            }
        }

        if self.animator.is_running() {
            Redraw::After(self.animator.frame_delay())
        } else {
            Redraw::None
        }
    }

    /// Handle a tap: start a sweep on the current step if it is idle.
    ///
    /// A tap while a sweep is already running is a no-op by construction.
    pub fn handle_tap(&mut self) -> Redraw {
        if self.sequence.start_updating() {
            log::debug!(
                "tap: starting sweep on step {}",
                self.sequence.current()
            );
            if self.animator.start() {
                return Redraw::Now;
            }
        }
        Redraw::None
    }

    /// Route a host input event. Only pointer-down triggers anything.
    pub fn handle_event(&mut self, event: InputEvent) -> Redraw {
        match event {
            InputEvent::PointerDown { .. } => self.handle_tap(),
            InputEvent::PointerUp { .. } => Redraw::None,
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DisplayList, DrawCommand};
    use crate::sequence::STEPS;

    const DELAY: Duration = Duration::from_millis(50);
    const EPSILON: f32 = 1e-4;

    /// Clip widths of recorded fills, two per step in draw order.
    fn fill_widths(list: &DisplayList) -> Vec<f32> {
        list.commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillPath { clip, .. } => Some(clip.width()),
                _ => None,
            })
            .collect()
    }

    /// Drive frames 50 ms apart until the renderer goes idle.
    fn run_until_idle(
        renderer: &mut Renderer,
        canvas: &mut DisplayList,
        t0: Instant,
    ) -> u32 {
        for frame in 1..=200_u32 {
            canvas.reset();
            match renderer.render(canvas, t0 + DELAY * frame) {
                Redraw::None => return frame,
                Redraw::After(_) => {}
                Redraw::Now => panic!("render should never request Now"),
            }
        }
        panic!("animation did not settle within 200 frames");
    }

    #[test]
    fn test_idle_frame_requests_nothing() {
        let mut renderer = Renderer::default();
        let mut canvas = DisplayList::new(500.0, 700.0);
        let outcome = renderer.render(&mut canvas, Instant::now());
        assert_eq!(outcome, Redraw::None);
        // Background clear plus four commands per step.
        assert_eq!(canvas.commands().len(), 1 + STEPS * 4);
        assert!(matches!(
            canvas.commands()[0],
            DrawCommand::Clear { .. }
        ));
    }

    #[test]
    fn test_tap_runs_one_sweep_then_halts() {
        let mut renderer = Renderer::default();
        let mut canvas = DisplayList::new(500.0, 700.0);
        let t0 = Instant::now();

        assert_eq!(
            renderer.handle_event(InputEvent::PointerDown { x: 10.0, y: 10.0 }),
            Redraw::Now
        );
        assert!(renderer.is_animating());

        let _ = run_until_idle(&mut renderer, &mut canvas, t0);
        assert!(!renderer.is_animating(), "animator should stop on settle");

        // Exactly the tapped step filled; the rest never moved.
        canvas.reset();
        let _ = renderer.render(&mut canvas, Instant::now());
        let widths = fill_widths(&canvas);
        let gap = 700.0 / (STEPS as f32 + 1.0);
        let size = gap / renderer.options().style.size_factor;
        for (i, w) in widths.iter().enumerate() {
            if i < 2 {
                assert!(
                    (w - size).abs() < EPSILON,
                    "step 0 fill {i} should be complete, got {w}"
                );
            } else {
                assert!(
                    w.abs() < EPSILON,
                    "untapped step fill {i} moved: {w}"
                );
            }
        }

        // The active index advanced to the next step.
        assert_eq!(renderer.sequence().current(), 1);
    }

    #[test]
    fn test_tap_while_animating_is_noop() {
        let mut renderer = Renderer::default();
        assert_eq!(renderer.handle_tap(), Redraw::Now);
        assert_eq!(
            renderer.handle_tap(),
            Redraw::None,
            "second tap mid-sweep should do nothing"
        );
    }

    #[test]
    fn test_pointer_up_is_ignored() {
        let mut renderer = Renderer::default();
        assert_eq!(
            renderer.handle_event(InputEvent::PointerUp { x: 0.0, y: 0.0 }),
            Redraw::None
        );
        assert!(!renderer.is_animating());
    }

    #[test]
    fn test_second_tap_animates_next_step() {
        let mut renderer = Renderer::default();
        let mut canvas = DisplayList::new(500.0, 700.0);
        let t0 = Instant::now();

        let _ = renderer.handle_tap();
        let first = run_until_idle(&mut renderer, &mut canvas, t0);

        let _ = renderer.handle_tap();
        let _ = run_until_idle(&mut renderer, &mut canvas, t0 + DELAY * (first + 1) * 2);

        // Both of the first two steps are now filled.
        canvas.reset();
        let _ = renderer.render(&mut canvas, Instant::now());
        let widths = fill_widths(&canvas);
        let gap = 700.0 / (STEPS as f32 + 1.0);
        let size = gap / renderer.options().style.size_factor;
        for w in &widths[..4] {
            assert!((w - size).abs() < EPSILON, "expected full fill, got {w}");
        }
        for w in &widths[4..] {
            assert!(w.abs() < EPSILON, "expected empty fill, got {w}");
        }
        assert_eq!(renderer.sequence().current(), 2);
    }
}
