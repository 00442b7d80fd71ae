//! Platform-agnostic input events.
//!
//! Host toolkits convert their native pointer/touch events into these and
//! feed them to [`Renderer::handle_event`](crate::renderer::Renderer::handle_event).
//! The widget reacts to a single gesture: a pointer going down anywhere on
//! its surface.

/// Platform-agnostic pointer events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer (finger, mouse button) pressed.
    PointerDown {
        /// Horizontal position in surface units.
        x: f32,
        /// Vertical position in surface units.
        y: f32,
    },
    /// Pointer released. Ignored by the widget; present so hosts can forward
    /// their full pointer stream without filtering.
    PointerUp {
        /// Horizontal position in surface units.
        x: f32,
        /// Vertical position in surface units.
        y: f32,
    },
}
