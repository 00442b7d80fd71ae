//! Platform-agnostic immediate-mode 2D canvas.
//!
//! The widget draws through the [`Canvas`] trait and never touches a real
//! surface itself. Hosts either implement the trait directly against their
//! toolkit, or record a [`DisplayList`] and replay the resolved
//! [`DrawCommand`]s against whatever backend they have. The display list is
//! also the test seam: assertions inspect recorded commands instead of
//! pixels.

use glam::{Affine2, Vec2};

/// Stroke/fill parameters for a single draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    /// RGB color, each channel in `[0, 1]`.
    pub color: [f32; 3],
    /// Stroke width in surface units (ignored by fills).
    pub stroke_width: f32,
}

/// Axis-aligned rectangle in local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Corner with the smallest coordinates.
    pub min: Vec2,
    /// Corner with the largest coordinates.
    pub max: Vec2,
}

impl Rect {
    /// Rectangle from two opposite corners.
    #[must_use]
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Horizontal extent.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// A resolved draw call recorded by a [`DisplayList`].
///
/// Path points are kept in local coordinates with the transform that was
/// active at record time captured alongside, so tests can assert on either
/// space and backends can push the transform natively.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// Fill the whole surface with a color.
    Clear {
        /// RGB fill color.
        color: [f32; 3],
    },
    /// Stroke an open or closed polyline.
    StrokePath {
        /// Path vertices in local coordinates.
        points: Vec<Vec2>,
        /// Transform active when the path was recorded.
        transform: Affine2,
        /// Stroke parameters.
        paint: Paint,
    },
    /// Fill a polygon, clipped to a local-space rectangle.
    FillPath {
        /// Path vertices in local coordinates.
        points: Vec<Vec2>,
        /// Clip rectangle in the same local space as the path.
        clip: Rect,
        /// Transform active when the path was recorded.
        transform: Affine2,
        /// Fill parameters.
        paint: Paint,
    },
}

/// Immediate-mode 2D drawing surface.
///
/// Mirrors the small set of operations the widget needs: a background clear,
/// stroked paths, rect-clipped filled paths, and a save/restore transform
/// stack with translate/rotate/scale.
pub trait Canvas {
    /// Surface dimensions in drawing units.
    fn size(&self) -> Vec2;

    /// Fill the whole surface with a color, discarding prior content.
    fn clear(&mut self, color: [f32; 3]);

    /// Push the current transform onto the stack.
    fn save(&mut self);

    /// Pop the transform stack, restoring the previously saved transform.
    fn restore(&mut self);

    /// Translate subsequent drawing by `offset`.
    fn translate(&mut self, offset: Vec2);

    /// Rotate subsequent drawing by `degrees` (clockwise, y-down).
    fn rotate(&mut self, degrees: f32);

    /// Scale subsequent drawing per-axis (negative values mirror).
    fn scale(&mut self, factor: Vec2);

    /// Stroke a polyline through `points`.
    fn stroke_path(&mut self, points: &[Vec2], paint: &Paint);

    /// Fill the polygon through `points`, clipped to `clip`.
    fn fill_path_clipped(&mut self, points: &[Vec2], clip: Rect, paint: &Paint);

    /// Surface width.
    fn width(&self) -> f32 {
        self.size().x
    }

    /// Surface height.
    fn height(&self) -> f32 {
        self.size().y
    }
}

/// A [`Canvas`] that records resolved [`DrawCommand`]s.
#[derive(Debug, Clone)]
pub struct DisplayList {
    size: Vec2,
    transform: Affine2,
    stack: Vec<Affine2>,
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    /// Empty display list for a surface of the given dimensions.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            transform: Affine2::IDENTITY,
            stack: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// Recorded commands, in draw order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop all recorded commands and reset the transform for a new frame.
    pub fn reset(&mut self) {
        self.commands.clear();
        self.stack.clear();
        self.transform = Affine2::IDENTITY;
    }
}

impl Canvas for DisplayList {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self, color: [f32; 3]) {
        self.commands.push(DrawCommand::Clear { color });
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(t) = self.stack.pop() {
            self.transform = t;
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform = self.transform * Affine2::from_translation(offset);
    }

    fn rotate(&mut self, degrees: f32) {
        self.transform = self.transform * Affine2::from_angle(degrees.to_radians());
    }

    fn scale(&mut self, factor: Vec2) {
        self.transform = self.transform * Affine2::from_scale(factor);
    }

    fn stroke_path(&mut self, points: &[Vec2], paint: &Paint) {
        self.commands.push(DrawCommand::StrokePath {
            points: points.to_vec(),
            transform: self.transform,
            paint: *paint,
        });
    }

    fn fill_path_clipped(&mut self, points: &[Vec2], clip: Rect, paint: &Paint) {
        self.commands.push(DrawCommand::FillPath {
            points: points.to_vec(),
            clip,
            transform: self.transform,
            paint: *paint,
        });
    }
}
