//! Step shape renderer.
//!
//! One step is a mirrored pair of right triangles. As the step's scale sweeps
//! `0 → 1`, the first half of the sweep staggers the two triangles' fills
//! (each fills edge-inward, one after the other) while the second half
//! rotates the whole pair open by 90 degrees.

use glam::Vec2;

use crate::canvas::{Canvas, Paint, Rect};
use crate::easing::divide_scale;
use crate::options::StyleOptions;
use crate::sequence::STEPS;

/// Sub-triangles per step: one pair, mirrored through the step center.
pub const TRIS: u32 = 2;

/// Right-triangle outline with legs along +x and -y.
fn triangle_path(size: f32) -> [Vec2; 4] {
    [
        Vec2::ZERO,
        Vec2::new(size, 0.0),
        Vec2::new(0.0, -size),
        Vec2::ZERO,
    ]
}

/// Mirror coefficient for sub-triangle `j`: identity for the first,
/// point reflection for the second.
#[inline]
fn mirror(j: u32) -> f32 {
    1.0 - 2.0 * j as f32
}

/// Draw one triangle at the current transform: a stroked outline, then the
/// same path filled under a clip spanning `[0, size*fill] × [-size, 0]`, so
/// the triangle visually fills from its vertical leg outward.
pub fn draw_step(canvas: &mut dyn Canvas, size: f32, fill: f32, paint: &Paint) {
    let path = triangle_path(size);
    canvas.stroke_path(&path, paint);
    let clip = Rect::new(Vec2::new(0.0, -size), Vec2::new(size * fill, 0.0));
    canvas.fill_path_clipped(&path, clip, paint);
}

/// Draw the full mirrored pair for step `index` at animation progress
/// `scale`.
///
/// The step sits at `(w/2, gap*(index+1))` where `gap = h/(STEPS+1)`.
/// `scale` splits into a fill phase and a rotation phase via
/// [`divide_scale`]; the fill phase splits again to stagger the two
/// triangles.
pub fn draw_step_node(
    canvas: &mut dyn Canvas,
    index: usize,
    scale: f32,
    style: &StyleOptions,
) {
    let w = canvas.width();
    let h = canvas.height();
    let gap = h / (STEPS as f32 + 1.0);
    let size = gap / style.size_factor;
    let sc1 = divide_scale(scale, 0, 2);
    let sc2 = divide_scale(scale, 1, 2);
    let paint = Paint {
        color: style.fore_color,
        stroke_width: w.min(h) / style.stroke_factor,
    };

    canvas.save();
    canvas.translate(Vec2::new(w / 2.0, gap * (index as f32 + 1.0)));
    canvas.rotate(90.0 * sc2);
    for j in 0..TRIS {
        canvas.save();
        let m = mirror(j);
        canvas.scale(Vec2::new(m, m));
        draw_step(canvas, size, divide_scale(sc1, j, 2), &paint);
        canvas.restore();
    }
    canvas.restore();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DisplayList, DrawCommand};

    const EPSILON: f32 = 1e-4;

    fn fill_widths(list: &DisplayList) -> Vec<f32> {
        list.commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillPath { clip, .. } => Some(clip.width()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_draw_step_records_stroke_then_clipped_fill() {
        let mut list = DisplayList::new(100.0, 100.0);
        let paint = Paint {
            color: [1.0, 1.0, 1.0],
            stroke_width: 1.0,
        };
        draw_step(&mut list, 40.0, 0.5, &paint);

        assert_eq!(list.commands().len(), 2);
        assert!(matches!(list.commands()[0], DrawCommand::StrokePath { .. }));
        let DrawCommand::FillPath { clip, .. } = &list.commands()[1] else {
            panic!("expected a clipped fill");
        };
        assert!((clip.width() - 20.0).abs() < EPSILON);
        assert!((clip.height() - 40.0).abs() < EPSILON);
    }

    #[test]
    fn test_node_draws_two_triangles() {
        let mut list = DisplayList::new(500.0, 700.0);
        draw_step_node(&mut list, 0, 0.0, &StyleOptions::default());
        // One stroke + one fill per sub-triangle.
        assert_eq!(list.commands().len(), 4);
    }

    #[test]
    fn test_node_position_follows_index() {
        let style = StyleOptions::default();
        for index in 0..STEPS {
            let mut list = DisplayList::new(500.0, 700.0);
            draw_step_node(&mut list, index, 0.0, &style);
            let DrawCommand::StrokePath { transform, .. } = &list.commands()[0] else {
                panic!("expected a stroke command");
            };
            let origin = transform.transform_point2(Vec2::ZERO);
            let gap = 700.0 / (STEPS as f32 + 1.0);
            assert!(
                (origin.x - 250.0).abs() < EPSILON,
                "step {index} not centered: {origin:?}"
            );
            assert!(
                (origin.y - gap * (index as f32 + 1.0)).abs() < EPSILON,
                "step {index} at wrong row: {origin:?}"
            );
        }
    }

    #[test]
    fn test_second_triangle_is_point_reflected() {
        let mut list = DisplayList::new(500.0, 700.0);
        draw_step_node(&mut list, 0, 0.0, &StyleOptions::default());

        let strokes: Vec<_> = list
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::StrokePath {
                    points, transform, ..
                } => Some((points.clone(), *transform)),
                _ => None,
            })
            .collect();
        assert_eq!(strokes.len(), 2);

        let origin = strokes[0].1.transform_point2(Vec2::ZERO);
        let tip_a = strokes[0].1.transform_point2(strokes[0].0[1]);
        let tip_b = strokes[1].1.transform_point2(strokes[1].0[1]);
        // The mirrored triangle's tip sits opposite across the step center.
        assert!(
            ((tip_a + tip_b) / 2.0 - origin).length() < EPSILON,
            "tips not symmetric about the center: {tip_a:?} vs {tip_b:?}"
        );
    }

    #[test]
    fn test_fill_stagger_over_scale() {
        let style = StyleOptions::default();

        // At scale 0.125 only the first triangle has started filling.
        let mut list = DisplayList::new(500.0, 700.0);
        draw_step_node(&mut list, 0, 0.125, &style);
        let widths = fill_widths(&list);
        assert!(widths[0] > 0.0, "first fill should have started");
        assert!(
            widths[1].abs() < EPSILON,
            "second fill should not have started"
        );

        // At scale 0.5 both triangles are fully filled.
        let mut list = DisplayList::new(500.0, 700.0);
        draw_step_node(&mut list, 0, 0.5, &style);
        let gap = 700.0 / (STEPS as f32 + 1.0);
        let size = gap / style.size_factor;
        for w in fill_widths(&list) {
            assert!((w - size).abs() < EPSILON, "fill incomplete at scale 0.5");
        }
    }

    #[test]
    fn test_rotation_phase_after_fill_phase() {
        let style = StyleOptions::default();

        // No rotation at the fill-phase end.
        let mut list = DisplayList::new(500.0, 700.0);
        draw_step_node(&mut list, 0, 0.5, &style);
        let DrawCommand::StrokePath { transform, .. } = &list.commands()[0] else {
            panic!("expected a stroke command");
        };
        let origin = transform.transform_point2(Vec2::ZERO);
        let x_axis = transform.transform_point2(Vec2::X) - origin;
        assert!((x_axis.x - 1.0).abs() < EPSILON, "unexpected early rotation");

        // Full 90 degree rotation at scale 1: local +x maps to +y.
        let mut list = DisplayList::new(500.0, 700.0);
        draw_step_node(&mut list, 0, 1.0, &style);
        let DrawCommand::StrokePath { transform, .. } = &list.commands()[0] else {
            panic!("expected a stroke command");
        };
        let origin = transform.transform_point2(Vec2::ZERO);
        let x_axis = transform.transform_point2(Vec2::X) - origin;
        assert!(
            x_axis.x.abs() < EPSILON && (x_axis.y - 1.0).abs() < EPSILON,
            "expected 90 degree rotation, x-axis mapped to {x_axis:?}"
        );
    }
}
