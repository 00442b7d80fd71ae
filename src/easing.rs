//! Phase-splitting interpolation primitives.
//!
//! A single global scale in `[0, 1]` drives several staggered sub-animations.
//! [`divide_scale`] splits that scale into `n` equal phases, each individually
//! eased into `[0, 1]`: phase `i` only starts moving once the value exceeds
//! `i/n`, and each phase fully completes its own excursion before the next
//! begins. [`update_value`] produces the per-tick increment, switching its
//! magnitude once the sweep crosses the phase divide.

/// Phase divide: increments switch magnitude once the scale crosses this.
pub const SC_DIV: f32 = 0.51;

/// Base per-tick increment applied to an animating scale.
pub const SC_GAP: f32 = 0.05;

/// Reciprocal of a phase count as `f32`.
#[inline]
#[must_use]
pub fn inverse(n: u32) -> f32 {
    1.0 / n as f32
}

/// Portion of `value` above phase `i`'s start point `i/n`, floored at zero.
#[inline]
#[must_use]
pub fn max_scale(value: f32, i: u32, n: u32) -> f32 {
    (value - i as f32 * inverse(n)).max(0.0)
}

/// Split a global scale into `n` equal phases and return phase `i`'s local
/// progress, eased into `[0, 1]`.
///
/// For `value` in `[0, 1]` the result is in `[0, 1]` and is monotonically
/// non-decreasing in `value`.
#[inline]
#[must_use]
pub fn divide_scale(value: f32, i: u32, n: u32) -> f32 {
    max_scale(value, i, n).min(inverse(n)) * n as f32
}

/// Which side of the phase divide `value` sits on: 0 below, 1 at or above.
#[inline]
#[must_use]
pub fn scale_factor(value: f32) -> f32 {
    (value / SC_DIV).floor()
}

/// Select between `1/a` and `1/b` based on which side of the phase divide
/// `value` sits on.
#[inline]
#[must_use]
pub fn mirror_value(value: f32, a: u32, b: u32) -> f32 {
    let k = scale_factor(value);
    (1.0 - k) * inverse(a) + k * inverse(b)
}

/// Per-tick increment for an animating scale: magnitude `SC_GAP/a` before the
/// phase divide, `SC_GAP/b` after, signed by `dir`.
#[inline]
#[must_use]
pub fn update_value(value: f32, dir: f32, a: u32, b: u32) -> f32 {
    mirror_value(value, a, b) * dir * SC_GAP
}
