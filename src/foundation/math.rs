//! Interpolation kernel: the pure numeric helpers every effect builds on.

use kurbo::Vec2;

/// Linear interpolation between `start` and `end`.
///
/// `factor` is intentionally unconstrained: values outside `[0, 1]`
/// extrapolate, which overshoot effects rely on.
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start * (1.0 - factor) + end * factor
}

/// Project `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// A zero-width input domain has no defined projection; this returns
/// `out_min` rather than dividing by zero, so a misconfigured mapping
/// degrades to an edge value instead of propagating NaN into a style.
#[inline]
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    if in_min == in_max {
        return out_min;
    }
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Restrict `value` to `[min, max]`.
///
/// Requires `min <= max`. Degenerate bounds collapse to `min` instead of
/// panicking; this sits on the render path.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if min > max {
        return min;
    }
    value.min(max).max(min)
}

/// Values a signal or mapping can interpolate.
pub trait Lerp: Sized {
    /// Interpolate between `a` and `b` at parameter `t`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (*a as f64 + ((*b as f64 - *a as f64) * t)) as f32
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
