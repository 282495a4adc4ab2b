//! Scalar and vector helpers shared by the particle and growth code.

use glam::Vec2;

#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Unit direction and length of `v`, or `None` when the length is below
/// `min_len` (or not finite). Callers skip the contribution on `None`.
#[inline]
pub fn normalize_or_none(v: Vec2, min_len: f32) -> Option<(Vec2, f32)> {
    let len = v.length();
    if len.is_finite() && len >= min_len && len > 0.0 {
        Some((v / len, len))
    } else {
        None
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec2(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a.lerp(b, t)
}

/// Clamp into [0, 1]; NaN maps to 0.
#[inline]
pub fn clamp01(x: f32) -> f32 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Velocity after an impulse; heavier bodies move less. Non-positive mass
/// counts as 1.
#[inline]
pub fn apply_force(velocity: Vec2, force: Vec2, mass: f32) -> Vec2 {
    let m = if mass > 0.0 { mass } else { 1.0 };
    velocity + force / m
}

/// Wrap `value` into `[min, max]` by whole spans. Values already inside are
/// returned untouched.
#[inline]
pub fn wrap(value: f32, min: f32, max: f32) -> f32 {
    let span = max - min;
    if !(span > 0.0) || !value.is_finite() || (min..=max).contains(&value) {
        return value;
    }
    min + (value - min).rem_euclid(span)
}
