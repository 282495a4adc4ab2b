use crate::math::{clamp01, lerp_vec2};
use glam::Vec2;

/// Eased pointer offset for cursor parallax layers.
///
/// The offset lives in [-0.5, 0.5]² (pointer minus viewport center); a layer
/// at depth `d` pixels is translated by `offset * d`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    offset: Vec2,
    ease: f32,
}

impl Parallax {
    pub fn new(ease: f32) -> Self {
        Self {
            offset: Vec2::ZERO,
            ease: clamp01(ease),
        }
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Ease toward the pointer's offset from center; returns the new offset.
    pub fn step(&mut self, pointer: Vec2) -> Vec2 {
        let target = (pointer - Vec2::splat(0.5)).clamp(Vec2::splat(-0.5), Vec2::splat(0.5));
        if target.is_finite() {
            self.offset = lerp_vec2(self.offset, target, self.ease);
        }
        self.offset
    }

    pub fn translation(&self, depth_px: f32) -> Vec2 {
        self.offset * depth_px
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_toward_pointer() {
        let mut p = Parallax::new(0.5);
        for _ in 0..40 {
            p.step(Vec2::new(1.0, 0.5));
        }
        assert!((p.offset().x - 0.5).abs() < 1e-4);
        assert!(p.offset().y.abs() < 1e-6);
        assert!((p.translation(20.0).x - 10.0).abs() < 1e-2);
    }

    #[test]
    fn centered_pointer_keeps_layers_still() {
        let mut p = Parallax::new(0.2);
        assert_eq!(p.step(Vec2::splat(0.5)), Vec2::ZERO);
    }
}
