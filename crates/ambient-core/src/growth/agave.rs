use super::{depth_progress, Placement};
use crate::color::{Rgba, AGAVE_BASE, AGAVE_TIP};
use crate::constants::*;
use crate::error::ConfigError;
use crate::math::lerp;
use crate::surface::{ColorStop, Paint, PathOp, Surface};
use glam::Vec2;
use smallvec::smallvec;

/// Rosette of pointed leaves placed by the golden angle.
///
/// Higher indices are the outer, longer leaves. They are painted first and
/// revealed first, so the rosette fills in from the outside and inner leaves
/// overlap the outer ones.
#[derive(Clone, Debug, PartialEq)]
pub struct AgaveForm {
    pub leaf_count: u32,
    pub min_extent: f32,
    /// Length of the innermost leaf relative to the outermost.
    pub inner_ratio: f32,
    /// Half-width of a leaf relative to its length.
    pub width_ratio: f32,
    pub base_color: Rgba,
    pub tip_color: Rgba,
}

impl AgaveForm {
    pub fn new(leaf_count: u32) -> Self {
        Self {
            leaf_count,
            min_extent: MIN_EXTENT_PX,
            inner_ratio: 0.35,
            width_ratio: 0.16,
            base_color: AGAVE_BASE.with_alpha(0.9),
            tip_color: AGAVE_TIP.with_alpha(0.75),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.leaf_count == 0 || self.leaf_count > MAX_LEAVES {
            return Err(ConfigError::LeafCount {
                count: self.leaf_count,
                limit: MAX_LEAVES,
            });
        }
        Ok(())
    }

    /// Full-grown length of leaf `index` out of `count`.
    pub fn leaf_length(&self, index: u32, count: u32, extent: f32) -> f32 {
        let t = (index + 1) as f32 / count.max(1) as f32;
        extent * lerp(self.inner_ratio, 1.0, t)
    }

    /// Closed leaf outline along +x: two quadratic edges meeting at the tip.
    pub fn leaf_path(length: f32, half_width: f32) -> [PathOp; 4] {
        let tip = Vec2::new(length, 0.0);
        [
            PathOp::MoveTo(Vec2::ZERO),
            PathOp::QuadTo {
                ctrl: Vec2::new(length * 0.45, half_width),
                to: tip,
            },
            PathOp::QuadTo {
                ctrl: Vec2::new(length * 0.45, -half_width),
                to: Vec2::ZERO,
            },
            PathOp::Close,
        ]
    }

    pub fn render(&self, surface: &mut dyn Surface, placement: Placement, progress: f32) {
        let count = self.leaf_count.min(MAX_LEAVES);
        if count == 0 || !(placement.extent >= self.min_extent) {
            return;
        }
        let last = count - 1;
        for index in (0..count).rev() {
            let order = last - index;
            let local = depth_progress(progress, order, last);
            if local <= 0.0 {
                continue;
            }
            let length = self.leaf_length(index, count, placement.extent) * local;
            if length < self.min_extent {
                continue;
            }
            let angle = placement.orientation + index as f32 * GOLDEN_ANGLE;
            let paint = Paint::Linear {
                from: Vec2::ZERO,
                to: Vec2::new(length, 0.0),
                stops: smallvec![
                    ColorStop {
                        offset: 0.0,
                        color: self.base_color,
                    },
                    ColorStop {
                        offset: 1.0,
                        color: self.tip_color,
                    },
                ],
            };
            surface.save();
            surface.translate(placement.origin);
            surface.rotate(angle);
            surface.fill_path(&Self::leaf_path(length, length * self.width_ratio), &paint);
            surface.restore();
        }
    }
}

impl Default for AgaveForm {
    fn default() -> Self {
        Self::new(AGAVE_LEAVES)
    }
}
