//! Recursive growth renderers.
//!
//! Both forms are pure: the whole structure is regenerated from
//! `(placement, progress)` every frame and nothing is stored between frames,
//! so identical inputs always produce identical draw calls.

mod agave;
mod tree;

pub use agave::AgaveForm;
pub use tree::TreeForm;

use crate::error::ConfigError;
use crate::math::clamp01;
use crate::surface::Surface;
use glam::Vec2;

/// Local reveal fraction of level `depth` for global `progress`.
///
/// Level `d` of `max_depth + 1` levels starts once `progress` passes
/// `d / (max_depth + 1)` and is complete one level-width later, so
/// `progress = 0` reveals nothing and `progress = 1` reveals every level.
#[inline]
pub fn depth_progress(progress: f32, depth: u32, max_depth: u32) -> f32 {
    let levels = max_depth as f32 + 1.0;
    clamp01(clamp01(progress) * levels - depth as f32)
}

/// Progress of an instance that waits for the primary to pass `delay`, then
/// ramps over the remaining range.
#[inline]
pub fn delayed_progress(progress: f32, delay: f32) -> f32 {
    if delay <= 0.0 {
        return clamp01(progress);
    }
    if delay >= 1.0 {
        return 0.0;
    }
    clamp01((progress - delay) / (1.0 - delay))
}

/// Where a structure is rooted, which way it grows, and its extent in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub origin: Vec2,
    pub orientation: f32,
    pub extent: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GrowthForm {
    Tree(TreeForm),
    Agave(AgaveForm),
}

impl GrowthForm {
    pub fn render(&self, surface: &mut dyn Surface, placement: Placement, progress: f32) {
        match self {
            GrowthForm::Tree(t) => t.render(surface, placement, progress),
            GrowthForm::Agave(a) => a.render(surface, placement, progress),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            GrowthForm::Tree(t) => t.validate(),
            GrowthForm::Agave(a) => a.validate(),
        }
    }
}
