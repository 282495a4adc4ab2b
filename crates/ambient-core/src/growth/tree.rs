use super::{depth_progress, Placement};
use crate::color::{Rgba, BARK, LEAF_TIP};
use crate::constants::*;
use crate::error::ConfigError;
use crate::math::lerp;
use crate::surface::{LineCap, Stroke, Surface};
use glam::Vec2;
use smallvec::SmallVec;

/// Branching tree of tapering strokes.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeForm {
    pub max_depth: u32,
    pub length_decay: f32,
    pub spread: f32,
    pub jitter: f32,
    pub child_gate: f32,
    pub min_extent: f32,
    pub trunk_width: f32,
    pub tip_width: f32,
    pub trunk_color: Rgba,
    pub tip_color: Rgba,
}

impl TreeForm {
    pub fn new(max_depth: u32) -> Self {
        Self {
            max_depth,
            length_decay: BRANCH_DECAY,
            spread: BRANCH_SPREAD,
            jitter: BRANCH_JITTER,
            child_gate: CHILD_GATE,
            min_extent: MIN_EXTENT_PX,
            trunk_width: 12.0,
            tip_width: 0.8,
            trunk_color: BARK.with_alpha(0.95),
            tip_color: LEAF_TIP.with_alpha(0.6),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::MaxDepth {
                depth: self.max_depth,
                limit: MAX_DEPTH_LIMIT,
            });
        }
        Ok(())
    }

    #[inline]
    fn effective_max_depth(&self) -> u32 {
        self.max_depth.min(MAX_DEPTH_LIMIT)
    }

    /// Children spawned at `depth`: 2 or 3, fixed by a sine of the depth so
    /// the silhouette is the same every frame.
    pub fn branch_count(depth: u32) -> usize {
        if (depth as f32 * 2.3).sin() > 0.35 {
            3
        } else {
            2
        }
    }

    /// Child directions fanned around `angle` with a sine-derived lean.
    pub fn child_angles(&self, angle: f32, depth: u32) -> SmallVec<[f32; 3]> {
        let n = Self::branch_count(depth);
        let mid = (n - 1) as f32 / 2.0;
        (0..n)
            .map(|i| {
                let fan = self.spread * (i as f32 - mid);
                let lean = ((depth as f32 + 1.0) * 1.7 + i as f32 * 0.9).sin() * self.jitter;
                angle + fan + lean
            })
            .collect()
    }

    /// Stroke for a segment at `depth`: tips are thinner, lighter and greener.
    pub fn stroke_for(&self, depth: u32) -> Stroke {
        let max = self.effective_max_depth().max(1) as f32;
        let t = (depth as f32 / max).min(1.0);
        Stroke {
            width: lerp(self.trunk_width, self.tip_width, t),
            color: self.trunk_color.lerp(self.tip_color, t),
            cap: LineCap::Round,
        }
    }

    pub fn render(&self, surface: &mut dyn Surface, placement: Placement, progress: f32) {
        self.render_branch(
            surface,
            placement.origin,
            placement.orientation,
            placement.extent,
            0,
            progress,
        );
    }

    pub fn render_branch(
        &self,
        surface: &mut dyn Surface,
        origin: Vec2,
        angle: f32,
        length: f32,
        depth: u32,
        progress: f32,
    ) {
        let max_depth = self.effective_max_depth();
        if depth > max_depth || !(length >= self.min_extent) {
            return;
        }
        let local = depth_progress(progress, depth, max_depth);
        if local <= 0.0 {
            return;
        }

        let end = origin + Vec2::from_angle(angle) * (length * local);
        surface.stroke_line(origin, end, &self.stroke_for(depth));

        if local <= self.child_gate {
            return;
        }
        let child_len = length * self.length_decay;
        for child in self.child_angles(angle, depth) {
            self.render_branch(surface, end, child, child_len, depth + 1, progress);
        }
    }
}

impl Default for TreeForm {
    fn default() -> Self {
        Self::new(8)
    }
}
