//! Growth progress state machine and composition of growth instances.

use crate::color::{Rgba, BACKGROUND_DARK, BACKGROUND_NIGHT};
use crate::constants::*;
use crate::error::ConfigError;
use crate::growth::{delayed_progress, AgaveForm, GrowthForm, Placement, TreeForm};
use crate::surface::{Backdrop, Surface};
use glam::Vec2;
use smallvec::{smallvec, SmallVec};
use std::f32::consts::FRAC_PI_2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrowthMode {
    /// Grow once and hold; a tap restarts from zero.
    Monotonic { breathe: bool },
    /// Grow and shrink forever; taps are ignored.
    Oscillating,
}

/// A background copy of the primary structure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Secondary {
    /// Offset from the primary anchor, as a fraction of the viewport.
    pub offset: Vec2,
    pub scale: f32,
    /// Primary progress the copy waits for before it starts growing.
    pub delay: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GrowthParams {
    pub form: GrowthForm,
    pub mode: GrowthMode,
    pub step: f32,
    /// Primary root, as a fraction of the viewport.
    pub anchor: Vec2,
    pub orientation: f32,
    /// Primary extent as a fraction of the viewport's short side.
    pub extent_ratio: f32,
    pub secondaries: SmallVec<[Secondary; 4]>,
    pub background: Rgba,
}

impl GrowthParams {
    pub fn tree() -> Self {
        Self {
            form: GrowthForm::Tree(TreeForm::default()),
            mode: GrowthMode::Monotonic { breathe: true },
            step: 0.004,
            anchor: Vec2::new(0.5, 1.0),
            orientation: -FRAC_PI_2,
            extent_ratio: 0.26,
            secondaries: smallvec![
                Secondary {
                    offset: Vec2::new(-0.3, 0.0),
                    scale: 0.6,
                    delay: 0.35,
                },
                Secondary {
                    offset: Vec2::new(0.32, 0.0),
                    scale: 0.5,
                    delay: 0.5,
                },
                Secondary {
                    offset: Vec2::new(-0.12, 0.0),
                    scale: 0.35,
                    delay: 0.65,
                },
            ],
            background: BACKGROUND_DARK,
        }
    }

    pub fn agave() -> Self {
        Self {
            form: GrowthForm::Agave(AgaveForm::default()),
            mode: GrowthMode::Oscillating,
            step: 0.003,
            anchor: Vec2::new(0.5, 0.55),
            orientation: 0.0,
            extent_ratio: 0.42,
            secondaries: smallvec![
                Secondary {
                    offset: Vec2::new(-0.32, 0.18),
                    scale: 0.45,
                    delay: 0.3,
                },
                Secondary {
                    offset: Vec2::new(0.3, 0.22),
                    scale: 0.4,
                    delay: 0.45,
                },
            ],
            background: BACKGROUND_NIGHT,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.step > 0.0 && self.step <= 1.0) {
            return Err(ConfigError::Step(self.step));
        }
        let count = self.secondaries.len();
        if !(MIN_SECONDARIES..=MAX_SECONDARIES).contains(&count) {
            return Err(ConfigError::Secondaries {
                count,
                min: MIN_SECONDARIES,
                max: MAX_SECONDARIES,
            });
        }
        self.form.validate()
    }
}

pub struct GrowthScene {
    params: GrowthParams,
    progress: f32,
    growing: bool,
}

impl GrowthScene {
    pub fn new(params: GrowthParams) -> Result<Self, ConfigError> {
        params.validate()?;
        log::debug!(
            "[growth] mode={:?} step={} secondaries={}",
            params.mode,
            params.step,
            params.secondaries.len()
        );
        Ok(Self {
            params,
            progress: 0.0,
            growing: true,
        })
    }

    pub fn params(&self) -> &GrowthParams {
        &self.params
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_growing(&self) -> bool {
        self.growing
    }

    pub fn tick(&mut self) {
        let step = self.params.step;
        match self.params.mode {
            GrowthMode::Monotonic { .. } => {
                self.progress = (self.progress + step).min(1.0);
                self.growing = self.progress < 1.0;
            }
            GrowthMode::Oscillating => {
                if self.growing {
                    self.progress += step;
                    if self.progress >= 1.0 {
                        self.progress = 1.0;
                        self.growing = false;
                    }
                } else {
                    self.progress -= step;
                    if self.progress <= 0.0 {
                        self.progress = 0.0;
                        self.growing = true;
                    }
                }
            }
        }
    }

    /// Restart the reveal (monotonic scenes only). Returns whether the tap
    /// had any effect.
    pub fn tap(&mut self) -> bool {
        match self.params.mode {
            GrowthMode::Monotonic { .. } => {
                self.progress = 0.0;
                self.growing = true;
                log::debug!("[growth] restart");
                true
            }
            GrowthMode::Oscillating => false,
        }
    }

    /// Idle sway added to every orientation once a breathing scene is grown.
    pub fn sway(&self, time: u64) -> f32 {
        match self.params.mode {
            GrowthMode::Monotonic { breathe: true } if self.progress >= 1.0 => {
                ((time as f64 * BREATH_SPEED as f64).sin() as f32) * BREATH_AMPLITUDE
            }
            _ => 0.0,
        }
    }

    /// Every instance with its progress, in paint order: secondaries behind,
    /// primary last.
    pub fn instances(&self, size: Vec2, time: u64) -> SmallVec<[(Placement, f32); 5]> {
        let p = &self.params;
        let orientation = p.orientation + self.sway(time);
        let extent = size.x.min(size.y) * p.extent_ratio;
        let mut out: SmallVec<[(Placement, f32); 5]> = p
            .secondaries
            .iter()
            .map(|s| {
                let placement = Placement {
                    origin: (p.anchor + s.offset) * size,
                    orientation,
                    extent: extent * s.scale,
                };
                (placement, delayed_progress(self.progress, s.delay))
            })
            .collect();
        out.push((
            Placement {
                origin: p.anchor * size,
                orientation,
                extent,
            },
            self.progress,
        ));
        out
    }

    pub fn backdrop(&self) -> (Backdrop, Rgba) {
        (Backdrop::Clear, self.params.background)
    }

    pub fn draw(&self, surface: &mut dyn Surface, width: f32, height: f32, time: u64) {
        for (placement, progress) in self.instances(Vec2::new(width, height), time) {
            self.params.form.render(surface, placement, progress);
        }
    }
}
