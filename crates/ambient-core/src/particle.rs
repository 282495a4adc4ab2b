//! Drifting gradient blob.
//!
//! A particle is a plain record: its anchor (`base_position`) integrates
//! velocity and wraps inside an overscan margin, while the visible
//! `position` is the anchor plus a bounded sum of sinusoids. Random fields
//! come from an injected [`Rng`], so seeded tests are reproducible.

use crate::color::Rgba;
use crate::constants::*;
use crate::error::ConfigError;
use crate::math::{apply_force, normalize_or_none, wrap};
use crate::surface::{ColorStop, Paint, Surface};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;
use std::ops::Range;

/// Which point the pointer pull moves.
///
/// The two blob themes differ here on purpose: the wash theme pulls the
/// anchor, so the pull accumulates and persists; the glow theme pulls the
/// drawn position only, so the blob leans toward the pointer but springs
/// back once the pointer leaves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttractionTarget {
    Anchor,
    Position,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Attraction {
    pub target: AttractionTarget,
    pub radius: f32,
    pub epsilon: f32,
    pub strength: f32,
}

impl Attraction {
    /// Displacement toward `influence`, proportional to `radius - distance`,
    /// or `None` outside `(epsilon, radius)`.
    pub fn pull(&self, position: Vec2, influence: Vec2) -> Option<Vec2> {
        let d = influence - position;
        let (_, dist) = normalize_or_none(d, self.epsilon)?;
        if dist <= self.epsilon || dist >= self.radius {
            return None;
        }
        Some(d * (self.radius - dist) * self.strength)
    }
}

/// Pixel dimension a particle's unit radius is measured against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RadiusBasis {
    ShortSide,
    LongSide,
}

impl RadiusBasis {
    #[inline]
    pub fn pick(self, width: f32, height: f32) -> f32 {
        match self {
            RadiusBasis::ShortSide => width.min(height),
            RadiusBasis::LongSide => width.max(height),
        }
    }
}

/// Per-theme particle behavior. Ranges are sampled once per particle at
/// creation or reset.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleParams {
    pub friction: f32,
    pub harmonics: usize,
    pub radius: Range<f32>,
    pub angular_speed: Range<f32>,
    pub drift_amplitude: Range<f32>,
    pub mass: Range<f32>,
    pub attraction: Attraction,
    pub overscan: (f32, f32),
    pub radius_basis: RadiusBasis,
    pub alpha_profile: [f32; 4],
    pub palette: &'static [Rgba],
}

impl ParticleParams {
    /// Low-opacity wash: anchor attraction, hard-edged margin at [-0.4, 1.4].
    pub fn wash() -> Self {
        Self {
            friction: FRICTION_MIN,
            harmonics: 1,
            radius: 0.30..0.55,
            angular_speed: 0.0004..0.0006,
            drift_amplitude: 0.06..0.10,
            mass: 0.5..1.0,
            attraction: Attraction {
                target: AttractionTarget::Anchor,
                radius: ATTRACTION_RADIUS,
                epsilon: ATTRACTION_EPSILON,
                strength: ATTRACTION_STRENGTH,
            },
            overscan: WASH_OVERSCAN,
            radius_basis: RadiusBasis::ShortSide,
            alpha_profile: WASH_ALPHA_PROFILE,
            palette: &crate::color::CODE_GREENS,
        }
    }

    /// High-opacity glow: three drift terms, position attraction, wider margin.
    pub fn glow() -> Self {
        Self {
            friction: FRICTION_MAX,
            harmonics: 3,
            radius: 0.12..0.22,
            angular_speed: 0.0030..0.0055,
            drift_amplitude: 0.04..0.08,
            mass: 0.6..1.4,
            attraction: Attraction {
                target: AttractionTarget::Position,
                radius: ATTRACTION_RADIUS,
                epsilon: ATTRACTION_EPSILON,
                strength: ATTRACTION_STRENGTH * 2.0,
            },
            overscan: GLOW_OVERSCAN,
            radius_basis: RadiusBasis::LongSide,
            alpha_profile: GLOW_ALPHA_PROFILE,
            palette: &crate::color::NEON_GLOW,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(FRICTION_MIN..=FRICTION_MAX).contains(&self.friction) {
            return Err(ConfigError::Friction(self.friction));
        }
        if !(1..=DRIFT_HARMONICS.len()).contains(&self.harmonics) {
            return Err(ConfigError::Harmonics(self.harmonics));
        }
        let (min, max) = self.overscan;
        if !(min <= 0.0 && max >= 1.0) {
            return Err(ConfigError::Overscan { min, max });
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }

    /// Upper bound of `|position - base_position|` from drift alone.
    pub fn drift_gain(&self) -> f32 {
        DRIFT_HARMONICS
            .iter()
            .take(self.harmonics)
            .map(|h| h.gain)
            .sum()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub index: usize,
    pub position: Vec2,
    pub base_position: Vec2,
    pub velocity: Vec2,
    pub mass: f32,
    pub radius: f32,
    pub drift_amplitude: f32,
    pub angular_speed: f32,
    pub phase_x: f32,
    pub phase_y: f32,
    pub color_index: usize,
}

#[inline]
fn sample<R: Rng + ?Sized>(rng: &mut R, range: &Range<f32>) -> f32 {
    if range.start < range.end {
        rng.gen_range(range.clone())
    } else {
        range.start
    }
}

impl Particle {
    pub fn create<R: Rng + ?Sized>(index: usize, params: &ParticleParams, rng: &mut R) -> Self {
        let mut p = Self {
            index,
            position: Vec2::ZERO,
            base_position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            mass: 1.0,
            radius: 0.0,
            drift_amplitude: 0.0,
            angular_speed: 0.0,
            phase_x: 0.0,
            phase_y: 0.0,
            color_index: index % params.palette.len().max(1),
        };
        p.reset(params, rng);
        p
    }

    /// Re-roll every random field in place. `index` and `color_index` are kept.
    pub fn reset<R: Rng + ?Sized>(&mut self, params: &ParticleParams, rng: &mut R) {
        self.position = Vec2::new(rng.gen::<f32>(), rng.gen::<f32>());
        self.base_position = self.position;
        self.velocity = Vec2::ZERO;
        self.radius = sample(rng, &params.radius);
        self.angular_speed = sample(rng, &params.angular_speed);
        self.drift_amplitude = sample(rng, &params.drift_amplitude);
        self.phase_x = rng.gen::<f32>() * TAU;
        self.phase_y = rng.gen::<f32>() * TAU;
        self.mass = sample(rng, &params.mass);
    }

    /// Sum of the first `harmonics` drift terms at frame `time`.
    pub fn drift_offset(&self, time: u64, harmonics: usize) -> Vec2 {
        let t = time as f64;
        let speed = self.angular_speed as f64;
        DRIFT_HARMONICS
            .iter()
            .take(harmonics)
            .fold(Vec2::ZERO, |acc, h| {
                let ax = t * speed * h.speed_x as f64 + (self.phase_x * h.phase_mul) as f64;
                let ay = t * speed * h.speed_y as f64 + (self.phase_y * h.phase_mul) as f64;
                let amp = self.drift_amplitude * h.gain;
                acc + Vec2::new(ax.sin() as f32 * amp, ay.cos() as f32 * amp)
            })
    }

    pub fn update(&mut self, time: u64, influence: Vec2, params: &ParticleParams) {
        self.velocity *= params.friction;
        self.base_position += self.velocity;

        self.position = self.base_position + self.drift_offset(time, params.harmonics);

        if let Some(pull) = params.attraction.pull(self.position, influence) {
            match params.attraction.target {
                AttractionTarget::Anchor => self.base_position += pull,
                AttractionTarget::Position => self.position += pull,
            }
        }

        // Wrap the anchor only; the drawn position follows through the drift.
        let (min, max) = params.overscan;
        self.base_position.x = wrap(self.base_position.x, min, max);
        self.base_position.y = wrap(self.base_position.y, min, max);
    }

    pub fn apply_force(&mut self, fx: f32, fy: f32) {
        self.velocity = apply_force(self.velocity, Vec2::new(fx, fy), self.mass);
    }

    pub fn draw(&self, surface: &mut dyn Surface, width: f32, height: f32, params: &ParticleParams) {
        let Some(color) = params.palette.get(self.color_index % params.palette.len().max(1)) else {
            return;
        };
        let center = Vec2::new(self.position.x * width, self.position.y * height);
        let radius = self.radius * params.radius_basis.pick(width, height);
        if !(radius > 0.0) || !center.is_finite() {
            return;
        }
        let stops = GRADIENT_STOP_OFFSETS
            .iter()
            .zip(params.alpha_profile)
            .map(|(&offset, alpha)| ColorStop {
                offset,
                color: color.with_alpha(alpha),
            })
            .collect();
        surface.fill_circle(
            center,
            radius,
            &Paint::Radial {
                center,
                radius,
                stops,
            },
        );
    }
}
