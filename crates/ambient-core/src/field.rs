//! Fixed-size collection of blobs sharing the pointer, wind gusts and the
//! frame's draw policy.

use crate::color::{Rgba, BACKGROUND_DARK, BACKGROUND_NIGHT};
use crate::constants::*;
use crate::error::ConfigError;
use crate::math::normalize_or_none;
use crate::particle::{Particle, ParticleParams};
use crate::surface::{Backdrop, CompositeMode, Surface};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blend {
    Normal,
    Additive,
}

impl Blend {
    fn composite(self) -> CompositeMode {
        match self {
            Blend::Normal => CompositeMode::SourceOver,
            Blend::Additive => CompositeMode::Lighter,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Falloff {
    Linear,
    Quadratic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GustDirection {
    /// Push particles away from the tap.
    Outward,
    /// Pull particles toward the tap.
    Inward,
}

/// Radial impulse applied to every particle on click/tap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gust {
    pub strength: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub falloff: Falloff,
    pub direction: GustDirection,
}

impl Gust {
    /// Impulse felt by a particle at `position`, or `None` when it sits on the
    /// tap (no defined direction) or beyond `max_distance`.
    pub fn force_on(&self, position: Vec2, tap: Vec2) -> Option<Vec2> {
        if !(self.max_distance > 0.0) {
            return None;
        }
        let (dir, dist) = normalize_or_none(position - tap, self.min_distance)?;
        let remaining = 1.0 - dist.min(self.max_distance) / self.max_distance;
        let magnitude = match self.falloff {
            Falloff::Linear => remaining,
            Falloff::Quadratic => remaining * remaining,
        } * self.strength;
        if magnitude <= 0.0 {
            return None;
        }
        let dir = match self.direction {
            GustDirection::Outward => dir,
            GustDirection::Inward => -dir,
        };
        Some(dir * magnitude)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub count: usize,
    pub particle: ParticleParams,
    pub gust: Gust,
    pub backdrop: Backdrop,
    pub blend: Blend,
    pub background: Rgba,
}

impl FieldParams {
    pub fn wash() -> Self {
        Self {
            count: MIN_PARTICLES,
            particle: ParticleParams::wash(),
            gust: Gust {
                strength: GUST_STRENGTH,
                min_distance: GUST_MIN_DISTANCE,
                max_distance: GUST_MAX_DISTANCE,
                falloff: Falloff::Linear,
                direction: GustDirection::Outward,
            },
            backdrop: Backdrop::Clear,
            blend: Blend::Normal,
            background: BACKGROUND_DARK,
        }
    }

    pub fn glow() -> Self {
        Self {
            count: 7,
            particle: ParticleParams::glow(),
            gust: Gust {
                strength: GUST_STRENGTH * 0.75,
                min_distance: GUST_MIN_DISTANCE,
                max_distance: 0.6,
                falloff: Falloff::Quadratic,
                direction: GustDirection::Inward,
            },
            backdrop: Backdrop::FadeTrail {
                alpha: TRAIL_FADE_ALPHA,
            },
            blend: Blend::Additive,
            background: BACKGROUND_NIGHT,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PARTICLES..=MAX_PARTICLES).contains(&self.count) {
            return Err(ConfigError::ParticleCount {
                count: self.count,
                min: MIN_PARTICLES,
                max: MAX_PARTICLES,
            });
        }
        if !(self.gust.max_distance > 0.0) {
            return Err(ConfigError::GustDistance(self.gust.max_distance));
        }
        self.particle.validate()
    }
}

pub struct ParticleField {
    params: FieldParams,
    particles: Vec<Particle>,
    pointer: Vec2,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(params: FieldParams, rng: &mut R) -> Result<Self, ConfigError> {
        params.validate()?;
        let particles = (0..params.count)
            .map(|i| Particle::create(i, &params.particle, rng))
            .collect::<Vec<_>>();
        log::debug!(
            "[field] spawned {} particles (blend={:?}, backdrop={:?})",
            particles.len(),
            params.blend,
            params.backdrop
        );
        Ok(Self {
            params,
            particles,
            pointer: Vec2::splat(0.5),
        })
    }

    /// Field over caller-built particles; the count is not checked.
    pub fn from_particles(params: FieldParams, particles: Vec<Particle>) -> Self {
        Self {
            params,
            particles,
            pointer: Vec2::splat(0.5),
        }
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Pointer in unit-square coordinates, as normalized by the caller at
    /// event time.
    pub fn set_pointer(&mut self, uv: Vec2) {
        if uv.is_finite() {
            self.pointer = uv;
        }
    }

    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for p in &mut self.particles {
            p.reset(&self.params.particle, rng);
        }
        log::debug!("[field] reset {} particles", self.particles.len());
    }

    /// Radial impulse from (or toward) `tap`; returns how many particles were
    /// pushed. Positions are untouched; the impulse plays out through the
    /// damped integrator over the following frames.
    pub fn wind_gust(&mut self, tap: Vec2) -> usize {
        let gust = self.params.gust;
        let mut pushed = 0;
        for p in &mut self.particles {
            if let Some(f) = gust.force_on(p.position, tap) {
                p.apply_force(f.x, f.y);
                pushed += 1;
            }
        }
        log::debug!(
            "[gust] at ({:.2},{:.2}) pushed {}/{}",
            tap.x,
            tap.y,
            pushed,
            self.particles.len()
        );
        pushed
    }

    pub fn update(&mut self, time: u64) {
        let influence = self.pointer;
        for p in &mut self.particles {
            p.update(time, influence, &self.params.particle);
        }
    }

    pub fn backdrop(&self) -> (Backdrop, Rgba) {
        (self.params.backdrop, self.params.background)
    }

    /// Draw every particle in collection order, then restore normal
    /// compositing if the field blends additively.
    pub fn draw(&self, surface: &mut dyn Surface, width: f32, height: f32) {
        let mode = self.params.blend.composite();
        if mode != CompositeMode::SourceOver {
            surface.set_composite(mode);
        }
        for p in &self.particles {
            p.draw(surface, width, height, &self.params.particle);
        }
        if mode != CompositeMode::SourceOver {
            surface.set_composite(CompositeMode::SourceOver);
        }
    }
}
