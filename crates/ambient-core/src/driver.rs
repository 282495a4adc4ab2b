//! Per-frame integration: advance time, apply queued input, update, draw.
//!
//! The driver owns all simulation state. Input handlers only record pointer
//! position, a pending tap and the viewport size; everything else happens in
//! [`FrameDriver::tick`] followed by [`FrameDriver::render`].

use crate::error::ConfigError;
use crate::field::ParticleField;
use crate::scene::GrowthScene;
use crate::surface::Surface;
use crate::theme::{SceneConfig, Variant};
use glam::Vec2;
use rand::Rng;

pub enum Animation {
    Field(ParticleField),
    Growth(GrowthScene),
}

impl Animation {
    pub fn from_config<R: Rng + ?Sized>(config: SceneConfig, rng: &mut R) -> Result<Self, ConfigError> {
        Ok(match config {
            SceneConfig::Field(p) => Animation::Field(ParticleField::new(p, rng)?),
            SceneConfig::Growth(p) => Animation::Growth(GrowthScene::new(p)?),
        })
    }

    pub fn from_variant<R: Rng + ?Sized>(variant: Variant, rng: &mut R) -> Result<Self, ConfigError> {
        Self::from_config(variant.config(), rng)
    }
}

pub struct FrameDriver {
    animation: Animation,
    frame: u64,
    viewport: Vec2,
    pending_tap: Option<Vec2>,
}

impl FrameDriver {
    pub fn new(animation: Animation, width: f32, height: f32) -> Self {
        Self {
            animation,
            frame: 0,
            viewport: Vec2::new(width, height),
            pending_tap: None,
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn animation_mut(&mut self) -> &mut Animation {
        &mut self.animation
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    /// Pointer in unit-square coordinates. Only the blob field reacts.
    pub fn pointer_moved(&mut self, uv: Vec2) {
        if let Animation::Field(field) = &mut self.animation {
            field.set_pointer(uv);
        }
    }

    /// Queue a click/tap; it is applied at the start of the next tick. A
    /// second tap before then replaces the first.
    pub fn tapped(&mut self, uv: Vec2) {
        if uv.is_finite() {
            self.pending_tap = Some(uv);
        }
    }

    pub fn tick(&mut self) {
        self.frame += 1;
        let tap = self.pending_tap.take();
        match &mut self.animation {
            Animation::Field(field) => {
                if let Some(uv) = tap {
                    field.wind_gust(uv);
                }
                field.update(self.frame);
            }
            Animation::Growth(scene) => {
                if tap.is_some() {
                    scene.tap();
                }
                scene.tick();
            }
        }
    }

    /// Erase the previous frame per the animation's backdrop, then draw.
    /// A degenerate viewport draws nothing.
    pub fn render(&self, surface: &mut dyn Surface) {
        let Vec2 { x: w, y: h } = self.viewport;
        if !(w > 0.0 && h > 0.0) {
            return;
        }
        match &self.animation {
            Animation::Field(field) => {
                let (backdrop, background) = field.backdrop();
                backdrop.paint(surface, self.viewport, background);
                field.draw(surface, w, h);
            }
            Animation::Growth(scene) => {
                let (backdrop, background) = scene.backdrop();
                backdrop.paint(surface, self.viewport, background);
                scene.draw(surface, w, h, self.frame);
            }
        }
    }

    /// One frame-clock callback: update everything, then draw everything.
    pub fn step(&mut self, surface: &mut dyn Surface) {
        self.tick();
        self.render(surface);
    }
}
