//! The 2D drawing surface the core renders into.
//!
//! The browser front-end implements [`Surface`] over a canvas 2D context.
//! [`DrawList`] implements it by recording commands, so update and render
//! logic can be checked on the host without pixels.

use crate::color::Rgba;
use glam::Vec2;
use smallvec::SmallVec;

/// Global compositing operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CompositeMode {
    #[default]
    SourceOver,
    /// Additive ("lighter"): overlaps brighten instead of occluding.
    Lighter,
}

impl CompositeMode {
    pub fn as_css(self) -> &'static str {
        match self {
            CompositeMode::SourceOver => "source-over",
            CompositeMode::Lighter => "lighter",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

pub type Stops = SmallVec<[ColorStop; 4]>;

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    /// Gradient from `center` (radius 0) out to `radius`.
    Radial {
        center: Vec2,
        radius: f32,
        stops: Stops,
    },
    Linear {
        from: Vec2,
        to: Vec2,
        stops: Stops,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathOp {
    MoveTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    Close,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
}

impl LineCap {
    pub fn as_css(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Rgba,
    pub cap: LineCap,
}

pub trait Surface {
    fn set_composite(&mut self, mode: CompositeMode);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint);
    fn fill_path(&mut self, path: &[PathOp], paint: &Paint);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, radians: f32);
}

/// How the previous frame is erased before drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Backdrop {
    /// Background painted over the whole surface; nothing leaves trails.
    Clear,
    /// Background painted at low alpha, leaving motion trails.
    FadeTrail { alpha: f32 },
}

impl Backdrop {
    pub fn paint(self, surface: &mut dyn Surface, size: Vec2, background: Rgba) {
        let color = match self {
            Backdrop::Clear => background.with_alpha(1.0),
            Backdrop::FadeTrail { alpha } => background.with_alpha(alpha),
        };
        surface.set_composite(CompositeMode::SourceOver);
        surface.fill_rect(Vec2::ZERO, size, color);
    }
}

/// A single recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    SetComposite(CompositeMode),
    FillRect {
        origin: Vec2,
        size: Vec2,
        color: Rgba,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        paint: Paint,
    },
    FillPath {
        path: Vec<PathOp>,
        paint: Paint,
    },
    StrokeLine {
        from: Vec2,
        to: Vec2,
        stroke: Stroke,
    },
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),
}

impl DrawCommand {
    /// True for calls that put pixels down (fills and strokes).
    pub fn is_paint(&self) -> bool {
        matches!(
            self,
            DrawCommand::FillRect { .. }
                | DrawCommand::FillCircle { .. }
                | DrawCommand::FillPath { .. }
                | DrawCommand::StrokeLine { .. }
        )
    }
}

/// Surface that records every call in order.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn paint_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_paint()).count()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for DrawList {
    fn set_composite(&mut self, mode: CompositeMode) {
        self.commands.push(DrawCommand::SetComposite(mode));
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.commands.push(DrawCommand::FillRect {
            origin,
            size,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            paint: paint.clone(),
        });
    }

    fn fill_path(&mut self, path: &[PathOp], paint: &Paint) {
        self.commands.push(DrawCommand::FillPath {
            path: path.to_vec(),
            paint: paint.clone(),
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            stroke: *stroke,
        });
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.commands.push(DrawCommand::Translate(offset));
    }

    fn rotate(&mut self, radians: f32) {
        self.commands.push(DrawCommand::Rotate(radians));
    }
}
