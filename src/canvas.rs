use ambient_core::surface::{ColorStop, CompositeMode, Paint, PathOp, Stroke, Surface};
use ambient_core::Rgba;
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// `Surface` backed by a 2D canvas context.
///
/// Canvas calls that can throw (composite names, gradient creation, arcs)
/// are best-effort: a failed call skips that one shape.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn apply_fill(&self, paint: &Paint) -> bool {
        match paint {
            Paint::Solid(color) => {
                self.ctx.set_fill_style_str(&color.to_css());
                true
            }
            Paint::Radial {
                center,
                radius,
                stops,
            } => {
                let (x, y) = (center.x as f64, center.y as f64);
                match self
                    .ctx
                    .create_radial_gradient(x, y, 0.0, x, y, radius.max(0.0) as f64)
                {
                    Ok(gradient) => {
                        add_stops(&gradient, stops);
                        self.ctx.set_fill_style_canvas_gradient(&gradient);
                        true
                    }
                    Err(_) => false,
                }
            }
            Paint::Linear { from, to, stops } => {
                let gradient = self.ctx.create_linear_gradient(
                    from.x as f64,
                    from.y as f64,
                    to.x as f64,
                    to.y as f64,
                );
                add_stops(&gradient, stops);
                self.ctx.set_fill_style_canvas_gradient(&gradient);
                true
            }
        }
    }
}

fn add_stops(gradient: &web::CanvasGradient, stops: &[ColorStop]) {
    for stop in stops {
        _ = gradient.add_color_stop(stop.offset, &stop.color.to_css());
    }
}

impl Surface for CanvasSurface {
    fn set_composite(&mut self, mode: CompositeMode) {
        _ = self.ctx.set_global_composite_operation(mode.as_css());
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            origin.x as f64,
            origin.y as f64,
            size.x as f64,
            size.y as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        if !radius.is_finite() || radius <= 0.0 || !self.apply_fill(paint) {
            return;
        }
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }

    fn fill_path(&mut self, path: &[PathOp], paint: &Paint) {
        if path.is_empty() || !self.apply_fill(paint) {
            return;
        }
        self.ctx.begin_path();
        for op in path {
            match *op {
                PathOp::MoveTo(p) => self.ctx.move_to(p.x as f64, p.y as f64),
                PathOp::QuadTo { ctrl, to } => self.ctx.quadratic_curve_to(
                    ctrl.x as f64,
                    ctrl.y as f64,
                    to.x as f64,
                    to.y as f64,
                ),
                PathOp::Close => self.ctx.close_path(),
            }
        }
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        self.ctx.set_line_width(stroke.width as f64);
        self.ctx.set_line_cap(stroke.cap.as_css());
        self.ctx.set_stroke_style_str(&stroke.color.to_css());
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, offset: Vec2) {
        _ = self.ctx.translate(offset.x as f64, offset.y as f64);
    }

    fn rotate(&mut self, radians: f32) {
        _ = self.ctx.rotate(radians as f64);
    }
}
