use crate::canvas::CanvasSurface;
use crate::constants::FRAME_STATS_INTERVAL;
use crate::parallax::{self, ParallaxLayer};
use ambient_core::{FrameDriver, Parallax};
use glam::Vec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub driver: Rc<RefCell<FrameDriver>>,
    pub surface: CanvasSurface,
    pub pointer: Rc<Cell<Vec2>>,

    pub parallax: Parallax,
    pub layers: Vec<ParallaxLayer>,

    pub last_instant: Instant,
    pub stats_frames: u64,
    pub stats_secs: f32,
    pub stats_worst: f32,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        self.driver.borrow_mut().step(&mut self.surface);

        if !self.layers.is_empty() {
            self.parallax.step(self.pointer.get());
            parallax::apply(&self.layers, &self.parallax);
        }

        self.record_timing(dt_sec);
    }

    fn record_timing(&mut self, dt_sec: f32) {
        self.stats_frames += 1;
        self.stats_secs += dt_sec;
        self.stats_worst = self.stats_worst.max(dt_sec);
        if self.stats_frames < FRAME_STATS_INTERVAL {
            return;
        }
        let avg_ms = self.stats_secs * 1000.0 / self.stats_frames as f32;
        log::debug!(
            "[frame] n={} avg={:.2}ms worst={:.2}ms",
            self.driver.borrow().frame(),
            avg_ms,
            self.stats_worst * 1000.0
        );
        self.stats_frames = 0;
        self.stats_secs = 0.0;
        self.stats_worst = 0.0;
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(tick: &TickClosure) {
    if let (Some(w), Some(closure)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
