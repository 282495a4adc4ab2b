#![cfg(target_arch = "wasm32")]
use ambient_core::{Animation, FrameDriver, Parallax};
use glam::Vec2;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod parallax;
mod viewport;

use constants::{CANVAS_ID, PARALLAX_EASE};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ambient-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;
    let ctx = dom::context_2d(&canvas)?;

    let variant = dom::read_variant(&canvas);
    let seed = js_sys::Date::now() as u64;
    let mut rng = StdRng::seed_from_u64(seed);
    let animation = Animation::from_variant(variant, &mut rng)?;

    let (w, h) = dom::sync_canvas_backing_size(&canvas);
    log::info!("[init] variant={} backing={}x{} seed={}", variant, w, h, seed);

    let driver = Rc::new(RefCell::new(FrameDriver::new(animation, w as f32, h as f32)));
    let pointer = Rc::new(Cell::new(Vec2::splat(0.5)));

    events::wire_resize(&canvas, driver.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        driver: driver.clone(),
        pointer: pointer.clone(),
    });

    let layers = parallax::collect_layers(&document);
    if !layers.is_empty() {
        log::info!("[parallax] {} layers", layers.len());
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        driver,
        surface: canvas::CanvasSurface::new(ctx),
        pointer,
        parallax: Parallax::new(PARALLAX_EASE),
        layers,
        last_instant: Instant::now(),
        stats_frames: 0,
        stats_secs: 0.0,
        stats_worst: 0.0,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
