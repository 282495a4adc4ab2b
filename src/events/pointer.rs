use crate::dom;
use crate::viewport;
use ambient_core::FrameDriver;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared state the input handlers write into. Handlers only record input;
/// the frame loop applies it.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub driver: Rc<RefCell<FrameDriver>>,
    pub pointer: Rc<Cell<Vec2>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_click(&w);
    wire_touchstart(&w);
}

/// Unit-square position of a client-space point, normalized against the
/// canvas' current backing size.
fn canvas_uv(canvas: &web::HtmlCanvasElement, client_x: i32, client_y: i32) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    let x_css = client_x as f32 - rect.left() as f32;
    let y_css = client_y as f32 - rect.top() as f32;
    let backing = [canvas.width() as f32, canvas.height() as f32];
    viewport::normalize_client([x_css, y_css], backing, dom::device_pixel_ratio() as f32)
        .map(Vec2::from)
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(uv) = canvas_uv(&w.canvas, ev.client_x(), ev.client_y()) else {
            return;
        };
        w.pointer.set(uv);
        w.driver.borrow_mut().pointer_moved(uv);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if let Some(uv) = canvas_uv(&w.canvas, ev.client_x(), ev.client_y()) {
            log::debug!("[input] tap at ({:.3}, {:.3})", uv.x, uv.y);
            w.driver.borrow_mut().tapped(uv);
        }
    }) as Box<dyn FnMut(_)>);

    _ = canvas_for_listener.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Non-passive so the tap does not also scroll or synthesize a click.
fn wire_touchstart(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let Some(touch) = ev.touches().get(0) else {
            return;
        };
        ev.prevent_default();
        if let Some(uv) = canvas_uv(&w.canvas, touch.client_x(), touch.client_y()) {
            w.pointer.set(uv);
            let mut driver = w.driver.borrow_mut();
            driver.pointer_moved(uv);
            driver.tapped(uv);
        }
    }) as Box<dyn FnMut(_)>);

    let options = web::AddEventListenerOptions::new();
    options.set_passive(false);
    _ = canvas_for_listener.add_event_listener_with_callback_and_add_event_listener_options(
        "touchstart",
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

/// Keep the backing store and the driver's viewport in step with the layout.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, driver: Rc<RefCell<FrameDriver>>) {
    let canvas_resize = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_backing_size(&canvas_resize);
        log::debug!("[resize] backing {}x{}", w, h);
        driver.borrow_mut().resize(w as f32, h as f32);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
