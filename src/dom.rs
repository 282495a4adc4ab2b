use crate::constants::VARIANT_ATTR;
use crate::viewport;
use ambient_core::Variant;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map_or(1.0, |w| w.device_pixel_ratio())
}

/// Match the canvas backing store to its CSS size times devicePixelRatio.
/// Returns the new backing size in device pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let rect = canvas.get_bounding_client_rect();
    let (w, h) = viewport::backing_size(rect.width(), rect.height(), device_pixel_ratio());
    canvas.set_width(w);
    canvas.set_height(h);
    (w, h)
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

/// Animation named by the canvas' `data-variant`; unknown names fall back to the default.
pub fn read_variant(canvas: &web::HtmlCanvasElement) -> Variant {
    let Some(raw) = canvas.get_attribute(VARIANT_ATTR) else {
        return Variant::default();
    };
    raw.parse().unwrap_or_else(|e| {
        log::warn!("[config] {}; falling back to {}", e, Variant::default());
        Variant::default()
    })
}
