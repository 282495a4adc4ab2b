use crate::constants::{PARALLAX_ATTR, PARALLAX_DEFAULT_DEPTH_PX, PARALLAX_MAX_DEPTH_PX, PARALLAX_SELECTOR};
use crate::viewport;
use ambient_core::Parallax;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A page element that shifts with the cursor.
pub struct ParallaxLayer {
    element: web::HtmlElement,
    depth: f32,
}

/// Every `[data-parallax]` element in the document, with its parsed depth.
pub fn collect_layers(document: &web::Document) -> Vec<ParallaxLayer> {
    let Ok(nodes) = document.query_selector_all(PARALLAX_SELECTOR) else {
        return Vec::new();
    };
    let mut layers = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<web::HtmlElement>().ok()) else {
            continue;
        };
        let raw = element.get_attribute(PARALLAX_ATTR);
        let depth = viewport::parse_depth(raw.as_deref(), PARALLAX_DEFAULT_DEPTH_PX, PARALLAX_MAX_DEPTH_PX);
        layers.push(ParallaxLayer { element, depth });
    }
    layers
}

pub fn apply(layers: &[ParallaxLayer], parallax: &Parallax) {
    for layer in layers {
        let t = parallax.translation(layer.depth);
        _ = layer
            .element
            .style()
            .set_property("transform", &format!("translate3d({:.2}px, {:.2}px, 0)", t.x, t.y));
    }
}
