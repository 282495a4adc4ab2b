// Page wiring and front-end tuning constants.
//
// Markup hooks are kept here so the page and the wasm module agree on a
// single set of names.
// Canvas the animation draws into
pub const CANVAS_ID: &str = "ambient-canvas";

// Canvas attribute selecting the animation (wash | glow | tree | agave)
pub const VARIANT_ATTR: &str = "data-variant";

// Elements carrying this attribute follow the cursor; value is depth in CSS px
pub const PARALLAX_ATTR: &str = "data-parallax";
pub const PARALLAX_SELECTOR: &str = "[data-parallax]";
pub const PARALLAX_DEFAULT_DEPTH_PX: f32 = 24.0;
pub const PARALLAX_MAX_DEPTH_PX: f32 = 200.0;

// Fraction of the remaining distance the parallax offset covers per frame
pub const PARALLAX_EASE: f32 = 0.08;

// Frames between `[frame]` timing summaries in the debug log
pub const FRAME_STATS_INTERVAL: u64 = 600;
