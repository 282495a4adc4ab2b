// Pure sizing and pointer normalization helpers (no web-sys).

/// Backing-store size for a canvas laid out at `css_w` x `css_h` CSS pixels.
#[inline]
pub fn backing_size(css_w: f64, css_h: f64, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let w = (css_w * dpr).max(0.0) as u32;
    let h = (css_h * dpr).max(0.0) as u32;
    (w.max(1), h.max(1))
}

/// Pointer position in unit-square coordinates.
///
/// `client` is relative to the canvas' top-left in CSS pixels. `backing` is
/// the canvas backing size as of the last resize, so a pointer event that
/// lands before a pending resize is normalized against the previous size.
/// The attraction target is then slightly off until the resize handler runs;
/// this is accepted. Values are not clamped: the pointer may sit outside the
/// canvas.
#[inline]
pub fn normalize_client(client: [f32; 2], backing: [f32; 2], dpr: f32) -> Option<[f32; 2]> {
    let [w, h] = backing;
    if !(w > 0.0 && h > 0.0) {
        return None;
    }
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let u = client[0] * dpr / w;
    let v = client[1] * dpr / h;
    (u.is_finite() && v.is_finite()).then_some([u, v])
}

/// Parse a `data-parallax` depth, falling back to `default` and clamping to
/// `[-max, max]`.
#[inline]
pub fn parse_depth(raw: Option<&str>, default: f32, max: f32) -> f32 {
    raw.and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|d| d.is_finite())
        .unwrap_or(default)
        .clamp(-max, max)
}
