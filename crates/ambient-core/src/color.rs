use crate::math::{clamp01, lerp};

/// 8-bit RGB color with a floating point alpha, the shape canvas color
/// strings take (`rgba(r, g, b, a)`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Component-wise blend toward `other`; `t` is clamped to [0, 1].
    pub fn lerp(self, other: Rgba, t: f32) -> Self {
        let t = clamp01(t);
        let ch = |a: u8, b: u8| lerp(a as f32, b as f32, t).round().clamp(0.0, 255.0) as u8;
        Self {
            r: ch(self.r, other.r),
            g: ch(self.g, other.g),
            b: ch(self.b, other.b),
            a: lerp(self.a, other.a, t),
        }
    }

    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, clamp01(self.a))
    }
}

// Dark green code-themed palette, muted for a dark background
pub const CODE_GREENS: [Rgba; 5] = [
    Rgba::rgb(22, 163, 74),  // green 600
    Rgba::rgb(5, 150, 105),  // emerald 600
    Rgba::rgb(13, 148, 136), // teal 600
    Rgba::rgb(20, 184, 166), // teal 400
    Rgba::rgb(34, 197, 94),  // green 500
];

// Saturated neon palette for the additive glow theme
pub const NEON_GLOW: [Rgba; 6] = [
    Rgba::rgb(236, 72, 153), // pink
    Rgba::rgb(139, 92, 246), // violet
    Rgba::rgb(59, 130, 246), // blue
    Rgba::rgb(6, 182, 212),  // cyan
    Rgba::rgb(16, 185, 129), // emerald
    Rgba::rgb(245, 158, 11), // amber
];

pub const BACKGROUND_DARK: Rgba = Rgba::rgb(13, 17, 23);
pub const BACKGROUND_NIGHT: Rgba = Rgba::rgb(5, 6, 15);

// Growth forms
pub const BARK: Rgba = Rgba::rgb(92, 64, 51);
pub const LEAF_TIP: Rgba = Rgba::rgb(132, 204, 22);
pub const AGAVE_BASE: Rgba = Rgba::rgb(21, 94, 117);
pub const AGAVE_TIP: Rgba = Rgba::rgb(167, 243, 208);
