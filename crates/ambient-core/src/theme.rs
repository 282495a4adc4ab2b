use crate::error::ConfigError;
use crate::field::FieldParams;
use crate::scene::GrowthParams;
use std::fmt;
use std::str::FromStr;

/// Named background animations a page can request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// Soft low-opacity blobs, hard clear, normal blending.
    #[default]
    Wash,
    /// Bright blobs with fading trails and additive blending.
    Glow,
    /// Tree that grows once, breathes, and restarts on tap.
    Tree,
    /// Agave rosette that grows and shrinks forever.
    Agave,
}

/// Parameters for whichever animation family a variant belongs to.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneConfig {
    Field(FieldParams),
    Growth(GrowthParams),
}

impl Variant {
    pub const ALL: [Variant; 4] = [Variant::Wash, Variant::Glow, Variant::Tree, Variant::Agave];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Wash => "wash",
            Variant::Glow => "glow",
            Variant::Tree => "tree",
            Variant::Agave => "agave",
        }
    }

    pub fn config(self) -> SceneConfig {
        match self {
            Variant::Wash => SceneConfig::Field(FieldParams::wash()),
            Variant::Glow => SceneConfig::Field(FieldParams::glow()),
            Variant::Tree => SceneConfig::Growth(GrowthParams::tree()),
            Variant::Agave => SceneConfig::Growth(GrowthParams::agave()),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Variant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(key))
            .ok_or_else(|| ConfigError::UnknownVariant(key.to_string()))
    }
}
