pub mod color;
pub mod constants;
pub mod driver;
pub mod error;
pub mod field;
pub mod growth;
pub mod math;
pub mod parallax;
pub mod particle;
pub mod scene;
pub mod surface;
pub mod theme;

pub use color::Rgba;
pub use driver::{Animation, FrameDriver};
pub use error::ConfigError;
pub use field::{Blend, FieldParams, Falloff, Gust, GustDirection, ParticleField};
pub use growth::{delayed_progress, depth_progress, AgaveForm, GrowthForm, Placement, TreeForm};
pub use parallax::Parallax;
pub use particle::{Attraction, AttractionTarget, Particle, ParticleParams, RadiusBasis};
pub use scene::{GrowthMode, GrowthParams, GrowthScene, Secondary};
pub use surface::{Backdrop, CompositeMode, DrawCommand, DrawList, Paint, PathOp, Stroke, Surface};
pub use theme::{SceneConfig, Variant};
