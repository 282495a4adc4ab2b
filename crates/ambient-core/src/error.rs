use thiserror::Error;

/// Rejected scene configuration. The simulation itself has no runtime
/// errors; guards skip contributions instead.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown variant `{0}` (expected wash, glow, tree or agave)")]
    UnknownVariant(String),
    #[error("particle count {count} outside {min}..={max}")]
    ParticleCount { count: usize, min: usize, max: usize },
    #[error("friction {0} outside [{min}, {max}]", min = crate::constants::FRICTION_MIN, max = crate::constants::FRICTION_MAX)]
    Friction(f32),
    #[error("drift harmonics {0} outside 1..=3")]
    Harmonics(usize),
    #[error("overscan range [{min}, {max}] does not enclose the unit square")]
    Overscan { min: f32, max: f32 },
    #[error("palette is empty")]
    EmptyPalette,
    #[error("gust max distance {0} must be positive")]
    GustDistance(f32),
    #[error("max depth {depth} exceeds the limit of {limit}")]
    MaxDepth { depth: u32, limit: u32 },
    #[error("leaf count {count} outside 1..={limit}")]
    LeafCount { count: u32, limit: u32 },
    #[error("growth step {0} must lie in (0, 1]")]
    Step(f32),
    #[error("{count} secondary instances, expected {min}..={max}")]
    Secondaries { count: usize, min: usize, max: usize },
}
