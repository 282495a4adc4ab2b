// Shared simulation tuning constants used by the field and growth scenes.

// Particle pool
pub const MIN_PARTICLES: usize = 5;
pub const MAX_PARTICLES: usize = 8;

// Velocity decay per frame (a damped oscillator, not physical friction)
pub const FRICTION_MIN: f32 = 0.96;
pub const FRICTION_MAX: f32 = 0.98;

// Wrap margins for the particle anchor (unit-square coordinates)
pub const WASH_OVERSCAN: (f32, f32) = (-0.4, 1.4);
pub const GLOW_OVERSCAN: (f32, f32) = (-0.5, 1.5);

// Pointer attraction
pub const ATTRACTION_RADIUS: f32 = 0.5;
pub const ATTRACTION_EPSILON: f32 = 0.01;
pub const ATTRACTION_STRENGTH: f32 = 0.015;

// Wind gust on click/tap
pub const GUST_MIN_DISTANCE: f32 = 0.001;
pub const GUST_MAX_DISTANCE: f32 = 1.0;
pub const GUST_STRENGTH: f32 = 0.06;

// Radial gradient stop offsets for every particle disc
pub const GRADIENT_STOP_OFFSETS: [f32; 4] = [0.0, 0.4, 0.7, 1.0];

// Alpha profiles matching GRADIENT_STOP_OFFSETS
pub const WASH_ALPHA_PROFILE: [f32; 4] = [0.25, 0.10, 0.03, 0.0];
pub const GLOW_ALPHA_PROFILE: [f32; 4] = [0.55, 0.28, 0.08, 0.0];

// Trail fade alpha for the glow backdrop
pub const TRAIL_FADE_ALPHA: f32 = 0.05;

/// One sine/cosine term of the organic drift.
///
/// `speed_*` multiply the particle's angular speed, `phase_mul` scales its
/// phases and `gain` scales its drift amplitude.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Harmonic {
    pub speed_x: f32,
    pub speed_y: f32,
    pub phase_mul: f32,
    pub gain: f32,
}

pub const DRIFT_HARMONICS: [Harmonic; 3] = [
    Harmonic {
        speed_x: 1.0,
        speed_y: 0.7,
        phase_mul: 1.0,
        gain: 1.0,
    },
    Harmonic {
        speed_x: 1.9,
        speed_y: 1.3,
        phase_mul: 2.0,
        gain: 0.35,
    },
    Harmonic {
        speed_x: 3.1,
        speed_y: 2.3,
        phase_mul: 3.0,
        gain: 0.15,
    },
];

// Growth renderer guards
pub const MAX_DEPTH_LIMIT: u32 = 14;
pub const MAX_LEAVES: u32 = 64;
pub const MIN_EXTENT_PX: f32 = 2.0;

// Tree recursion
pub const BRANCH_DECAY: f32 = 0.67;
pub const CHILD_GATE: f32 = 0.3;
pub const BRANCH_SPREAD: f32 = 0.42; // radians between siblings
pub const BRANCH_JITTER: f32 = 0.22; // radians of sin-derived perturbation

// Agave rosette
pub const AGAVE_LEAVES: u32 = 21;
// π(3 − √5)
pub const GOLDEN_ANGLE: f32 = 2.399_963_2;

// Scene composition
pub const MIN_SECONDARIES: usize = 2;
pub const MAX_SECONDARIES: usize = 4;

// Idle breathing once a monotonic scene is fully grown
pub const BREATH_SPEED: f32 = 0.02; // radians per frame
pub const BREATH_AMPLITUDE: f32 = 0.015; // radians of sway
