//! Simulation constants and tuning parameters.
//!
//! Speeds, steps and rotation rates are expressed per reference frame
//! (1/60 s). Durations are in seconds.

/// Reference display refresh rate (Hz) that per-frame tuning is calibrated to.
pub const REFERENCE_FRAME_RATE: f64 = 60.0;

/// Seconds per reference frame.
pub const REFERENCE_DT: f64 = 1.0 / REFERENCE_FRAME_RATE;

// --- Ships ---

/// Pattern time added per frame.
pub const PATTERN_TIME_STEP: f64 = 0.01;

/// Upper bound (exclusive) of the randomized initial pattern time.
pub const PATTERN_TIME_SPREAD: f64 = std::f64::consts::TAU;

/// Maximum magnitude of per-axis idle rotation (radians per frame).
pub const SHIP_SPIN_MAX: f64 = 0.02;

/// Zigzag lateral frequency multiplier applied to pattern time.
pub const ZIGZAG_FREQUENCY: f64 = 2.0;

// --- Arena: depth lane ---

/// Half-width of the far-plane spawn rectangle.
pub const LANE_SPAWN_HALF_EXTENT: f64 = 10.0;

/// Depth of the far spawn plane.
pub const LANE_SPAWN_DEPTH: f64 = -50.0;

/// Farthest permitted ship depth.
pub const LANE_DEPTH_MIN: f64 = -100.0;

/// Nearest permitted ship depth (the player's side).
pub const LANE_DEPTH_MAX: f64 = 0.0;

/// Per-frame spawn probability for the stochastic policy.
pub const LANE_SPAWN_PROBABILITY: f64 = 0.02;

// --- Arena: open cube ---

/// Half-extent of the open arena spawn cube.
pub const ARENA_HALF_EXTENT: f64 = 40.0;

/// Lateral reflection bound for bouncing ships.
pub const ARENA_LATERAL_BOUND: f64 = 40.0;

/// Farthest permitted ship depth in the open arena.
pub const ARENA_DEPTH_MIN: f64 = -120.0;

/// Nearest permitted ship depth in the open arena.
pub const ARENA_DEPTH_MAX: f64 = 40.0;

/// Active ship count for the fixed-population policy.
pub const ARENA_POPULATION: usize = 8;

// --- Player ---

/// Player start position (the viewpoint).
pub const PLAYER_START: [f64; 3] = [0.0, 0.0, 5.0];

/// Player displacement per frame per held direction.
pub const PLAYER_STEP: f64 = 0.1;

/// Pitch clamp for the aim (±60°).
pub const AIM_PITCH_LIMIT: f64 = std::f64::consts::FRAC_PI_3;

// --- Projectiles ---

/// Minimum time between shots (seconds).
pub const FIRE_COOLDOWN_SECS: f64 = 0.2;

/// Projectile travel per frame.
pub const PROJECTILE_SPEED: f64 = 3.0;

/// Maximum travel distance from the muzzle before a projectile is dropped.
pub const PROJECTILE_RANGE: f64 = 105.0;

/// Projectile display color.
pub const PROJECTILE_COLOR: u32 = 0xff0000;

/// Projectile beam radius.
pub const PROJECTILE_SIZE: f64 = 0.15;

/// Projectile opacity.
pub const PROJECTILE_OPACITY: f64 = 0.8;

// --- Explosions ---

/// Fragments per explosion.
pub const EXPLOSION_FRAGMENTS: usize = 50;

/// Total explosion lifetime (seconds).
pub const EXPLOSION_DURATION_SECS: f64 = 1.0;

/// Shockwave scale at progress 1 is `1 + SHOCKWAVE_GROWTH`.
pub const SHOCKWAVE_GROWTH: f64 = 5.0;

/// Fragment speed band (per frame).
pub const FRAGMENT_SPEED_MIN: f64 = 0.1;
pub const FRAGMENT_SPEED_MAX: f64 = 0.3;

/// Maximum magnitude of per-axis fragment tumble (radians per frame).
pub const FRAGMENT_SPIN_MAX: f64 = 0.1;

/// Fragment radius band.
pub const FRAGMENT_SIZE_MIN: f64 = 0.2;
pub const FRAGMENT_SIZE_MAX: f64 = 0.7;

/// Flash sphere radius.
pub const FLASH_SIZE: f64 = 2.0;

/// Shockwave ring outer radius.
pub const SHOCKWAVE_SIZE: f64 = 2.0;

/// Starting opacity of flash and fragments.
pub const PARTICLE_OPACITY: f64 = 0.8;

/// Starting opacity of the shockwave ring.
pub const SHOCKWAVE_OPACITY: f64 = 0.5;
