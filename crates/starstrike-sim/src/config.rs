//! Simulation configuration.
//!
//! `SimConfig` gathers every tunable. Two presets cover the supported arena
//! variants; anything else can be loaded from JSON.

use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use starstrike_core::constants::*;
use starstrike_core::enums::ArchetypeId;

use crate::archetypes::get_archetype;

/// Errors raised while loading or validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Where new ships appear.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpawnRegion {
    /// Rectangle `x, y ∈ [-half_extent, half_extent]` at a fixed depth.
    FarPlane { half_extent: f64, depth: f64 },
    /// Cube `x, y, z ∈ [-half_extent, half_extent]`.
    Cube { half_extent: f64 },
}

/// Ship arrival policy. Exactly one is active per simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpawnPolicy {
    /// Spawn one ship per frame with the given probability.
    Stochastic { probability: f64 },
    /// Keep exactly `count` ships alive, replacing every loss in the same frame.
    FixedPopulation { count: usize },
}

/// How ship pattern time and per-frame motion relate to wall-clock time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternClock {
    /// Fixed step per frame regardless of frame duration.
    #[default]
    PerFrame,
    /// Steps scaled by frame delta relative to the reference refresh rate.
    WallClock,
}

impl PatternClock {
    /// Multiplier applied to per-frame speeds for a frame lasting `dt` seconds.
    pub fn frame_scale(self, dt: f64) -> f64 {
        match self {
            PatternClock::PerFrame => 1.0,
            PatternClock::WallClock => dt * REFERENCE_FRAME_RATE,
        }
    }
}

/// Arena geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub spawn_region: SpawnRegion,
    /// Ships farther than this are removed.
    pub depth_min: f64,
    /// Ships nearer than this are removed.
    pub depth_max: f64,
    /// Reflection bound on |x| and |y| for bouncing ships.
    pub lateral_bound: f64,
}

impl ArenaConfig {
    /// Depth a wrapping ship is reset to.
    pub fn far_depth(&self) -> f64 {
        match self.spawn_region {
            SpawnRegion::FarPlane { depth, .. } => depth,
            SpawnRegion::Cube { half_extent } => -half_extent,
        }
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            spawn_region: SpawnRegion::FarPlane {
                half_extent: LANE_SPAWN_HALF_EXTENT,
                depth: LANE_SPAWN_DEPTH,
            },
            depth_min: LANE_DEPTH_MIN,
            depth_max: LANE_DEPTH_MAX,
            lateral_bound: ARENA_LATERAL_BOUND,
        }
    }
}

/// Explosion tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplosionConfig {
    pub fragment_count: usize,
    pub duration_secs: f64,
    /// Shockwave scale grows from 1 to `1 + shockwave_growth`.
    pub shockwave_growth: f64,
    pub fragment_speed_min: f64,
    pub fragment_speed_max: f64,
}

impl Default for ExplosionConfig {
    fn default() -> Self {
        Self {
            fragment_count: EXPLOSION_FRAGMENTS,
            duration_secs: EXPLOSION_DURATION_SECS,
            shockwave_growth: SHOCKWAVE_GROWTH,
            fragment_speed_min: FRAGMENT_SPEED_MIN,
            fragment_speed_max: FRAGMENT_SPEED_MAX,
        }
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub arena: ArenaConfig,
    /// Archetypes eligible for spawning. Empty means the whole table.
    /// Duplicates weight the draw.
    pub roster: Vec<ArchetypeId>,
    pub spawn_policy: SpawnPolicy,
    pub pattern_clock: PatternClock,
    pub fire_cooldown_secs: f64,
    /// Projectile travel per frame.
    pub projectile_speed: f64,
    /// Travel distance after which a projectile is dropped.
    pub projectile_range: f64,
    pub player_start: DVec3,
    /// Player displacement per frame per held direction.
    pub player_step: f64,
    pub explosion: ExplosionConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::depth_lane()
    }
}

impl SimConfig {
    /// The reference game: ships arrive from a far plane and drift toward the player.
    pub fn depth_lane() -> Self {
        Self {
            seed: 42,
            arena: ArenaConfig::default(),
            roster: vec![
                ArchetypeId::Scout,
                ArchetypeId::Fighter,
                ArchetypeId::Carrier,
                ArchetypeId::Dart,
            ],
            spawn_policy: SpawnPolicy::Stochastic {
                probability: LANE_SPAWN_PROBABILITY,
            },
            pattern_clock: PatternClock::PerFrame,
            fire_cooldown_secs: FIRE_COOLDOWN_SECS,
            projectile_speed: PROJECTILE_SPEED,
            projectile_range: PROJECTILE_RANGE,
            player_start: DVec3::from_array(PLAYER_START),
            player_step: PLAYER_STEP,
            explosion: ExplosionConfig::default(),
        }
    }

    /// Bounded cube with a constant ship population and every archetype.
    pub fn open_arena() -> Self {
        Self {
            arena: ArenaConfig {
                spawn_region: SpawnRegion::Cube {
                    half_extent: ARENA_HALF_EXTENT,
                },
                depth_min: ARENA_DEPTH_MIN,
                depth_max: ARENA_DEPTH_MAX,
                lateral_bound: ARENA_LATERAL_BOUND,
            },
            roster: ArchetypeId::ALL.to_vec(),
            spawn_policy: SpawnPolicy::FixedPopulation {
                count: ARENA_POPULATION,
            },
            ..Self::depth_lane()
        }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Archetypes eligible for spawning, with an empty roster meaning the whole table.
    pub fn roster_or_table(&self) -> &[ArchetypeId] {
        if self.roster.is_empty() {
            &ArchetypeId::ALL
        } else {
            &self.roster
        }
    }

    /// Check every field for values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(msg: String) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid(msg))
        }

        if let SpawnPolicy::Stochastic { probability } = self.spawn_policy {
            if !(0.0..=1.0).contains(&probability) {
                return invalid(format!(
                    "spawn probability {probability} is outside [0, 1]"
                ));
            }
            // Random arrivals are only balanced by ships leaving the depth interval.
            if probability > 0.0 {
                if let Some(id) = self
                    .roster_or_table()
                    .iter()
                    .find(|id| get_archetype(**id).pattern.holds_depth())
                {
                    return invalid(format!(
                        "{id} never leaves the depth interval and needs a fixed_population spawn policy"
                    ));
                }
            }
        }
        match self.arena.spawn_region {
            SpawnRegion::FarPlane { half_extent, .. } | SpawnRegion::Cube { half_extent } => {
                if !(half_extent >= 0.0) {
                    return invalid(format!("spawn half extent {half_extent} is negative"));
                }
            }
        }
        if !(self.arena.depth_min < self.arena.depth_max) {
            return invalid(format!(
                "depth interval [{}, {}] is empty",
                self.arena.depth_min, self.arena.depth_max
            ));
        }
        if !(self.arena.lateral_bound > 0.0) {
            return invalid(format!(
                "lateral bound {} must be positive",
                self.arena.lateral_bound
            ));
        }
        if !(self.fire_cooldown_secs >= 0.0) {
            return invalid(format!(
                "fire cooldown {} is negative",
                self.fire_cooldown_secs
            ));
        }
        if !(self.projectile_speed > 0.0) {
            return invalid(format!(
                "projectile speed {} must be positive",
                self.projectile_speed
            ));
        }
        if !(self.projectile_range > 0.0) {
            return invalid(format!(
                "projectile range {} must be positive",
                self.projectile_range
            ));
        }
        let explosion = &self.explosion;
        if !(1..=256).contains(&explosion.fragment_count) {
            return invalid(format!(
                "fragment count {} is outside 1..=256",
                explosion.fragment_count
            ));
        }
        if !(explosion.duration_secs > 0.0) {
            return invalid(format!(
                "explosion duration {} must be positive",
                explosion.duration_secs
            ));
        }
        if !(0.0 <= explosion.fragment_speed_min
            && explosion.fragment_speed_min <= explosion.fragment_speed_max)
        {
            return invalid(format!(
                "fragment speed band [{}, {}] is invalid",
                explosion.fragment_speed_min, explosion.fragment_speed_max
            ));
        }
        Ok(())
    }
}
