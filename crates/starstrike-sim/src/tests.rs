//! Tests for the simulation engine: phases, frame ordering, firing, scoring and lifecycle.

use approx::assert_relative_eq;
use glam::DVec3;

use starstrike_core::commands::PlayerCommand;
use starstrike_core::enums::*;
use starstrike_core::events::SimEvent;
use starstrike_core::state::GameStateSnapshot;

use crate::config::{PatternClock, SimConfig, SpawnPolicy};
use crate::engine::SimulationEngine;
use crate::presenter::HeadlessScene;

const DT: f64 = 1.0 / 60.0;

fn engine(config: SimConfig) -> SimulationEngine<HeadlessScene> {
    SimulationEngine::new(config, HeadlessScene::new())
}

/// Depth lane with no random arrivals.
fn quiet_lane() -> SimConfig {
    SimConfig {
        spawn_policy: SpawnPolicy::Stochastic { probability: 0.0 },
        ..SimConfig::depth_lane()
    }
}

fn started(config: SimConfig) -> SimulationEngine<HeadlessScene> {
    let mut engine = engine(config);
    engine.queue_command(PlayerCommand::Start);
    engine.tick(DT);
    engine
}

fn live_renderables(engine: &SimulationEngine<HeadlessScene>) -> usize {
    engine.ships().len()
        + engine.projectiles().len()
        + engine
            .explosions()
            .iter()
            .map(|e| e.particles.len())
            .sum::<usize>()
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let config = SimConfig {
        seed: 12345,
        ..SimConfig::depth_lane()
    };
    let mut engine_a = engine(config.clone());
    let mut engine_b = engine(config);

    engine_a.queue_command(PlayerCommand::Start);
    engine_b.queue_command(PlayerCommand::Start);

    for frame in 0..1200 {
        if frame % 7 == 0 {
            engine_a.queue_command(PlayerCommand::Fire);
            engine_b.queue_command(PlayerCommand::Fire);
        }
        if frame % 90 == 0 {
            let aim = PlayerCommand::Aim {
                delta_yaw: 0.05,
                delta_pitch: -0.02,
            };
            engine_a.queue_command(aim.clone());
            engine_b.queue_command(aim);
        }
        let snap_a = engine_a.tick(DT);
        let snap_b = engine_b.tick(DT);

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = engine(SimConfig {
        seed: 111,
        ..SimConfig::depth_lane()
    });
    let mut engine_b = engine(SimConfig {
        seed: 222,
        ..SimConfig::depth_lane()
    });

    engine_a.queue_command(PlayerCommand::Start);
    engine_b.queue_command(PlayerCommand::Start);

    let mut diverged = false;
    for _ in 0..1000 {
        let json_a = serde_json::to_string(&engine_a.tick(DT)).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick(DT)).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "Different seeds should produce divergent output");
}

// ---- Phases ----

#[test]
fn test_idle_ignores_everything_but_start() {
    let mut engine = engine(SimConfig::depth_lane());
    engine.queue_commands([
        PlayerCommand::Fire,
        PlayerCommand::Move {
            direction: MoveDirection::Up,
            pressed: true,
        },
        PlayerCommand::Aim {
            delta_yaw: 1.0,
            delta_pitch: 0.5,
        },
    ]);

    for _ in 0..100 {
        let snap = engine.tick(DT);
        assert_eq!(snap.phase, GamePhase::Idle);
        assert_eq!(snap.time.frame, 0);
        assert!(snap.ships.is_empty());
        assert!(snap.events.is_empty());
    }
    assert_eq!(engine.player().position, DVec3::new(0.0, 0.0, 5.0));
    assert_eq!(engine.player().aim.yaw, 0.0);

    engine.queue_command(PlayerCommand::Start);
    let snap = engine.tick(DT);
    assert_eq!(snap.phase, GamePhase::Running);
    assert_eq!(snap.time.frame, 1);
    // The Idle fire request was discarded, not deferred.
    assert!(snap.projectiles.is_empty());
    assert_eq!(engine.player().position, DVec3::new(0.0, 0.0, 5.0));
}

#[test]
fn test_start_is_one_way() {
    let mut engine = started(quiet_lane());
    let before = engine.time();
    engine.queue_command(PlayerCommand::Start);
    let snap = engine.tick(DT);
    assert_eq!(snap.phase, GamePhase::Running);
    // A second Start does not reset the clock.
    assert_eq!(snap.time.frame, before.frame + 1);
}

#[test]
fn test_clock_is_monotonic() {
    let mut engine = started(quiet_lane());
    let mut last = engine.time().elapsed_secs;
    for dt in [DT, 0.0, -1.0, f64::NAN, 0.05, f64::INFINITY, DT] {
        let snap = engine.tick(dt);
        assert!(snap.time.elapsed_secs >= last);
        assert!(snap.time.elapsed_secs.is_finite());
        last = snap.time.elapsed_secs;
    }
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "fragment speed band")]
fn test_engine_refuses_invalid_config() {
    let mut config = quiet_lane();
    config.explosion.fragment_speed_min = 1.0;
    config.explosion.fragment_speed_max = 0.5;
    engine(config);
}

// ---- Player ----

#[test]
fn test_held_movement_moves_player_each_frame() {
    let mut engine = started(quiet_lane());
    engine.queue_commands([
        PlayerCommand::Move {
            direction: MoveDirection::Up,
            pressed: true,
        },
        PlayerCommand::Move {
            direction: MoveDirection::Left,
            pressed: true,
        },
    ]);
    for _ in 0..10 {
        engine.tick(DT);
    }
    let pos = engine.player().position;
    assert_relative_eq!(pos.y, 1.0, epsilon = 1e-9);
    assert_relative_eq!(pos.x, -1.0, epsilon = 1e-9);
    assert_eq!(pos.z, 5.0);

    engine.queue_command(PlayerCommand::Move {
        direction: MoveDirection::Up,
        pressed: false,
    });
    engine.tick(DT);
    assert_relative_eq!(engine.player().position.y, 1.0, epsilon = 1e-9);
}

#[test]
fn test_aim_pitch_is_clamped() {
    let mut engine = started(quiet_lane());
    engine.queue_command(PlayerCommand::Aim {
        delta_yaw: 0.0,
        delta_pitch: 10.0,
    });
    let snap = engine.tick(DT);
    assert_relative_eq!(snap.player.aim.pitch, std::f64::consts::FRAC_PI_3);
}

// ---- Firing ----

#[test]
fn test_fire_cooldown() {
    let mut engine = engine(quiet_lane());
    engine.queue_commands([PlayerCommand::Start, PlayerCommand::Fire]);
    // Frames at t = 0.1, 0.2, 0.3, 0.4.
    engine.tick(0.1);
    engine.queue_command(PlayerCommand::Fire);
    engine.tick(0.1);
    engine.tick(0.1);
    engine.queue_command(PlayerCommand::Fire);
    engine.tick(0.1);

    assert_eq!(engine.projectiles().len(), 2);
    assert_eq!(engine.score().shots_fired, 2);
}

#[test]
fn test_double_fire_in_one_frame_yields_one_shot() {
    let mut engine = started(quiet_lane());
    engine.queue_commands([PlayerCommand::Fire, PlayerCommand::Fire]);
    let snap = engine.tick(DT);
    assert_eq!(snap.projectiles.len(), 1);
    let shots = snap
        .events
        .iter()
        .filter(|e| matches!(e, SimEvent::ShotFired { .. }))
        .count();
    assert_eq!(shots, 1);
}

#[test]
fn test_projectile_dropped_past_range() {
    let mut engine = started(quiet_lane());
    engine.queue_command(PlayerCommand::Fire);
    engine.tick(DT);
    // Fired and advanced once: 3 units travelled.
    for _ in 1..35 {
        engine.tick(DT);
    }
    assert_eq!(engine.projectiles().len(), 1);
    assert_relative_eq!(engine.projectiles()[0].travelled(), 105.0, epsilon = 1e-9);

    engine.tick(DT);
    assert!(engine.projectiles().is_empty());
    assert!(engine.presenter().is_empty());
}

// ---- Hits and scoring ----

#[test]
fn test_scout_scenario() {
    let mut engine = engine(quiet_lane());
    let ship = engine.spawn_ship_at(ArchetypeId::Scout, DVec3::new(0.0, 0.0, -50.0));
    engine.queue_commands([PlayerCommand::Start, PlayerCommand::Fire]);

    let mut hit: Option<(u64, GameStateSnapshot)> = None;
    for _ in 0..40 {
        let snap = engine.tick(DT);
        if snap
            .events
            .iter()
            .any(|e| matches!(e, SimEvent::ShipDestroyed { .. }))
        {
            hit = Some((snap.time.frame, snap));
            break;
        }
        // Until the hit, the pair is always at least one radius apart.
        assert_eq!(snap.ships.len(), 1);
        let gap = snap.ships[0].position.distance(snap.projectiles[0].position);
        assert!(gap >= 6.0, "missed hit at gap {gap}");
    }

    let (frame, snap) = hit.expect("projectile should reach the scout");
    // Projectile z = 5 - 3n, ship z = -50 + 0.05n; first n with gap < 6 is 17.
    assert_eq!(frame, 17);
    assert!(snap.ships.is_empty());
    assert!(snap.projectiles.is_empty());
    assert_eq!(snap.score, 10);
    assert_eq!(engine.presenter().score_log(), &[10]);

    assert_eq!(snap.explosions.len(), 1);
    assert_eq!(snap.explosions[0].particle_count, 52);
    let origin = snap.explosions[0].origin;
    assert_eq!(origin.x, 0.0);
    assert_eq!(origin.y, 0.0);
    assert_relative_eq!(origin.z, -50.0 + 17.0 * 0.05, epsilon = 1e-9);

    let explosion = &engine.explosions()[0];
    assert_eq!(explosion.count(ParticleRole::Flash), 1);
    assert_eq!(explosion.count(ParticleRole::Fragment), 50);
    assert_eq!(explosion.count(ParticleRole::Shockwave), 1);

    assert!(snap.events.contains(&SimEvent::ShipDestroyed {
        ship_id: ship,
        projectile_id: 0,
        archetype: ArchetypeId::Scout,
        points: 10,
        position: origin,
    }));
    assert!(snap.events.contains(&SimEvent::ScoreChanged { score: 10 }));
}

#[test]
fn test_explosion_expires_after_one_second() {
    let mut engine = engine(quiet_lane());
    engine.spawn_ship_at(ArchetypeId::Scout, DVec3::new(0.0, 0.0, -10.0));
    engine.queue_commands([PlayerCommand::Start, PlayerCommand::Fire]);

    let mut started_at = None;
    let mut finished_at = None;
    for _ in 0..200 {
        let snap = engine.tick(DT);
        for event in &snap.events {
            match event {
                SimEvent::ShipDestroyed { .. } => started_at = Some(snap.time.elapsed_secs),
                SimEvent::ExplosionFinished { .. } => finished_at = Some(snap.time.elapsed_secs),
                _ => {}
            }
        }
        if finished_at.is_some() {
            break;
        }
    }
    let lifetime = finished_at.unwrap() - started_at.unwrap();
    assert!((1.0 - 1e-9..1.0 + DT + 1e-9).contains(&lifetime), "lifetime {lifetime}");
    assert!(engine.explosions().is_empty());
    assert!(engine.presenter().is_empty());
}

#[test]
fn test_score_log_tracks_every_hit() {
    let mut engine = engine(quiet_lane());
    for (archetype, z) in [
        (ArchetypeId::Scout, -20.0),
        (ArchetypeId::Fighter, -40.0),
        (ArchetypeId::Carrier, -60.0),
    ] {
        engine.spawn_ship_at(archetype, DVec3::new(0.0, 0.0, z));
    }
    engine.queue_command(PlayerCommand::Start);

    let mut totals = Vec::new();
    let mut points = 0u64;
    for _ in 0..240 {
        engine.queue_command(PlayerCommand::Fire);
        let snap = engine.tick(DT);
        for event in &snap.events {
            match event {
                SimEvent::ScoreChanged { score } => totals.push(*score),
                SimEvent::ShipDestroyed { points: p, .. } => points += u64::from(*p),
                _ => {}
            }
        }
    }

    assert_eq!(engine.score().ships_destroyed, 3);
    assert_eq!(engine.score().score, 60);
    assert_eq!(points, 60);
    assert_eq!(engine.presenter().score_log(), totals.as_slice());
    // Strictly increasing, one notification per hit.
    assert_eq!(totals.len(), 3);
    assert!(totals.windows(2).all(|w| w[0] < w[1]));
}

// ---- Lifecycle ----

#[test]
fn test_ship_escapes_without_scoring() {
    let mut engine = engine(quiet_lane());
    let id = engine.spawn_ship_at(ArchetypeId::Scout, DVec3::new(0.0, 0.0, -0.02));
    engine.queue_command(PlayerCommand::Start);
    let snap = engine.tick(DT);

    assert!(snap.ships.is_empty());
    assert_eq!(snap.score, 0);
    assert!(snap.events.contains(&SimEvent::ShipEscaped {
        ship_id: id,
        archetype: ArchetypeId::Scout,
    }));
    assert_eq!(engine.score().ships_escaped, 1);
    assert!(engine.presenter().is_empty());
}

#[test]
fn test_fixed_population_holds_under_fire() {
    let mut engine = engine(SimConfig::open_arena());
    engine.queue_command(PlayerCommand::Start);

    for frame in 0..900 {
        engine.queue_command(PlayerCommand::Fire);
        if frame % 60 == 0 {
            engine.queue_command(PlayerCommand::Aim {
                delta_yaw: 0.4,
                delta_pitch: 0.0,
            });
        }
        let snap = engine.tick(DT);
        assert_eq!(snap.ships.len(), 8, "frame {frame}");
    }
}

#[test]
fn test_renderables_match_live_entities() {
    let mut engine = engine(SimConfig {
        seed: 7,
        spawn_policy: SpawnPolicy::Stochastic { probability: 0.2 },
        ..SimConfig::depth_lane()
    });
    engine.queue_command(PlayerCommand::Start);

    for frame in 0..1500 {
        engine.queue_command(PlayerCommand::Fire);
        if frame % 45 == 0 {
            engine.queue_command(PlayerCommand::Aim {
                delta_yaw: if frame % 90 == 0 { 0.08 } else { -0.08 },
                delta_pitch: 0.0,
            });
        }
        engine.tick(DT);
        assert_eq!(engine.presenter().len(), live_renderables(&engine), "frame {frame}");
    }

    let scene = engine.presenter();
    assert_eq!(
        scene.count(|k| matches!(k, RenderKind::Ship(_))),
        engine.ships().len()
    );
    assert_eq!(
        scene.count(|k| k == RenderKind::Projectile),
        engine.projectiles().len()
    );
    for ship in engine.ships() {
        let transform = scene.transform(ship.handle).unwrap();
        assert_eq!(transform.position, ship.position);
        assert_eq!(transform.rotation, ship.rotation);
    }
}

#[test]
fn test_explosion_particles_fade_in_scene() {
    let mut engine = engine(quiet_lane());
    engine.spawn_ship_at(ArchetypeId::Scout, DVec3::new(0.0, 0.0, -10.0));
    engine.queue_commands([PlayerCommand::Start, PlayerCommand::Fire]);
    while engine.explosions().is_empty() {
        engine.tick(DT);
    }

    let flash = engine.explosions()[0].particles[0].handle;
    let ring = engine.explosions()[0].particles[51].handle;
    let mut last = f64::INFINITY;
    for _ in 0..30 {
        engine.tick(DT);
        let opacity = engine.presenter().opacity(flash).unwrap();
        assert!(opacity <= last);
        last = opacity;
    }
    let ring_scale = engine.presenter().transform(ring).unwrap().scale;
    assert!(ring_scale > 1.0 && ring_scale < 6.0);
}

// ---- Pattern clock ----

#[test]
fn test_wall_clock_scales_ship_motion() {
    let config = SimConfig {
        pattern_clock: PatternClock::WallClock,
        ..quiet_lane()
    };
    let mut engine = engine(config);
    engine.spawn_ship_at(ArchetypeId::Scout, DVec3::new(0.0, 0.0, -50.0));
    engine.queue_command(PlayerCommand::Start);
    engine.tick(1.0 / 30.0);
    assert_relative_eq!(engine.ships()[0].position.z, -49.9, epsilon = 1e-9);
    assert_relative_eq!(engine.ships()[0].pattern.time, 0.02, epsilon = 1e-9);
}

#[test]
fn test_per_frame_clock_ignores_delta() {
    let mut engine = engine(quiet_lane());
    engine.spawn_ship_at(ArchetypeId::Scout, DVec3::new(0.0, 0.0, -50.0));
    engine.queue_command(PlayerCommand::Start);
    engine.tick(0.5);
    assert_relative_eq!(engine.ships()[0].position.z, -49.95, epsilon = 1e-9);
}
