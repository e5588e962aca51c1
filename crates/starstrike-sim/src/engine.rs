//! Simulation engine: the frame loop of the game.
//!
//! `SimulationEngine` owns the live ship, projectile and explosion
//! collections, processes player commands, runs all systems in a fixed
//! order, and produces `GameStateSnapshot`s. Completely headless: all
//! drawing goes through the `Presenter` it is constructed with, enabling
//! deterministic testing.

use std::collections::VecDeque;

use glam::DVec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starstrike_core::commands::PlayerCommand;
use starstrike_core::components::{Explosion, PatternState, Player, Projectile, Ship};
use starstrike_core::enums::{ArchetypeId, GamePhase, MovementPattern};
use starstrike_core::events::SimEvent;
use starstrike_core::state::GameStateSnapshot;
use starstrike_core::types::SimTime;

use crate::archetypes::get_archetype;
use crate::config::SimConfig;
use crate::presenter::Presenter;
use crate::score::ScoreState;
use crate::systems;
use crate::systems::collision::HitEvent;
use crate::systems::fire_control::{FireControl, Launcher};

/// The simulation engine. Owns every live entity and all sim state.
pub struct SimulationEngine<P: Presenter> {
    config: SimConfig,
    presenter: P,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    player: Player,
    fire_control: FireControl,
    fire_requested: bool,

    ships: Vec<Ship>,
    projectiles: Vec<Projectile>,
    explosions: Vec<Explosion>,
    next_ship_id: u64,
    next_projectile_id: u64,
    next_explosion_id: u64,

    events: Vec<SimEvent>,
    score: ScoreState,
}

impl<P: Presenter> SimulationEngine<P> {
    /// Create a new simulation engine with the given config and presenter.
    ///
    /// The config must pass [`SimConfig::validate`]; loaders already check it.
    /// Debug builds panic on an invalid config.
    pub fn new(config: SimConfig, presenter: P) -> Self {
        if let Err(e) = config.validate() {
            if cfg!(debug_assertions) {
                panic!("{e}");
            }
            log::error!("engine created with {e}");
        }
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            player: Player {
                position: config.player_start,
                ..Default::default()
            },
            config,
            presenter,
            time: SimTime::default(),
            phase: GamePhase::default(),
            command_queue: VecDeque::new(),
            fire_control: FireControl::default(),
            fire_requested: false,
            ships: Vec::new(),
            projectiles: Vec::new(),
            explosions: Vec::new(),
            next_ship_id: 0,
            next_projectile_id: 0,
            next_explosion_id: 0,
            events: Vec::new(),
            score: ScoreState::default(),
        }
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame lasting `dt` seconds and return the resulting snapshot.
    pub fn tick(&mut self, dt: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Running {
            self.time.advance(dt);
            self.run_systems();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.time,
            self.phase,
            &self.score,
            &self.player,
            &self.ships,
            &self.projectiles,
            &self.explosions,
            events,
        )
    }

    /// Place a ship of the given archetype at an exact position with pattern time 0
    /// and no tumble. Bouncing ships head along +X.
    pub fn spawn_ship_at(&mut self, archetype: ArchetypeId, position: DVec3) -> u64 {
        let heading = match get_archetype(archetype).pattern {
            MovementPattern::Bounce => DVec3::X,
            _ => DVec3::ZERO,
        };
        let pattern = PatternState {
            time: 0.0,
            origin: position,
            heading,
        };
        let id = systems::spawner::insert_ship(
            &mut self.ships,
            &mut self.next_ship_id,
            &mut self.presenter,
            archetype,
            position,
            pattern,
            DVec3::ZERO,
        );
        self.events.push(SimEvent::ShipSpawned {
            ship_id: id,
            archetype,
        });
        id
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Only `Start` is observed while Idle.
    fn handle_command(&mut self, command: PlayerCommand) {
        if self.phase == GamePhase::Idle {
            if command == PlayerCommand::Start {
                self.phase = GamePhase::Running;
                self.time = SimTime::default();
                log::debug!("simulation started (seed {})", self.config.seed);
            }
            return;
        }

        match command {
            PlayerCommand::Start => {}
            PlayerCommand::Fire => {
                self.fire_requested = true;
            }
            PlayerCommand::Move { direction, pressed } => {
                self.player.movement.set(direction, pressed);
            }
            PlayerCommand::Aim {
                delta_yaw,
                delta_pitch,
            } => {
                self.player.aim.turn(delta_yaw, delta_pitch);
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let now = self.time.now();
        let scale = self.config.pattern_clock.frame_scale(self.time.delta_secs);

        // 1. Player movement
        systems::movement::apply_player_input(&mut self.player, self.config.player_step, scale);
        // 2. Fire control
        if std::mem::take(&mut self.fire_requested) {
            systems::fire_control::try_fire(
                &mut self.fire_control,
                Launcher {
                    cooldown_secs: self.config.fire_cooldown_secs,
                    speed: self.config.projectile_speed,
                },
                &self.player,
                now,
                &mut self.projectiles,
                &mut self.next_projectile_id,
                &mut self.presenter,
                &mut self.events,
                &mut self.score,
            );
        }
        // 3. Projectile and ship motion
        systems::movement::advance_projectiles(&mut self.projectiles, scale);
        let escaped = systems::movement::advance_ships(
            &mut self.ships,
            &self.config.arena,
            scale,
            &mut self.presenter,
            &mut self.events,
        );
        self.score.ships_escaped += escaped as u32;
        // 4. Collision, scoring, explosion creation
        let hits = systems::collision::resolve(
            &mut self.projectiles,
            &mut self.ships,
            &mut self.presenter,
        );
        for hit in hits {
            self.apply_hit(hit, now);
        }
        // 5. Out-of-range projectiles
        systems::cleanup::run(
            &mut self.projectiles,
            self.config.projectile_range,
            &mut self.presenter,
        );
        // 6. Explosion animation and teardown
        systems::explosion::run(
            &mut self.explosions,
            now,
            scale,
            self.config.explosion.shockwave_growth,
            &mut self.presenter,
            &mut self.events,
        );
        // 7. Spawn policy
        systems::spawner::run(
            &mut self.ships,
            &mut self.next_ship_id,
            &mut self.rng,
            &self.config,
            &mut self.presenter,
            &mut self.events,
        );
        // 8. Hand final transforms to the presenter
        systems::present::run(
            &self.ships,
            &self.projectiles,
            &self.explosions,
            &mut self.presenter,
        );
    }

    /// Score a confirmed hit and create its explosion.
    fn apply_hit(&mut self, hit: HitEvent, now: f64) {
        let score = self.score.award(hit.points);
        log::debug!(
            "{} #{} destroyed by projectile #{} (+{}, score {score})",
            hit.archetype,
            hit.ship_id,
            hit.projectile_id,
            hit.points
        );
        self.presenter.score_changed(score);
        self.events.push(SimEvent::ShipDestroyed {
            ship_id: hit.ship_id,
            projectile_id: hit.projectile_id,
            archetype: hit.archetype,
            points: hit.points,
            position: hit.position,
        });
        self.events.push(SimEvent::ScoreChanged { score });

        systems::explosion::spawn(
            &mut self.explosions,
            &mut self.next_explosion_id,
            hit.position,
            hit.color,
            now,
            &self.config.explosion,
            &mut self.rng,
            &mut self.presenter,
        );
    }
}
