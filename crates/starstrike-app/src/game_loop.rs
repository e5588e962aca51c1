//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside this thread so it never crosses threads.
//! Commands arrive via `mpsc` channel. The latest snapshot is stored in
//! shared state for `main` to inspect.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use starstrike_core::constants::{REFERENCE_DT, REFERENCE_FRAME_RATE};
use starstrike_core::enums::RenderKind;
use starstrike_core::state::GameStateSnapshot;
use starstrike_core::types::{RenderHandle, RenderStyle, Transform};
use starstrike_sim::{HeadlessScene, Presenter, SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one frame.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / REFERENCE_FRAME_RATE as u64);

/// Longest frame delta handed to the engine. Longer stalls are dropped, not replayed.
const MAX_FRAME_DT: f64 = 3.0 * REFERENCE_DT;

/// Frames between periodic status lines.
const STATUS_INTERVAL: u64 = 600;

/// Headless scene that also reports score changes to the log.
#[derive(Default)]
pub struct TerminalScene {
    scene: HeadlessScene,
}

impl TerminalScene {
    pub fn scene(&self) -> &HeadlessScene {
        &self.scene
    }
}

impl Presenter for TerminalScene {
    fn create_renderable(&mut self, kind: RenderKind, style: &RenderStyle) -> RenderHandle {
        self.scene.create_renderable(kind, style)
    }

    fn remove_renderable(&mut self, handle: RenderHandle) {
        self.scene.remove_renderable(handle);
    }

    fn set_transform(&mut self, handle: RenderHandle, transform: &Transform) {
        self.scene.set_transform(handle, transform);
    }

    fn set_opacity(&mut self, handle: RenderHandle, opacity: f64) {
        self.scene.set_opacity(handle, opacity);
    }

    fn score_changed(&mut self, score: u64) {
        log::info!("score: {score}");
        self.scene.score_changed(score);
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the input reader and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("starstrike-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config, TerminalScene::default());
    let mut next_frame_time = Instant::now();
    let mut last_frame: Option<Instant> = None;

    loop {
        // 1. Drain all pending commands
        if !drain_commands(&cmd_rx, &mut engine) {
            break;
        }

        // 2. Advance one frame by the measured wall-clock delta
        let now = Instant::now();
        let dt = frame_delta(last_frame, now);
        last_frame = Some(now);
        let snapshot = engine.tick(dt);

        if snapshot.time.frame > 0 && snapshot.time.frame % STATUS_INTERVAL == 0 {
            log::debug!(
                "frame {}: {} ships, {} projectiles, {} explosions, {} renderables",
                snapshot.time.frame,
                snapshot.ships.len(),
                snapshot.projectiles.len(),
                snapshot.explosions.len(),
                engine.presenter().scene().len()
            );
        }

        // 3. Store latest snapshot
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind: reset to avoid catch-up spiral
            next_frame_time = now;
        }
    }

    let score = engine.score();
    log::info!(
        "game loop stopped after {} frames: score {}, {} destroyed, {} escaped, {} shots",
        engine.time().frame,
        score.score,
        score.ships_destroyed,
        score.ships_escaped,
        score.shots_fired
    );
}

/// Wall-clock time since the previous frame, capped at `MAX_FRAME_DT`.
fn frame_delta(last_frame: Option<Instant>, now: Instant) -> f64 {
    last_frame
        .map_or(REFERENCE_DT, |last| (now - last).as_secs_f64())
        .min(MAX_FRAME_DT)
}

/// Queue every pending player command. Returns false when the loop should stop.
fn drain_commands<P: Presenter>(
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    engine: &mut SimulationEngine<P>,
) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}
