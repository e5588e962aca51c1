//! Presentation collaborator.
//!
//! The simulation never draws anything itself. It asks a `Presenter` for
//! renderable handles, pushes transforms and opacity through them, and
//! reports score changes. `HeadlessScene` is an in-memory presenter backed
//! by a hecs world, used by tests and the terminal driver.

use hecs::{Entity, World};

use starstrike_core::enums::RenderKind;
use starstrike_core::types::{RenderHandle, RenderStyle, Transform};

/// Everything the simulation needs from the rendering/UI layer.
pub trait Presenter {
    /// Create a displayable proxy for a new entity.
    fn create_renderable(&mut self, kind: RenderKind, style: &RenderStyle) -> RenderHandle;

    /// Irrevocably release a renderable. The handle is never used again.
    fn remove_renderable(&mut self, handle: RenderHandle);

    /// Per-frame transform push.
    fn set_transform(&mut self, handle: RenderHandle, transform: &Transform);

    /// Opacity push (explosion particles).
    fn set_opacity(&mut self, handle: RenderHandle, opacity: f64);

    /// Fired once per score increment with the new total.
    fn score_changed(&mut self, score: u64);
}

/// What a renderable is and how it was requested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderable {
    pub kind: RenderKind,
    pub style: RenderStyle,
}

/// Current opacity of a renderable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opacity(pub f64);

/// In-memory scene graph: one hecs entity per renderable.
#[derive(Default)]
pub struct HeadlessScene {
    world: World,
    score_log: Vec<u64>,
}

impl HeadlessScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a handle to a live entity.
    fn entity(&self, handle: RenderHandle) -> Option<Entity> {
        Entity::from_bits(handle.0).filter(|entity| self.world.contains(*entity))
    }

    /// Resolve a handle, flagging stale handles in debug builds.
    fn live_entity(&self, handle: RenderHandle) -> Option<Entity> {
        let entity = self.entity(handle);
        debug_assert!(entity.is_some(), "unknown renderable {handle:?}");
        entity
    }

    /// Number of live renderables.
    pub fn len(&self) -> usize {
        self.world.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.world.len() == 0
    }

    /// Whether the handle refers to a live renderable.
    pub fn contains(&self, handle: RenderHandle) -> bool {
        self.entity(handle).is_some()
    }

    /// Number of live renderables matching `filter`.
    pub fn count(&self, filter: impl Fn(RenderKind) -> bool) -> usize {
        self.world
            .query::<&Renderable>()
            .iter()
            .filter(|(_, renderable)| filter(renderable.kind))
            .count()
    }

    pub fn renderable(&self, handle: RenderHandle) -> Option<Renderable> {
        let entity = self.entity(handle)?;
        self.world.get::<&Renderable>(entity).ok().map(|r| *r)
    }

    pub fn transform(&self, handle: RenderHandle) -> Option<Transform> {
        let entity = self.entity(handle)?;
        self.world.get::<&Transform>(entity).ok().map(|t| *t)
    }

    pub fn opacity(&self, handle: RenderHandle) -> Option<f64> {
        let entity = self.entity(handle)?;
        self.world.get::<&Opacity>(entity).ok().map(|o| o.0)
    }

    /// Every score notification received, oldest first.
    pub fn score_log(&self) -> &[u64] {
        &self.score_log
    }
}

impl Presenter for HeadlessScene {
    fn create_renderable(&mut self, kind: RenderKind, style: &RenderStyle) -> RenderHandle {
        let entity = self.world.spawn((
            Renderable {
                kind,
                style: *style,
            },
            Transform::default(),
            Opacity(style.opacity),
        ));
        RenderHandle(entity.to_bits().get())
    }

    fn remove_renderable(&mut self, handle: RenderHandle) {
        if let Some(entity) = self.live_entity(handle) {
            let _ = self.world.despawn(entity);
        }
    }

    fn set_transform(&mut self, handle: RenderHandle, transform: &Transform) {
        if let Some(entity) = self.live_entity(handle) {
            if let Ok(mut current) = self.world.get::<&mut Transform>(entity) {
                *current = *transform;
            }
        }
    }

    fn set_opacity(&mut self, handle: RenderHandle, opacity: f64) {
        if let Some(entity) = self.live_entity(handle) {
            if let Ok(mut current) = self.world.get::<&mut Opacity>(entity) {
                current.0 = opacity;
            }
        }
    }

    fn score_changed(&mut self, score: u64) {
        self.score_log.push(score);
    }
}
