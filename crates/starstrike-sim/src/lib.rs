//! Simulation engine for STARSTRIKE.
//!
//! Owns the live ship, projectile and explosion collections, runs the
//! systems once per frame, and produces GameStateSnapshots. Rendering is
//! delegated to a `Presenter` collaborator.

pub mod archetypes;
pub mod config;
pub mod engine;
pub mod presenter;
pub mod score;
pub mod systems;

pub use config::SimConfig;
pub use engine::SimulationEngine;
pub use presenter::{HeadlessScene, Presenter};
pub use starstrike_core as core;

#[cfg(test)]
mod tests;
