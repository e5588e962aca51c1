//! Systems that operate on the live collections each frame.
//!
//! Systems are free functions over explicit state; they own nothing.
//! Removal during a scan always walks indices in reverse so earlier
//! elements are never shifted or skipped.

pub mod cleanup;
pub mod collision;
pub mod explosion;
pub mod fire_control;
pub mod movement;
pub mod present;
pub mod snapshot;
pub mod spawner;
