//! STARSTRIKE terminal driver.
//!
//! Reads player commands from stdin, runs the simulation on a dedicated
//! game loop thread, and reports progress through the log.

pub mod game_loop;
pub mod input;
pub mod state;

pub use starstrike_core as core;
