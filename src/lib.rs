//! Flappy - terminal Flappy Bird library
//!
//! Exposes the simulation core for testing and for the `flappy` binary.

pub mod build_info;
pub mod cli;
pub mod core;
pub mod flappy;
pub mod input;
pub mod logging;

pub use crate::core::{FlappyConfig, TICK_INTERVAL_MS};
pub use crate::flappy::{FlappyGame, FlappyInput, Phase};
