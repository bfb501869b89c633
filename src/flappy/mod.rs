//! Flappy Bird simulation core.
//!
//! A bird falls under constant gravity and the player flaps to hold it in the
//! air while three pipes scroll in from the right. Every pipe that leaves the
//! screen is recycled behind the furthest one and scores a point. Touching a
//! pipe or leaving the screen vertically ends the game until a restart.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
