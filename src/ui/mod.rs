//! Terminal rendering. Reads game state only; never mutates it.

pub mod flappy_scene;
pub mod game_common;
