//! Runtime tunables for a game.
//!
//! Defaults come from [`crate::core::constants`]. A JSON file may override any
//! subset of fields; missing fields keep their default.

use super::constants::*;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FlappyConfig {
    pub screen_width: f64,
    pub screen_height: f64,
    pub bird_size: f64,
    pub gravity: f64,
    pub flap_strength: f64,
    pub start_velocity: f64,
    pub pipe_width: f64,
    /// Height of the passable opening in every pipe.
    pub pipe_gap: f64,
    /// Horizontal pitch between consecutive pipes.
    pub pipe_spacing: f64,
    pub pipe_speed: f64,
    /// Lowest possible `gap_top`.
    pub min_gap_top: f64,
    /// `gap_top` is drawn from `min_gap_top + [0, gap_top_range)`.
    pub gap_top_range: u32,
    pub tick_interval_ms: u64,
}

impl Default for FlappyConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            bird_size: BIRD_SIZE,
            gravity: GRAVITY,
            flap_strength: FLAP_STRENGTH,
            start_velocity: START_VELOCITY,
            pipe_width: PIPE_WIDTH,
            pipe_gap: PIPE_GAP,
            pipe_spacing: PIPE_SPACING,
            pipe_speed: PIPE_SPEED,
            min_gap_top: MIN_GAP_TOP,
            gap_top_range: GAP_TOP_RANGE,
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

impl FlappyConfig {
    /// Fixed horizontal position of the bird's left edge.
    pub fn bird_x(&self) -> f64 {
        self.screen_width / 4.0
    }

    /// Vertical position the bird starts (and restarts) at.
    pub fn start_y(&self) -> f64 {
        self.screen_height / 2.0
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Parse a config from JSON and validate it.
    pub fn from_json(json: &str) -> io::Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> io::Result<()> {
        if self.screen_width <= 0.0 || self.screen_height <= 0.0 {
            return invalid("screen dimensions must be positive");
        }
        if self.bird_size <= 0.0 || self.bird_size >= self.screen_height {
            return invalid("bird_size must be positive and smaller than the screen");
        }
        if self.pipe_width <= 0.0 || self.pipe_gap <= 0.0 {
            return invalid("pipe_width and pipe_gap must be positive");
        }
        if self.pipe_spacing <= 0.0 || self.pipe_speed <= 0.0 {
            return invalid("pipe_spacing and pipe_speed must be positive");
        }
        if self.gap_top_range == 0 {
            return invalid("gap_top_range must be at least 1");
        }
        if self.tick_interval_ms == 0 {
            return invalid("tick_interval_ms must be at least 1");
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> io::Result<()> {
    Err(io::Error::new(io::ErrorKind::InvalidData, msg.to_string()))
}
