//! Flappy Bird data structures.

use crate::core::{FlappyConfig, PIPE_COUNT};
use rand::Rng;
use std::time::Duration;

/// Lifecycle phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// Axis-aligned box in world pixels. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Half-open overlap on the horizontal axis only.
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.right() > other.x && self.x < other.right()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.overlaps_horizontally(other) && self.bottom() > other.y && self.y < other.bottom()
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// The player's bird. Its horizontal position is fixed by the config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    /// Top edge in pixels.
    pub y: f64,
    /// Pixels per tick, positive = downward.
    pub velocity: f64,
}

/// A pipe pair: solid above `gap_top` and below `gap_top + pipe_gap`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    /// Leading (left) edge in pixels.
    pub x: f64,
    /// Top of the passable gap in pixels.
    pub gap_top: f64,
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    pub config: FlappyConfig,
    pub phase: Phase,
    /// Pipes that have scrolled off screen and been recycled.
    pub score: u32,
    pub bird: Bird,
    /// Always three pipes, in spawn order (not necessarily sorted by `x`).
    pub pipes: [Pipe; PIPE_COUNT],

    // Timing
    /// Wall time not yet consumed by a whole tick.
    pub accumulated: Duration,
    /// Ticks simulated since the last (re)start.
    pub tick_count: u64,
}

impl FlappyGame {
    /// Create a new game in the `Playing` phase.
    pub fn new<R: Rng>(config: FlappyConfig, rng: &mut R) -> Self {
        let bird = Bird {
            y: config.start_y(),
            velocity: config.start_velocity,
        };
        let pipes = initial_pipes(&config, rng);
        Self {
            config,
            phase: Phase::Playing,
            score: 0,
            bird,
            pipes,
            accumulated: Duration::ZERO,
            tick_count: 0,
        }
    }

    /// Put everything back to the starting layout with fresh gaps.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.phase = Phase::Playing;
        self.score = 0;
        self.bird = Bird {
            y: self.config.start_y(),
            velocity: self.config.start_velocity,
        };
        self.pipes = initial_pipes(&self.config, rng);
        self.accumulated = Duration::ZERO;
        self.tick_count = 0;
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn bird_rect(&self) -> Rect {
        Rect::new(
            self.config.bird_x(),
            self.bird.y,
            self.config.bird_size,
            self.config.bird_size,
        )
    }

    /// Solid top and bottom rectangles of a pipe.
    pub fn pipe_rects(&self, pipe: &Pipe) -> (Rect, Rect) {
        let width = self.config.pipe_width;
        let gap_bottom = pipe.gap_top + self.config.pipe_gap;
        let top = Rect::new(pipe.x, 0.0, width, pipe.gap_top);
        let bottom = Rect::new(
            pipe.x,
            gap_bottom,
            width,
            (self.config.screen_height - gap_bottom).max(0.0),
        );
        (top, bottom)
    }

    /// Largest `x` among the pipes, i.e. the one furthest to the right.
    pub fn furthest_pipe_x(&self) -> f64 {
        self.pipes
            .iter()
            .map(|p| p.x)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Draw a gap top uniformly from `min_gap_top + [0, gap_top_range)` whole pixels.
pub fn random_gap_top<R: Rng>(config: &FlappyConfig, rng: &mut R) -> f64 {
    if config.gap_top_range == 0 {
        return config.min_gap_top;
    }
    config.min_gap_top + rng.gen_range(0..config.gap_top_range) as f64
}

/// Three pipes starting at the right screen edge, one pitch apart.
fn initial_pipes<R: Rng>(config: &FlappyConfig, rng: &mut R) -> [Pipe; PIPE_COUNT] {
    std::array::from_fn(|i| Pipe {
        x: config.screen_width + i as f64 * config.pipe_spacing,
        gap_top: random_gap_top(config, rng),
    })
}
