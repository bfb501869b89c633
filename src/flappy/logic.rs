//! Game logic for Flappy Bird: fixed-step physics, pipe recycling, collisions
//! and the play / game-over / restart lifecycle.

use super::types::{random_gap_top, FlappyGame, Phase};
use crate::core::MAX_FRAME_DT_MS;
use log::{debug, info};
use rand::Rng;
use std::time::Duration;

/// Input actions for Flappy Bird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyInput {
    /// Flap (Space, Up or W).
    Flap,
    /// Start over after a crash (S).
    Restart,
    /// Leave the game (Q or Esc).
    Quit,
    /// Any other key.
    Other,
}

/// Process player input. Returns `true` when the player asked to quit.
pub fn process_input<R: Rng>(game: &mut FlappyGame, input: FlappyInput, rng: &mut R) -> bool {
    match input {
        FlappyInput::Flap => apply_impulse(game),
        FlappyInput::Restart => restart(game, rng),
        FlappyInput::Quit => return true,
        FlappyInput::Other => {}
    }
    false
}

/// Flap: overwrite the bird's velocity with the flap strength.
pub fn apply_impulse(game: &mut FlappyGame) {
    if game.phase != Phase::Playing {
        return;
    }
    game.bird.velocity = game.config.flap_strength;
}

/// Reset to the starting layout. Only allowed after a crash.
pub fn restart<R: Rng>(game: &mut FlappyGame, rng: &mut R) {
    if game.phase != Phase::GameOver {
        return;
    }
    info!("Restarting after final score {}", game.score);
    game.reset(rng);
}

/// Feed elapsed wall time into the game, running one fixed step per whole
/// tick interval. Leftover time carries to the next call. Returns the number
/// of steps run. Frames longer than `MAX_FRAME_DT_MS` are clamped.
pub fn advance<R: Rng>(game: &mut FlappyGame, dt: Duration, rng: &mut R) -> u32 {
    if game.phase != Phase::Playing {
        return 0;
    }

    // Clamp dt so a pause or lag spike can't run dozens of ticks in one frame
    let dt = dt.min(Duration::from_millis(MAX_FRAME_DT_MS));
    let step = game.config.tick_interval().max(Duration::from_millis(1));
    game.accumulated += dt;

    let mut steps = 0;
    while game.accumulated >= step {
        game.accumulated -= step;
        tick(game, rng);
        steps += 1;

        if game.phase == Phase::GameOver {
            game.accumulated = Duration::ZERO;
            break;
        }
    }
    steps
}

/// Run exactly one fixed simulation step.
pub fn tick<R: Rng>(game: &mut FlappyGame, rng: &mut R) {
    if game.phase != Phase::Playing {
        return;
    }
    game.tick_count += 1;

    // Gravity
    game.bird.velocity += game.config.gravity;
    game.bird.y += game.bird.velocity;

    // Scroll pipes left
    for pipe in &mut game.pipes {
        pipe.x -= game.config.pipe_speed;
    }

    recycle_pipes(game, rng);

    if check_collisions(game) {
        game.phase = Phase::GameOver;
        info!(
            "Game over at tick {} with score {}",
            game.tick_count, game.score
        );
    }
}

/// Move every pipe whose trailing edge left the screen to one pitch behind the
/// furthest pipe, with a fresh gap, scoring a point for each.
///
/// Pipes are visited in spawn order and each one sees the positions left by
/// the pipes recycled before it in the same step.
fn recycle_pipes<R: Rng>(game: &mut FlappyGame, rng: &mut R) {
    for i in 0..game.pipes.len() {
        if game.pipes[i].x + game.config.pipe_width >= 0.0 {
            continue;
        }

        let new_x = game.furthest_pipe_x() + game.config.pipe_spacing;
        let gap_top = random_gap_top(&game.config, rng);
        let pipe = &mut game.pipes[i];
        pipe.x = new_x;
        pipe.gap_top = gap_top;
        game.score += 1;

        debug!(
            "Recycled pipe {} to x={} gap_top={} (score {})",
            i, new_x, gap_top, game.score
        );
    }
}

/// True if the bird has left the screen vertically or is touching a pipe.
pub fn check_collisions(game: &FlappyGame) -> bool {
    let bird = game.bird_rect();

    if bird.y < 0.0 || bird.bottom() > game.config.screen_height {
        return true;
    }

    game.pipes.iter().any(|pipe| {
        let (top, _) = game.pipe_rects(pipe);
        if !bird.overlaps_horizontally(&top) {
            return false;
        }
        let gap_bottom = pipe.gap_top + game.config.pipe_gap;
        bird.y < pipe.gap_top || bird.bottom() > gap_bottom
    })
}
