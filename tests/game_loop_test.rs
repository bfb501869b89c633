//! Integration test: Flappy Bird game loop
//!
//! Drives the simulation core through its public API the way the terminal
//! front end does: fixed ticks, flaps, crashes and restarts.

use flappy_term::flappy::{advance, apply_impulse, process_input, restart, tick, Pipe};
use flappy_term::{FlappyConfig, FlappyGame, FlappyInput, Phase, TICK_INTERVAL_MS};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(12345)
}

fn one_tick() -> Duration {
    Duration::from_millis(TICK_INTERVAL_MS)
}

/// Flap whenever the bird sinks below the middle of the next gap.
fn autopilot(game: &mut FlappyGame) {
    let bird = game.bird_rect();
    let next = game
        .pipes
        .iter()
        .filter(|p| p.x + game.config.pipe_width > bird.x)
        .min_by(|a, b| a.x.total_cmp(&b.x))
        .copied();
    let target = match next {
        Some(pipe) => pipe.gap_top + game.config.pipe_gap / 2.0,
        None => game.config.screen_height / 2.0,
    };
    if bird.y + bird.height / 2.0 > target + 10.0 && game.bird.velocity >= 0.0 {
        apply_impulse(game);
    }
}

/// Where the pipes should end up after one step, replaying the scroll and the
/// in-order recycling. Returns the positions and how many were recycled.
fn expected_pipe_xs(config: &FlappyConfig, before: &[Pipe]) -> (Vec<f64>, u32) {
    let mut xs: Vec<f64> = before.iter().map(|p| p.x - config.pipe_speed).collect();
    let mut recycled = 0;
    for i in 0..xs.len() {
        if xs[i] + config.pipe_width < 0.0 {
            let furthest = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            xs[i] = furthest + config.pipe_spacing;
            recycled += 1;
        }
    }
    (xs, recycled)
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_free_fall_hits_floor() {
    let mut rng = create_test_rng();
    let mut game = FlappyGame::new(FlappyConfig::default(), &mut rng);

    let mut ticks = 0;
    while game.phase == Phase::Playing && ticks < 1000 {
        tick(&mut game, &mut rng);
        ticks += 1;
    }

    // y = 300 + n(n+1)/2 passes 580 on tick 24
    assert_eq!(ticks, 24);
    assert_eq!(game.phase, Phase::GameOver);
    assert_eq!(game.score, 0);
}

#[test]
fn test_game_over_freezes_state() {
    let mut rng = create_test_rng();
    let mut game = FlappyGame::new(FlappyConfig::default(), &mut rng);
    while game.phase == Phase::Playing {
        tick(&mut game, &mut rng);
    }

    let bird = game.bird;
    let pipes = game.pipes;
    let ticks = game.tick_count;

    for _ in 0..10 {
        assert_eq!(advance(&mut game, one_tick() * 3, &mut rng), 0);
        apply_impulse(&mut game);
        process_input(&mut game, FlappyInput::Flap, &mut rng);
    }

    assert_eq!(game.bird, bird);
    assert_eq!(game.pipes, pipes);
    assert_eq!(game.tick_count, ticks);
    assert_eq!(game.phase, Phase::GameOver);
}

#[test]
fn test_restart_resets_to_initial_layout() {
    let mut rng = create_test_rng();
    let mut game = FlappyGame::new(FlappyConfig::default(), &mut rng);

    // Survive a while so the pipes have been recycled and score is non-zero
    for _ in 0..5000 {
        if game.phase == Phase::GameOver {
            break;
        }
        autopilot(&mut game);
        advance(&mut game, one_tick(), &mut rng);
    }
    game.phase = Phase::GameOver;

    restart(&mut game, &mut rng);

    assert_eq!(game.phase, Phase::Playing);
    assert_eq!(game.score, 0);
    assert_eq!(game.bird.y, game.config.start_y());
    assert_eq!(game.bird.velocity, game.config.start_velocity);
    let xs: Vec<f64> = game.pipes.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![800.0, 1100.0, 1400.0]);
    for pipe in &game.pipes {
        assert!(pipe.gap_top >= 50.0 && pipe.gap_top < 350.0);
    }
}

#[test]
fn test_restart_key_only_works_after_crash() {
    let mut rng = create_test_rng();
    let mut game = FlappyGame::new(FlappyConfig::default(), &mut rng);
    for _ in 0..5 {
        tick(&mut game, &mut rng);
    }
    let y = game.bird.y;

    process_input(&mut game, FlappyInput::Restart, &mut rng);
    assert_eq!(game.bird.y, y);
    assert_eq!(game.tick_count, 5);

    game.bird.y = -1.0;
    game.bird.velocity = -1.0;
    tick(&mut game, &mut rng);
    assert_eq!(game.phase, Phase::GameOver);

    process_input(&mut game, FlappyInput::Restart, &mut rng);
    assert_eq!(game.phase, Phase::Playing);
    assert_eq!(game.tick_count, 0);
}

// =============================================================================
// Invariants over long runs
// =============================================================================

#[test]
fn test_recycling_invariant_over_long_run() {
    for seed in 0..5u64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut game = FlappyGame::new(FlappyConfig::default(), &mut rng);
        let mut total_recycled = 0;

        for _ in 0..3000 {
            if game.phase == Phase::GameOver {
                break;
            }
            autopilot(&mut game);

            let before = game.pipes;
            let score_before = game.score;
            let (expected, recycled) = expected_pipe_xs(&game.config, &before);

            tick(&mut game, &mut rng);

            let xs: Vec<f64> = game.pipes.iter().map(|p| p.x).collect();
            assert_eq!(xs, expected, "seed {}", seed);
            assert_eq!(game.score - score_before, recycled, "seed {}", seed);

            for (old, new) in before.iter().zip(game.pipes.iter()) {
                if new.x < old.x {
                    assert_eq!(new.gap_top, old.gap_top);
                } else {
                    assert!(new.gap_top >= 50.0 && new.gap_top < 350.0);
                }
            }
            total_recycled += recycled;
        }

        assert_eq!(game.score, total_recycled);
    }
}

#[test]
fn test_autopilot_scores_points() {
    let mut rng = create_test_rng();
    let mut game = FlappyGame::new(FlappyConfig::default(), &mut rng);

    // 2000 ticks scroll 10000px, far enough to recycle dozens of pipes
    for _ in 0..2000 {
        if game.phase == Phase::GameOver {
            break;
        }
        autopilot(&mut game);
        tick(&mut game, &mut rng);
    }

    assert_eq!(game.phase, Phase::Playing);
    assert_eq!(game.tick_count, 2000);
    assert!(game.score >= 30, "score {}", game.score);
}

#[test]
fn test_pipes_stay_one_pitch_apart_in_steady_state() {
    let mut rng = create_test_rng();
    let mut game = FlappyGame::new(FlappyConfig::default(), &mut rng);
    game.config.bird_size = 1.0;

    // Hold the bird still in open sky by cancelling gravity each tick
    for _ in 0..1000 {
        game.bird.velocity = -game.config.gravity;
        game.bird.y = game.config.start_y();
        for pipe in game.pipes.iter_mut() {
            pipe.gap_top = 250.0;
        }
        tick(&mut game, &mut rng);
        assert_eq!(game.phase, Phase::Playing);
    }

    let mut xs: Vec<f64> = game.pipes.iter().map(|p| p.x).collect();
    xs.sort_by(f64::total_cmp);
    assert_eq!(xs[1] - xs[0], game.config.pipe_spacing);
    assert_eq!(xs[2] - xs[1], game.config.pipe_spacing);
    assert!(game.score > 0);
}

// =============================================================================
// Timing
// =============================================================================

#[test]
fn test_uneven_frames_match_fixed_ticks() {
    let mut rng_a = create_test_rng();
    let mut rng_b = create_test_rng();
    let mut frames = FlappyGame::new(FlappyConfig::default(), &mut rng_a);
    let mut ticks = FlappyGame::new(FlappyConfig::default(), &mut rng_b);

    // 7 + 13 + 25 + 15 = 60ms = 3 ticks
    for ms in [7, 13, 25, 15] {
        advance(&mut frames, Duration::from_millis(ms), &mut rng_a);
    }
    for _ in 0..3 {
        tick(&mut ticks, &mut rng_b);
    }

    assert_eq!(frames.tick_count, 3);
    assert_eq!(frames.bird, ticks.bird);
    assert_eq!(frames.pipes, ticks.pipes);
    assert_eq!(frames.accumulated, Duration::ZERO);
}

#[test]
fn test_same_seed_same_run() {
    let run = |seed: u64| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut game = FlappyGame::new(FlappyConfig::default(), &mut rng);
        let mut gaps = Vec::new();
        for _ in 0..1500 {
            if game.phase == Phase::GameOver {
                break;
            }
            autopilot(&mut game);
            tick(&mut game, &mut rng);
            gaps.extend(game.pipes.iter().map(|p| p.gap_top));
        }
        (game.score, game.tick_count, gaps)
    };

    assert_eq!(run(99), run(99));
}
