// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 20;
pub const MAX_FRAME_DT_MS: u64 = 100; // longest frame fed to the accumulator after a stall

// World (pixels)
pub const SCREEN_WIDTH: f64 = 800.0;
pub const SCREEN_HEIGHT: f64 = 600.0;
pub const GROUND_HEIGHT: f64 = 50.0; // drawn only, never collided with

// Bird
pub const BIRD_SIZE: f64 = 20.0;
pub const GRAVITY: f64 = 1.0; // px/tick added to velocity every tick
pub const FLAP_STRENGTH: f64 = -10.0; // velocity override, negative = up
/// Velocity at launch and after every restart.
pub const START_VELOCITY: f64 = 0.0;

// Pipes
pub const PIPE_COUNT: usize = 3;
pub const PIPE_WIDTH: f64 = 100.0;
pub const PIPE_GAP: f64 = 150.0;
pub const PIPE_SPACING: f64 = 300.0;
pub const PIPE_SPEED: f64 = 5.0;
pub const MIN_GAP_TOP: f64 = 50.0;
pub const GAP_TOP_RANGE: u32 = 300; // SCREEN_HEIGHT / 2

// Logging
pub const LOG_FILE_NAME: &str = "flappy.log";
