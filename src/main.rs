mod ui;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy_term::build_info;
use flappy_term::cli::{self, Command, PlayOptions, USAGE};
use flappy_term::flappy::{advance, process_input, FlappyGame};
use flappy_term::input::map_key;
use flappy_term::{logging, FlappyConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let options = match cli::parse_args(&args) {
        Ok(Command::Play(options)) => options,
        Ok(Command::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Ok(Command::Version) => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'flappy --help' for usage.");
            std::process::exit(1);
        }
    };

    if let Some(path) = logging::init()? {
        eprintln!("Logging to {}", path.display());
    }

    let config = match &options.config_path {
        Some(path) => FlappyConfig::load(path)?,
        None => FlappyConfig::default(),
    };
    let mut rng = seeded_rng(&options);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, config, &mut rng);

    // Restore terminal even if the game loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn seeded_rng(options: &PlayOptions) -> ChaCha8Rng {
    match options.seed {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Draw, wait for input until the next tick is due, then advance the clock.
fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: FlappyConfig,
    rng: &mut ChaCha8Rng,
) -> io::Result<()> {
    let mut game = FlappyGame::new(config, rng);
    let tick_interval = game.config.tick_interval();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            ui::flappy_scene::render_flappy(frame, area, &game);
        })?;

        let timeout = tick_interval
            .saturating_sub(last_tick.elapsed())
            .max(Duration::from_millis(1));
        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                if process_input(&mut game, map_key(key_event), rng) {
                    break;
                }
            }
        }

        let now = Instant::now();
        advance(&mut game, now - last_tick, rng);
        last_tick = now;
    }

    log::info!("Quit with score {}", game.score);
    Ok(())
}
