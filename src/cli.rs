//! Command-line argument handling.

use std::io;
use std::path::PathBuf;

pub const USAGE: &str = "\
Flappy - Terminal Flappy Bird

Usage: flappy [options]

Options:
  --seed N         Seed the pipe generator for a repeatable run
  --config FILE    Load tunables from a JSON file
  --version        Show version information
  --help           Show this help message

Controls:
  Space / Up / W   Flap
  S                Restart after a crash
  Q / Esc          Quit

Set RUST_LOG (e.g. RUST_LOG=debug) to write a log file to the temp directory.";

/// Options for a game session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayOptions {
    /// RNG seed (None = from entropy)
    pub seed: Option<u64>,
    /// JSON config file (None = built-in defaults)
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(PlayOptions),
    Help,
    Version,
}

/// Parse arguments, excluding the program name.
pub fn parse_args(args: &[String]) -> io::Result<Command> {
    let mut options = PlayOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-v" => return Ok(Command::Version),
            "--seed" => {
                let value = iter.next().ok_or_else(|| missing_value("--seed"))?;
                let seed = value.parse().map_err(|_| {
                    io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("--seed requires a number, got '{}'", value),
                    )
                })?;
                options.seed = Some(seed);
            }
            "--config" => {
                let value = iter.next().ok_or_else(|| missing_value("--config"))?;
                options.config_path = Some(PathBuf::from(value));
            }
            other => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Unknown argument: {}", other),
                ));
            }
        }
    }

    Ok(Command::Play(options))
}

fn missing_value(flag: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("{} requires a value", flag),
    )
}
