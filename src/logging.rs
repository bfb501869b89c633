//! Log setup. The terminal belongs to the game screen, so log records go to a
//! file in the temp directory instead of stderr.

use crate::core::LOG_FILE_NAME;
use std::fs::File;
use std::io;
use std::path::PathBuf;

/// Start file logging when `RUST_LOG` is set. Returns the log file path.
pub fn init() -> io::Result<Option<PathBuf>> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(None);
    }

    let path = std::env::temp_dir().join(LOG_FILE_NAME);
    let file = File::create(&path)?;

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    log::info!("Logging to {}", path.display());
    Ok(Some(path))
}
