use std::fs::File;
use std::path::Path;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

use crate::error::GameError;

/// Initializes the global logger, writing to `log_file`.
///
/// The terminal belongs to the game while it runs, so without a log file no
/// logger is installed at all.  When `verbose` is `true`, debug messages are
/// included; otherwise only info level and above.
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<(), GameError> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path).map_err(|source| GameError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);
    builder.target(Target::Pipe(Box::new(file)));

    // `try_init` only fails if a logger was already set; keep the first one.
    let _ = builder.try_init();
    Ok(())
}
