//! Locating and reading `releaser.toml`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Config, ConfigError, ConfigResult};

/// Name of the file searched for in the repository and its parents.
const CONFIG_FILE_NAME: &str = "releaser.toml";

/// Reads, parses and validates the file at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] when `path` does not exist, and a parse
/// or validation error when its content is not a usable configuration.
fn load_config(path: impl AsRef<Path>) -> ConfigResult<Config> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    debug!(path = %path.display(), "reading configuration");
    let config: Config = toml::from_str(&std::fs::read_to_string(path)?)?;
    config.validate()?;
    Ok(config)
}

/// Returns the nearest `releaser.toml` in `start_dir` or one of its parents.
fn locate(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Loads the nearest `releaser.toml` walking up from `start_dir`, or the
/// defaults when no ancestor holds one.
///
/// # Errors
///
/// Returns an error only when a file exists and is not a usable configuration.
pub fn load_or_default(start_dir: impl AsRef<Path>) -> ConfigResult<Config> {
    let start_dir = start_dir.as_ref();
    let Some(path) = locate(start_dir) else {
        debug!(dir = %start_dir.display(), "no {CONFIG_FILE_NAME} found, using defaults");
        return Ok(Config::default());
    };
    load_config(path)
}
