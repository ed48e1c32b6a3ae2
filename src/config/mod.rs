pub mod types;

use crate::error::{ConfigError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".fluidctl.toml";

/// Get the global config file path (~/.fluidctl.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (./.fluidctl.toml)
pub fn local_config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Load configuration from file or use defaults.
///
/// An explicit file must exist and parse. Otherwise the local config is
/// checked first, then the global config; unreadable or malformed implicit
/// files are skipped.
pub fn load_config(explicit: Option<&Path>) -> Result<types::Config> {
    if let Some(path) = explicit {
        return Ok(read_config(path)?);
    }

    let candidates = std::iter::once(local_config_path()).chain(global_config_path());
    for path in candidates {
        if !path.exists() {
            continue;
        }
        match read_config(&path) {
            Ok(config) => {
                log::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
            Err(e) => log::warn!("Ignoring config: {}", e),
        }
    }

    Ok(types::Config::default())
}

fn read_config(path: &Path) -> std::result::Result<types::Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::ParsingFailed {
        path: path.to_path_buf(),
        source,
    })
}
