//! Global estacion configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{EstacionError, EstacionResult};

static DEFAULT_DATA_PATH: &str = "~/.local/share/estacion";

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

/// Configuration at ~/.config/estacion/config.toml
///
/// Every key can be overridden from the environment with an `ESTACION_`
/// prefix (e.g. `ESTACION_DATA_DIR`).
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_data_path")]
    pub data_dir: PathBuf,

    /// tracing filter directive, e.g. "info" or "estacion_core=debug"
    #[serde(default)]
    pub log_level: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> EstacionResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EstacionError::Config("Could not determine config directory".into()))?
            .join("estacion");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file, creating a commented default on first run.
    pub fn load() -> EstacionResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> EstacionResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("ESTACION"))
            .build()
            .map_err(|e| EstacionError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EstacionError::Config(e.to_string()))
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EstacionResult<()> {
        let contents = format!(
            "\
# estacion configuration

# Where appointments, staff and settings are stored:
# data_dir = \"{}\"

# Log filter (overridden by ESTACION_LOG):
# log_level = \"info\"
",
            DEFAULT_DATA_PATH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EstacionError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EstacionError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
