//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/stdio-demos/stdio-demos.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `STDIO_DEMOS_*` prefix, `__` as section separator

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::game::{DEFAULT_MAX, DEFAULT_MIN};
use crate::domain::GuessRange;

const APP_NAME: &str = "stdio-demos";
const ENV_PREFIX: &str = "STDIO_DEMOS";

/// Guessing game settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GuessConfig {
    /// Smallest possible target (inclusive)
    pub min: i64,
    /// Largest possible target (inclusive)
    pub max: i64,
}

impl Default for GuessConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

/// Unified configuration for the demo programs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub guess: GuessConfig,
}

/// Get the XDG config directory.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join(format!("{APP_NAME}.toml")))
}

impl Settings {
    /// Load defaults, global config and environment overrides.
    pub fn load() -> ApplicationResult<Self> {
        Self::load_from(None)
    }

    /// Load like [`Settings::load`], with an additional explicit config file
    /// layered between the global config and the environment.
    ///
    /// An explicit file that does not exist is an error; a missing global file is not.
    pub fn load_from(explicit: Option<&Path>) -> ApplicationResult<Self> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("guess.min", defaults.guess.min)
            .map_err(config_err)?
            .set_default("guess.max", defaults.guess.max)
            .map_err(config_err)?;

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load_from: global config {}", global_path.display());
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        if let Some(path) = explicit {
            debug!("load_from: explicit config {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        let settings: Self = config.try_deserialize().map_err(config_err)?;
        debug!("load_from: {:?}", settings);
        Ok(settings)
    }

    /// Validated target range for the guessing game.
    pub fn guess_range(&self) -> ApplicationResult<GuessRange> {
        GuessRange::new(self.guess.min, self.guess.max).map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# stdio-demos configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/stdio-demos/stdio-demos.toml
#   Explicit: guessing-game --config <FILE>
#   Env:      STDIO_DEMOS_GUESS__MIN, STDIO_DEMOS_GUESS__MAX

[guess]
# Smallest possible secret number (inclusive)
# min = 1

# Largest possible secret number (inclusive)
# max = 100
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_when_guess_range_then_one_to_hundred() {
        let range = Settings::default().guess_range().expect("default range");
        assert_eq!((range.min(), range.max()), (1, 100));
    }

    #[test]
    fn given_inverted_range_when_guess_range_then_config_error() {
        let settings = Settings {
            guess: GuessConfig { min: 5, max: 4 },
        };
        let err = settings.guess_range().unwrap_err();
        assert!(matches!(err, ApplicationError::Config { .. }));
        assert!(err.to_string().contains("min 5 is greater than max 4"));
    }

    #[test]
    fn given_settings_when_to_toml_then_contains_guess_section() {
        let toml = Settings::default().to_toml().expect("serialize");
        assert!(toml.contains("[guess]"));
        assert!(toml.contains("min = 1"));
        assert!(toml.contains("max = 100"));
    }

    #[test]
    fn given_template_when_parsed_then_yields_defaults() {
        let parsed: Settings = toml::from_str(&Settings::template()).expect("parse template");
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn given_global_config_path_when_resolved_then_named_after_app() {
        if let Some(path) = global_config_path() {
            assert!(path.ends_with("stdio-demos.toml"));
        }
    }
}
