//! Configuration loading and typed config structures.
//!
//! The server reads `cointoss-config.yaml` when it exists and falls back to
//! defaults otherwise. Environment variables override the listen address
//! and the CORS allow-list so a hosting platform can inject them.

use std::path::Path;

use serde::Deserialize;

/// Hard upper bound on `game.max_tosses`. Every simulated toss is kept in
/// the player's history and echoed in the response.
pub const MAX_TOSSES_LIMIT: u32 = 10_000_000;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is not usable.
    #[error("invalid config value: {0}")]
    Invalid(String),
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    /// Listen address and CORS policy.
    #[serde(default)]
    pub server: ServerSettings,

    /// Game limits and coin seeding.
    #[serde(default)]
    pub game: GameSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GameConfig {
    /// Load configuration from a YAML file at the given path, then apply
    /// environment overrides and validate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, then apply environment
    /// overrides and validate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.server.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with environment overrides applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if an override is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.server.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the server cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid(String::from("server.port must be non-zero")));
        }
        if self.game.max_tosses == 0 {
            return Err(ConfigError::Invalid(String::from(
                "game.max_tosses must be positive",
            )));
        }
        if self.game.max_tosses > MAX_TOSSES_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "game.max_tosses must be at most {MAX_TOSSES_LIMIT}, got {}",
                self.game.max_tosses
            )));
        }
        Ok(())
    }
}

/// Listen address and CORS policy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed to call the API from a browser.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl ServerSettings {
    /// Apply environment variable overrides.
    ///
    /// - `HOST` overrides `server.host`
    /// - `PORT` overrides `server.port`
    /// - `ALLOWED_ORIGINS` (comma-separated) overrides `server.allowed_origins`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `PORT` is not a valid port number.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("HOST") {
            self.host = val;
        }
        if let Ok(val) = std::env::var("PORT") {
            self.port = val
                .parse()
                .map_err(|e| ConfigError::Invalid(format!("invalid PORT {val:?}: {e}")))?;
        }
        if let Ok(val) = std::env::var("ALLOWED_ORIGINS") {
            self.allowed_origins = parse_origin_list(&val);
        }
        Ok(())
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
        }
    }
}

/// Game limits and coin seeding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameSettings {
    /// Largest `num_tosses` a single simulation request may ask for.
    #[serde(default = "default_max_tosses")]
    pub max_tosses: u32,

    /// Seed for the coin. `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            max_tosses: default_max_tosses(),
            seed: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_owned)
        .collect()
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    8000
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        String::from("https://ct-frontend-production.up.railway.app"),
        String::from("http://localhost:5173"),
    ]
}

const fn default_max_tosses() -> u32 {
    100_000
}

fn default_log_level() -> String {
    String::from("info")
}
