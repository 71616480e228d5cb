use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub model: ModelSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Model artifact location settings
///
/// `path`, when set, is tried before the candidate list. The list replaces
/// the old habit of hardcoding environment-specific paths in code.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelSettings {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default = "default_candidate_paths")]
    pub candidate_paths: Vec<String>,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            path: None,
            candidate_paths: default_candidate_paths(),
        }
    }
}

fn default_candidate_paths() -> Vec<String> {
    vec![
        "best_linear_regression_model.json".to_string(),
        "./models/best_linear_regression_model.json".to_string(),
    ]
}

impl ModelSettings {
    /// Ordered list of artifact locations to try; first existing file wins.
    pub fn resolve_candidates(&self) -> Vec<PathBuf> {
        self.path
            .iter()
            .chain(self.candidate_paths.iter())
            .map(PathBuf::from)
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingSettings {
    /// Effective (level, format) pair. The `LOG_LEVEL`/`LOG_FORMAT` env vars
    /// override the configured values, mirroring the `MODEL_PATH` override.
    pub fn effective(&self) -> (String, String) {
        let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| self.level.clone());
        let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| self.format.clone());
        (level, format)
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with CSAT_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with CSAT_)
            // e.g., CSAT_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("CSAT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = apply_env_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("CSAT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply well-known environment variable overrides
///
/// `MODEL_PATH` is checked first, then `CSAT_MODEL__PATH`; either pins the
/// artifact location ahead of the candidate list.
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let model_path = env::var("MODEL_PATH")
        .or_else(|_| env::var("CSAT_MODEL__PATH"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(path) = model_path {
        builder = builder.set_override("model.path", path)?;
    }

    builder.build()
}
