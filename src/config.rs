use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub paths: PathsConfig,
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Working state directory (logs, default profile location)
    pub state: String,
    /// Directory listing exports are written to
    pub exports: String,
    /// Stored user record; defaults to `<state>/user.json`
    #[serde(default)]
    pub profile: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll interval for the TUI loop
    pub tick_rate_ms: u64,
    /// Products shown per page on the My Products screen
    #[serde(default = "default_products_per_page")]
    pub products_per_page: usize,
    /// How long the simulated AI processing step runs
    #[serde(default = "default_processing_duration")]
    pub processing_duration_ms: u64,
}

fn default_products_per_page() -> usize {
    6
}

fn default_processing_duration() -> u64 {
    3000 // 3 seconds
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to log to file in TUI mode (false = stderr for debugging)
    #[serde(default = "default_log_to_file")]
    pub to_file: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_to_file() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            to_file: default_log_to_file(),
        }
    }
}

/// Display overrides for the artisan shown in the sidebar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Takes precedence over the name in the stored user record
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default = "default_specialty")]
    pub specialty: String,
}

fn default_specialty() -> String {
    "Pottery Artist".to_string()
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            display_name: None,
            specialty: default_specialty(),
        }
    }
}

impl Config {
    /// Path to the project-local config file
    pub fn local_config_path() -> PathBuf {
        PathBuf::from(".artisan/config.toml")
    }

    pub fn load(config_path: Option<&str>) -> Result<Self> {
        // Start with embedded defaults so the assistant works without config files
        let defaults = Config::default();
        let defaults_json =
            serde_json::to_string(&defaults).context("Failed to serialize default config")?;

        let mut builder = config::Config::builder().add_source(config::File::from_str(
            &defaults_json,
            config::FileFormat::Json,
        ));

        let local_config = Self::local_config_path();
        if local_config.exists() {
            builder = builder.add_source(config::File::from(local_config));
        }

        // User config in ~/.config/artisan/ (optional global overrides)
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("artisan").join("config.toml");
            if user_config.exists() {
                builder = builder.add_source(config::File::from(user_config));
            }
        }

        // Explicit config file (CLI override)
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("ARTISAN")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to load configuration")?;
        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Write this config to `config_path` unless a file is already there.
    ///
    /// Returns `false` when an existing file was left alone.
    pub fn init_file(&self, config_path: &std::path::Path, force: bool) -> Result<bool> {
        if config_path.exists() && !force {
            return Ok(false);
        }
        self.save_to(config_path)?;
        tracing::info!(path = %config_path.display(), "wrote config file");
        Ok(true)
    }

    pub fn save_to(&self, config_path: &std::path::Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let toml_str =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        std::fs::write(config_path, toml_str).context("Failed to write config file")?;

        Ok(())
    }

    /// Get absolute path to state directory
    pub fn state_path(&self) -> PathBuf {
        absolute(&self.paths.state)
    }

    /// Get absolute path to exports directory
    pub fn exports_path(&self) -> PathBuf {
        absolute(&self.paths.exports)
    }

    /// Get absolute path to logs directory
    pub fn logs_path(&self) -> PathBuf {
        self.state_path().join("logs")
    }

    /// Location of the stored user record
    pub fn profile_path(&self) -> PathBuf {
        match self.paths.profile {
            Some(ref p) => absolute(p),
            None => self.state_path().join("user.json"),
        }
    }
}

fn absolute(path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        std::env::current_dir().unwrap_or_default().join(path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathsConfig {
                state: ".artisan".to_string(),
                exports: ".artisan/exports".to_string(),
                profile: None,
            },
            ui: UiConfig {
                tick_rate_ms: 100,
                products_per_page: default_products_per_page(),
                processing_duration_ms: default_processing_duration(),
            },
            logging: LoggingConfig::default(),
            profile: ProfileConfig::default(),
        }
    }
}
