//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Default location of the mod configuration, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/config.json";

#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Mod configuration used when `--config` is not given.
    pub config_path: PathBuf,
    /// Write logs to a file in addition to stderr.
    pub log_to_file: bool,
    /// Log file directory (default: platform cache directory).
    pub log_dir: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            log_to_file: false,
            log_dir: None,
        }
    }
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `STAMINA_CONFIG_PATH` - Mod configuration file (default: `config/config.json`)
    /// - `STAMINA_LOG_TO_FILE` - Also log to a file (default: false)
    /// - `STAMINA_LOG_DIR` - Directory for the log file (default: platform-specific)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var("STAMINA_CONFIG_PATH") {
            config.config_path = PathBuf::from(path);
        }

        if let Some(enable) = read_env::<bool>("STAMINA_LOG_TO_FILE") {
            config.log_to_file = enable;
        } else if env::var("STAMINA_LOG_TO_FILE").is_ok() {
            // Bare variable counts as enabled
            config.log_to_file = true;
        }

        config.log_dir = env::var("STAMINA_LOG_DIR").ok().map(PathBuf::from);

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
