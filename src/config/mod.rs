use crate::core::source::{DEFAULT_API_URL, DEFAULT_PAGE_LIMIT};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_page_limit")]
    pub page_limit: usize,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    /// Seed for the synthetic department/performance data; random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}
fn default_page_limit() -> usize {
    DEFAULT_PAGE_LIMIT
}
fn default_timeout() -> u64 {
    15
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            api_url: default_api_url(),
            page_limit: default_page_limit(),
            request_timeout_secs: default_timeout(),
            seed: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("hrdash")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".hrdash")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("hrdash.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("hrdash.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content).map_err(|e| {
                AppError::Config(format!("cannot parse {}: {e}", path.display()))
            })
        } else {
            Ok(Self::default())
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Initialize configuration and database location.
    /// Returns the configuration that was (or, in test mode, would have been) written.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => {
                let p = PathBuf::from(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Self::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
