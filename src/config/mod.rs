use crate::errors::{AppError, AppResult};
use crate::store::inventory::DEFAULT_TIMESTAMP_FORMAT;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const LEDGER_FILE_NAME: &str = "usuarios.csv";
pub const INVENTORY_FILE_NAME: &str = "estoque.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_ledger_file")]
    pub ledger_file: String,
    #[serde(default = "default_inventory_file")]
    pub inventory_file: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_charge")]
    pub default_charge: f64,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_ledger_file() -> String {
    Config::config_dir()
        .join(LEDGER_FILE_NAME)
        .to_string_lossy()
        .to_string()
}
fn default_inventory_file() -> String {
    Config::config_dir()
        .join(INVENTORY_FILE_NAME)
        .to_string_lossy()
        .to_string()
}
fn default_currency() -> String {
    "R$".to_string()
}
fn default_charge() -> f64 {
    5.0
}
fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger_file: default_ledger_file(),
            inventory_file: default_inventory_file(),
            currency: default_currency(),
            default_charge: default_charge(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("watercooler")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".watercooler")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("watercooler.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> AppResult<()> {
        if !self.default_charge.is_finite() || self.default_charge <= 0.0 {
            return Err(AppError::Config(format!(
                "default_charge must be greater than zero, got {}",
                self.default_charge
            )));
        }
        if self.timestamp_format.trim().is_empty() {
            return Err(AppError::Config("timestamp_format cannot be empty".into()));
        }
        Ok(())
    }

    pub fn ledger_path(&self) -> PathBuf {
        expand_tilde(&self.ledger_file)
    }

    pub fn inventory_path(&self) -> PathBuf {
        expand_tilde(&self.inventory_file)
    }

    /// Create the config directory and, unless `is_test`, write the config
    /// file. Table paths given on the command line are recorded in it.
    pub fn init_all(
        ledger: Option<String>,
        inventory: Option<String>,
        is_test: bool,
    ) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let resolve = |custom: Option<String>, fallback: String| match custom {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() {
                    p.to_string_lossy().to_string()
                } else {
                    dir.join(p).to_string_lossy().to_string()
                }
            }
            None => fallback,
        };

        let config = Config {
            ledger_file: resolve(ledger, default_ledger_file()),
            inventory_file: resolve(inventory, default_inventory_file()),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            fs::write(Self::config_file(), yaml)?;
            success(format!("Config file: {}", Self::config_file().display()));
        }

        Ok(config)
    }
}
