use crate::adapters::storage::FileStore;
use crate::core::ledger::{WinnerLedger, WINNERS_KEY};
use crate::core::selector::{ShuffleStrategy, DEFAULT_WINNER_COUNT};
use crate::core::session::DrawSettings;
use crate::core::ConfigProvider;
use crate::utils::error::{RaffleError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaffleConfig {
    pub raffle: DrawConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawConfig {
    pub winner_count: usize,
    pub strategy: ShuffleStrategy,
    pub seed: Option<u64>,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            winner_count: DEFAULT_WINNER_COUNT,
            strategy: ShuffleStrategy::default(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub enabled: bool,
    pub path: String,
    pub winners_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "./raffle-data".to_string(),
            winners_key: WINNERS_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub json: bool,
}

impl RaffleConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RaffleError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string, after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RaffleError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RaffleError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// File-backed winner history, or `None` when storage is turned off.
    pub fn winner_ledger(&self) -> Option<WinnerLedger<FileStore>> {
        self.storage.enabled.then(|| {
            WinnerLedger::with_key(FileStore::new(&self.storage.path), &self.storage.winners_key)
        })
    }

    pub fn draw_settings(&self) -> DrawSettings {
        DrawSettings {
            winner_count: self.raffle.winner_count,
            strategy: self.raffle.strategy,
        }
    }
}

impl ConfigProvider for RaffleConfig {
    fn winner_count(&self) -> usize {
        self.raffle.winner_count
    }

    fn strategy(&self) -> ShuffleStrategy {
        self.raffle.strategy
    }

    fn seed(&self) -> Option<u64> {
        self.raffle.seed
    }

    fn storage_enabled(&self) -> bool {
        self.storage.enabled
    }

    fn storage_path(&self) -> &str {
        &self.storage.path
    }

    fn winners_key(&self) -> &str {
        &self.storage.winners_key
    }
}

impl Validate for RaffleConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_positive_number("raffle.winner_count", self.raffle.winner_count, 1)?;

        if self.storage.enabled {
            if self.storage.path.trim().is_empty() {
                return Err(RaffleError::MissingConfigError {
                    field: "storage.path".to_string(),
                });
            }
            validation::validate_path("storage.path", &self.storage.path)?;
            validation::validate_storage_key("storage.winners_key", &self.storage.winners_key)?;
        }

        Ok(())
    }
}
