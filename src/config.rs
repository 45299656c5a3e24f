use std::{fs, path::Path};

use rust_decimal::{Decimal, prelude::Zero};
use serde::Deserialize;
use thiserror::Error;

use crate::account::CheckingLimits;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file `{path}`: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Withdrawal limit must be greater than zero, got {0}")]
    InvalidLimits(Decimal),
}

/// Bank settings, every field falls back to its default when missing.
///
/// ```toml
/// [checking]
/// withdrawal_limit = 500
/// max_withdrawals = 3
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BankConfig {
    pub checking: CheckingLimits,
}

impl BankConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.checking.withdrawal_limit <= Decimal::zero() {
            return Err(ConfigError::InvalidLimits(self.checking.withdrawal_limit));
        }
        Ok(())
    }
}
