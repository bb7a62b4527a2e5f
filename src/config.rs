//! Demo configuration.
//!
//! Every field has a default that reproduces the stock demo output, so
//! running without a config file is the common case. Files may be TOML or
//! JSON; environment variables are layered on top by [`PatternsConfig::apply_env`].

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PatternError, Result};
use crate::strategy::SAMPLE_DATA;

pub const ENV_TOY_FACTORY: &str = "TOY_FACTORY";
pub const ENV_LOG: &str = "PATTERNS_LOG";
pub const ENV_CONFIG: &str = "PATTERNS_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PatternsConfig {
    pub console: ConsoleConfig,
    pub logging: LoggingConfig,
    pub strategy: StrategyConfig,
    pub factory: FactoryConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub color: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    pub data: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    pub creator: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            data: SAMPLE_DATA.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            creator: "simba-smoby".to_string(),
        }
    }
}

impl PatternsConfig {
    /// Loads the config at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads from `explicit`, else from `PATTERNS_CONFIG`, else defaults, then
    /// applies environment overrides.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var_os(ENV_CONFIG).map(PathBuf::from);
        let path = explicit.or(from_env.as_deref());
        Ok(Self::load(path)?.apply_env())
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| PatternError::io(path, err))?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let config = match format.as_deref() {
            Some("json") => Self::from_json_str(&content)?,
            Some("toml") => Self::from_toml_str(&content)?,
            _ => {
                if content.trim_start().starts_with('{') {
                    Self::from_json_str(&content)?
                } else {
                    Self::from_toml_str(&content)?
                }
            }
        };

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn apply_env(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Layers overrides from `lookup` (normally the process environment).
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(creator) = lookup(ENV_TOY_FACTORY).filter(|v| !v.trim().is_empty()) {
            self.factory.creator = creator.trim().to_string();
        }
        if let Some(level) = lookup(ENV_LOG).filter(|v| !v.trim().is_empty()) {
            self.logging.level = level.trim().to_string();
        }
        if lookup("NO_COLOR").is_some() {
            self.console.color = false;
        }
        self
    }
}
