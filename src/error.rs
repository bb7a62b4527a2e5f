use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown demo '{0}' (try `patterns list`)")]
    UnknownDemo(String),

    #[error("Unknown toy factory '{name}', expected one of: {expected}")]
    UnknownToyFactory { name: String, expected: String },
}

impl PatternError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn unknown_toy_factory(name: impl Into<String>, expected: &[&str]) -> Self {
        Self::UnknownToyFactory {
            name: name.into(),
            expected: expected.join(", "),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
