use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StageclassError {
    #[error("Invalid JSON in {source_name} (line {line}): {message}")]
    JsonParse {
        source_name: String,
        line: usize,
        message: String,
    },

    #[error("Unknown stage: '{name}' - expected one of shape, categorize, confirm")]
    UnknownStage { name: String },

    #[error("Unknown output format: '{name}' - expected text or json")]
    UnknownFormat { name: String },

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Config key not found: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidConfigValue { key: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, StageclassError>;

impl StageclassError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::JsonParse { .. } | Self::Json(_) => 2,
            Self::UnknownStage { .. } | Self::UnknownFormat { .. } => 3,
            Self::ConfigParse { .. } | Self::TomlSer(_) => 4,
            Self::ConfigKeyNotFound { .. } | Self::InvalidConfigValue { .. } => 5,
            Self::Io(_) => 1,
        }
    }
}
