use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StageclassError};
use crate::stage::Stage;

const CONFIG_FILE: &str = "config.toml";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# stageclass configuration file
# Location: ~/.stageclass/config.toml

[output]
# Result format: "text" or "json"
format = "text"

# Colorize text output
color = true

[pipeline]
# Last stage to run: "shape", "categorize" or "confirm"
through = "confirm"
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_color(),
        }
    }
}

/// Pipeline-related configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PipelineConfig {
    #[serde(default = "default_through")]
    pub through: Stage,
}

fn default_through() -> Stage {
    Stage::Confirm
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            through: default_through(),
        }
    }
}

/// How results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = StageclassError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(StageclassError::UnknownFormat {
                name: s.to_string(),
            }),
        }
    }
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| StageclassError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "output.format" => Some(self.output.format.to_string()),
            "output.color" => Some(self.output.color.to_string()),
            "pipeline.through" => Some(self.pipeline.through.to_string()),
            _ => None,
        }
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = || StageclassError::InvalidConfigValue {
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "output.format" => {
                self.output.format = value.parse().map_err(|_| invalid())?;
            }
            "output.color" => {
                self.output.color = parse_bool(value).ok_or_else(invalid)?;
            }
            "pipeline.through" => {
                self.pipeline.through = value.parse().map_err(|_| invalid())?;
            }
            _ => {
                return Err(StageclassError::ConfigKeyNotFound {
                    key: key.to_string(),
                })
            }
        }
        Ok(())
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        ["output.format", "output.color", "pipeline.through"]
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
            .collect()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.pipeline.through, Stage::Confirm);
        assert!(config.output.color);
    }

    #[test]
    fn test_init_template_parses_as_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = Config::init(dir.path()).unwrap();
        assert_eq!(path, Config::path(dir.path()));

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_init_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(Config::path(dir.path()), "[output]\nformat = \"json\"\n").unwrap();
        Config::init(dir.path()).unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.set("pipeline.through", "categorize").unwrap();
        config.set("output.color", "off").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.pipeline.through, Stage::Categorize);
        assert!(!loaded.output.color);
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(Config::path(dir.path()), "[pipeline]\nthrough = \"final\"\n").unwrap();
        assert!(matches!(
            Config::load(dir.path()),
            Err(StageclassError::ConfigParse { .. })
        ));
    }

    #[test]
    fn test_config_get_set() {
        let mut config = Config::default();

        config.set("output.format", "JSON").unwrap();
        assert_eq!(config.get("output.format").as_deref(), Some("json"));

        assert!(matches!(
            config.set("output.format", "yaml"),
            Err(StageclassError::InvalidConfigValue { .. })
        ));
        assert!(matches!(
            config.set("output.width", "80"),
            Err(StageclassError::ConfigKeyNotFound { .. })
        ));
        assert_eq!(config.get("output.width"), None);
    }

    #[test]
    fn test_list() {
        let keys: Vec<_> = Config::default().list().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["output.format", "output.color", "pipeline.through"]);
    }
}
