use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::bedca::DEFAULT_BASE_URL;

/// Source of a configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Default,
    File,
    Environment,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Environment => write!(f, "environment"),
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    fn from_default(value: T) -> Self {
        Self::new(value, ConfigSource::Default)
    }
}

/// Application configuration with source tracking
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// BEDCA query endpoint
    pub base_url: ConfigValue<String>,
    /// Request body template for the alphabetical food index
    pub list_template: ConfigValue<PathBuf>,
    /// Request body template for a single food's nutrition detail
    pub detail_template: ConfigValue<PathBuf>,
    /// JSON output file
    pub json_output: ConfigValue<PathBuf>,
    /// Delimited text output file
    pub csv_output: ConfigValue<PathBuf>,
    /// Column delimiter for the delimited text output
    pub delimiter: ConfigValue<char>,
    /// Config file path used (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
}

/// Internal struct for deserializing config file
#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    base_url: Option<String>,
    list_template: Option<PathBuf>,
    detail_template: Option<PathBuf>,
    json_output: Option<PathBuf>,
    csv_output: Option<PathBuf>,
    delimiter: Option<char>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: ConfigValue::from_default(DEFAULT_BASE_URL.to_string()),
            list_template: ConfigValue::from_default(PathBuf::from("request-templates/list.xml")),
            detail_template: ConfigValue::from_default(PathBuf::from("request-templates/detail.xml")),
            json_output: ConfigValue::from_default(PathBuf::from("data/data.json")),
            csv_output: ConfigValue::from_default(PathBuf::from("data/data.csv")),
            delimiter: ConfigValue::from_default(';'),
            config_file: None,
        }
    }
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            config.apply_file(&path)?;
        }

        config.apply_env()?;
        Ok(config)
    }

    fn apply_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;
        let file_config: ConfigFile = serde_yaml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))?;

        self.config_file = Some(path.to_path_buf());

        // Relative paths are resolved against the config file's directory
        let resolve = |p: PathBuf| {
            let resolved = if p.is_relative() {
                path.parent().map(|dir| dir.join(&p)).unwrap_or(p)
            } else {
                p
            };
            ConfigValue::new(resolved, ConfigSource::File)
        };

        if let Some(url) = file_config.base_url {
            self.base_url = ConfigValue::new(url, ConfigSource::File);
        }
        if let Some(p) = file_config.list_template {
            self.list_template = resolve(p);
        }
        if let Some(p) = file_config.detail_template {
            self.detail_template = resolve(p);
        }
        if let Some(p) = file_config.json_output {
            self.json_output = resolve(p);
        }
        if let Some(p) = file_config.csv_output {
            self.csv_output = resolve(p);
        }
        if let Some(d) = file_config.delimiter {
            self.delimiter = ConfigValue::new(d, ConfigSource::File);
        }

        Ok(())
    }

    fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(url) = std::env::var("BEDCA_BASE_URL") {
            self.base_url = ConfigValue::new(url, ConfigSource::Environment);
        }
        if let Ok(p) = std::env::var("BEDCA_LIST_TEMPLATE") {
            self.list_template = ConfigValue::new(PathBuf::from(p), ConfigSource::Environment);
        }
        if let Ok(p) = std::env::var("BEDCA_DETAIL_TEMPLATE") {
            self.detail_template = ConfigValue::new(PathBuf::from(p), ConfigSource::Environment);
        }
        if let Ok(p) = std::env::var("BEDCA_JSON_OUTPUT") {
            self.json_output = ConfigValue::new(PathBuf::from(p), ConfigSource::Environment);
        }
        if let Ok(p) = std::env::var("BEDCA_CSV_OUTPUT") {
            self.csv_output = ConfigValue::new(PathBuf::from(p), ConfigSource::Environment);
        }
        if let Ok(d) = std::env::var("BEDCA_DELIMITER") {
            let delimiter = parse_delimiter(&d).ok_or_else(|| {
                ConfigError::InvalidValue("BEDCA_DELIMITER".to_string(), d.clone())
            })?;
            self.delimiter = ConfigValue::new(delimiter, ConfigSource::Environment);
        }

        Ok(())
    }

    /// Default config directory (platform-specific):
    /// - Linux: ~/.config/bedca-collector/
    /// - macOS: ~/Library/Application Support/bedca-collector/
    /// - Windows: %APPDATA%/bedca-collector/
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bedca-collector")
    }

    /// Default config file path (platform-specific config dir + config.yaml)
    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join("config.yaml")
    }
}

/// A delimiter must be exactly one character.
fn parse_delimiter(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {}", .0.display(), .1)]
    ReadError(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse config file '{}': {}", .0.display(), .1)]
    ParseError(PathBuf, #[source] serde_yaml::Error),

    #[error("Invalid value for {0}: '{1}'")]
    InvalidValue(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nonexistent.yaml");

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.base_url.value, DEFAULT_BASE_URL);
        assert_eq!(config.base_url.source, ConfigSource::Default);
        assert_eq!(
            config.list_template.value,
            PathBuf::from("request-templates/list.xml")
        );
        assert_eq!(config.delimiter.value, ';');
        assert_eq!(config.delimiter.source, ConfigSource::Default);
        assert_eq!(config.config_file, None);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "base_url: http://localhost:9000/procquery.php").unwrap();
        writeln!(file, "json_output: /custom/out/foods.json").unwrap();
        writeln!(file, "delimiter: ','").unwrap();

        let config = Config::load(Some(config_path.clone())).unwrap();
        assert_eq!(config.base_url.value, "http://localhost:9000/procquery.php");
        assert_eq!(config.base_url.source, ConfigSource::File);
        assert_eq!(
            config.json_output.value,
            PathBuf::from("/custom/out/foods.json")
        );
        assert_eq!(config.json_output.source, ConfigSource::File);
        assert_eq!(config.delimiter.value, ',');
        assert_eq!(config.delimiter.source, ConfigSource::File);
        assert_eq!(config.config_file, Some(config_path));
    }

    #[test]
    fn test_relative_paths_resolve_against_config_dir() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "list_template: templates/list.xml").unwrap();

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(
            config.list_template.value,
            temp_dir.path().join("templates/list.xml")
        );
    }

    #[test]
    fn test_partial_file_config() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "csv_output: out.csv").unwrap();

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.csv_output.source, ConfigSource::File);
        assert_eq!(config.json_output.source, ConfigSource::Default);
        assert_eq!(config.base_url.source, ConfigSource::Default);
    }

    #[test]
    #[ignore] // Run with --ignored; env vars can pollute parallel tests
    fn test_env_var_overrides_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "delimiter: ','").unwrap();

        std::env::set_var("BEDCA_DELIMITER", "|");

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.delimiter.value, '|');
        assert_eq!(config.delimiter.source, ConfigSource::Environment);

        std::env::remove_var("BEDCA_DELIMITER");
    }

    #[test]
    fn test_invalid_yaml_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "invalid: yaml: content: [").unwrap();

        let result = Config::load(Some(config_path));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_unknown_key_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "output_dir: /tmp").unwrap();

        let err = Config::load(Some(config_path)).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_, _)));
    }

    #[test]
    fn test_multi_char_delimiter_in_file_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "delimiter: ';;'").unwrap();

        assert!(Config::load(Some(config_path)).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::InvalidValue("BEDCA_DELIMITER".to_string(), ";;".to_string());
        assert_eq!(err.to_string(), "Invalid value for BEDCA_DELIMITER: ';;'");

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ConfigError::ReadError(PathBuf::from("/etc/bedca.yaml"), io);
        assert_eq!(
            err.to_string(),
            "Failed to read config file '/etc/bedca.yaml': denied"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(";"), Some(';'));
        assert_eq!(parse_delimiter("\t"), Some('\t'));
        assert_eq!(parse_delimiter(""), None);
        assert_eq!(parse_delimiter(";;"), None);
    }
}
