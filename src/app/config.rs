use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete configuration (loaded from fileman.toml or settings.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// The managed data file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
    /// Lines written when the data file has to be created
    #[serde(default = "default_seed")]
    pub seed: Vec<String>,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data.csv")
}

fn default_seed() -> Vec<String> {
    vec!["1,2,3".to_string(), "4".to_string()]
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
            seed: default_seed(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_directory")]
    pub directory: PathBuf,
    #[serde(default = "default_log_file_name")]
    pub file_name: String,
    /// Minimum level printed to stderr
    #[serde(default = "default_console_level")]
    pub console_level: String,
    /// Minimum level appended to the log file
    #[serde(default = "default_file_level")]
    pub file_level: String,
    /// Write JSON records to the log file instead of plain text
    #[serde(default)]
    pub json: bool,
}

fn default_log_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_log_file_name() -> String {
    "log.txt".to_string()
}

fn default_console_level() -> String {
    "info".to_string()
}

fn default_file_level() -> String {
    "error".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: default_log_directory(),
            file_name: default_log_file_name(),
            console_level: default_console_level(),
            file_level: default_file_level(),
            json: false,
        }
    }
}

impl Config {
    /// Load configuration from the first config file found, or defaults
    ///
    /// Runs before the logger is installed.
    pub fn load() -> anyhow::Result<Self> {
        match crate::util::paths::find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific TOML file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))
    }

    /// Seed lines as file content, one newline-terminated row each
    pub fn seed_content(&self) -> String {
        self.data
            .seed
            .iter()
            .map(|line| format!("{}\n", line))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.data.path, PathBuf::from("data.csv"));
        assert_eq!(config.logging.file_name, "log.txt");
        assert_eq!(config.logging.console_level, "info");
        assert_eq!(config.logging.file_level, "error");
        assert!(!config.logging.json);
        assert_eq!(config.seed_content(), "1,2,3\n4\n");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [data]
            path = "numbers.csv"

            [logging]
            json = true
            "#,
        )
        .unwrap();

        assert_eq!(config.data.path, PathBuf::from("numbers.csv"));
        assert_eq!(config.data.seed, vec!["1,2,3", "4"]);
        assert!(config.logging.json);
        assert_eq!(config.logging.file_level, "error");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.data.path, PathBuf::from("data.csv"));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fileman.toml");
        fs::write(&path, "[data]\nseed = [\"5\"]\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.seed_content(), "5\n");
    }

    #[test]
    fn test_load_from_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fileman.toml");
        fs::write(&path, "[data\npath = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Config::load_from(Path::new("/nonexistent/fileman.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
