use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Defaults point at a `resources/` directory next to the working directory
/// and use parentheses as the span delimiters.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    #[serde(default = "default_start_delimiter")]
    pub start_delimiter: char,
    #[serde(default = "default_end_delimiter")]
    pub end_delimiter: char,
}

fn default_input_path() -> PathBuf {
    PathBuf::from("resources/input.txt")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("resources/output.txt")
}

fn default_start_delimiter() -> char {
    '('
}

fn default_end_delimiter() -> char {
    ')'
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            start_delimiter: default_start_delimiter(),
            end_delimiter: default_end_delimiter(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        config.input_path = Self::expand_path(&config.input_path).unwrap_or(config.input_path);
        config.output_path = Self::expand_path(&config.output_path).unwrap_or(config.output_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/redline");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        // Should contain the expected config file name
        assert!(path_str.ends_with(".config/redline/config.toml"));
    }

    #[test]
    fn test_defaults_use_the_resources_layout() {
        let config = Config::default();
        assert_eq!(config.input_path, PathBuf::from("resources/input.txt"));
        assert_eq!(config.output_path, PathBuf::from("resources/output.txt"));
        assert_eq!(config.start_delimiter, '(');
        assert_eq!(config.end_delimiter, ')');
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            input_path: PathBuf::from("/tmp/in.txt"),
            output_path: PathBuf::from("/tmp/out.txt"),
            start_delimiter: '[',
            end_delimiter: ']',
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original.input_path, deserialized.input_path);
        assert_eq!(original.output_path, deserialized.output_path);
        assert_eq!(original.start_delimiter, deserialized.start_delimiter);
        assert_eq!(original.end_delimiter, deserialized.end_delimiter);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(r#"input_path = "/tmp/custom.txt""#).unwrap();
        assert_eq!(config.input_path, PathBuf::from("/tmp/custom.txt"));
        assert_eq!(config.output_path, PathBuf::from("resources/output.txt"));
        assert_eq!(config.start_delimiter, '(');
        assert_eq!(config.end_delimiter, ')');
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("REDLINE_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$REDLINE_TEST_VAR/subdir");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        assert_eq!(expanded.unwrap(), PathBuf::from("/test/env/path/subdir"));

        unsafe {
            env::remove_var("REDLINE_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        let test_config = Config {
            input_path: PathBuf::from("/tmp/in.txt"),
            output_path: PathBuf::from("/tmp/out.txt"),
            start_delimiter: '{',
            end_delimiter: '}',
        };

        // Test saving
        test_config.save_to_path(&config_file).unwrap();

        // Test loading
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config.input_path, test_config.input_path);
        assert_eq!(loaded_config.output_path, test_config.output_path);
        assert_eq!(loaded_config.start_delimiter, '{');
        assert_eq!(loaded_config.end_delimiter, '}');
    }

    #[test]
    fn test_config_with_tilde_in_toml() {
        let config_content = r#"
input_path = "~/notes/in.txt"
"#;

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, config_content).unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        let expanded_path = config.input_path.to_string_lossy();
        assert!(!expanded_path.starts_with('~'));
        assert!(expanded_path.contains("notes/in.txt"));
    }

    #[test]
    fn test_config_with_env_var_in_toml() {
        unsafe {
            env::set_var("REDLINE_TEXT_ROOT", "/custom/texts");
        }

        let config_content = r#"
output_path = "$REDLINE_TEXT_ROOT/out.txt"
"#;

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, config_content).unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(config.output_path, PathBuf::from("/custom/texts/out.txt"));

        unsafe {
            env::remove_var("REDLINE_TEXT_ROOT");
        }
    }
}
