//! Generator configuration.
//!
//! A [`FakerConfig`] captures every knob a [`Faker`](crate::Faker) exposes so
//! a generator can be described in a YAML, TOML or JSON file. Missing keys
//! take the defaults below.
//!
//! ```yaml
//! seed: 42
//! random_string_length: 10
//! random_size: 5
//! number_boundary:
//!   start: 18
//!   end: 65
//! nil_if_len_zero: true
//! field_filters: ["^internal_"]
//! field_tags:
//!   email: email
//! ```

use crate::random::NumberBoundary;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default length of random strings.
pub const DEFAULT_STRING_LENGTH: i64 = 25;

/// Default upper bound for random collection sizes.
pub const DEFAULT_RANDOM_SIZE: i64 = 100;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Error reading the config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Error parsing TOML
    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Error parsing JSON
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension maps to no known format
    #[error("Unknown config file extension: '{0}'")]
    UnknownExtension(String),

    /// A size setting is negative
    #[error("{setting} must not be negative, got {value}")]
    NegativeSize { setting: &'static str, value: i64 },

    /// The number boundary has its start after its end
    #[error("number_boundary start {start} is bigger than end {end}")]
    InvalidBoundary { start: i64, end: i64 },

    /// A field filter is not a valid regular expression
    #[error("Invalid field filter '{pattern}': {source}")]
    InvalidFilter {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Settings for a [`Faker`](crate::Faker).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FakerConfig {
    /// RNG seed; entropy-seeded when absent
    pub seed: Option<u64>,
    /// Length of untagged random strings
    pub random_string_length: i64,
    /// Upper bound (exclusive) for random collection sizes
    pub random_size: i64,
    /// Range for untagged random integers
    pub number_boundary: NumberBoundary,
    /// Leave empty sequences and maps as nil
    pub nil_if_len_zero: bool,
    /// Force every random collection size to zero
    pub test_rand_zero: bool,
    /// Regular expressions naming fields to leave untouched
    pub field_filters: Vec<String>,
    /// Extra tag text appended to fields by name
    pub field_tags: BTreeMap<String, String>,
}

impl Default for FakerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            random_string_length: DEFAULT_STRING_LENGTH,
            random_size: DEFAULT_RANDOM_SIZE,
            number_boundary: NumberBoundary::default(),
            nil_if_len_zero: false,
            test_rand_zero: false,
            field_filters: Vec::new(),
            field_tags: BTreeMap::new(),
        }
    }
}

impl FakerConfig {
    /// Load configuration from a file, choosing the format by extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml(&content),
            "toml" => Self::from_toml(&content),
            "json" => Self::from_json(&content),
            other => Err(ConfigError::UnknownExtension(other.to_string())),
        }
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: FakerConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: FakerConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FakerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check sizes, the boundary and every field filter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.random_string_length < 0 {
            return Err(ConfigError::NegativeSize {
                setting: "random_string_length",
                value: self.random_string_length,
            });
        }
        if self.random_size < 0 {
            return Err(ConfigError::NegativeSize {
                setting: "random_size",
                value: self.random_size,
            });
        }

        let NumberBoundary { start, end } = self.number_boundary;
        if start > end {
            return Err(ConfigError::InvalidBoundary { start, end });
        }

        self.compiled_filters().map(|_| ())
    }

    /// Compile the field filters.
    pub fn compiled_filters(&self) -> Result<Vec<Regex>, ConfigError> {
        self.field_filters
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| ConfigError::InvalidFilter {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_YAML: &str = r#"
seed: 42
random_string_length: 10
random_size: 5
number_boundary:
  start: 18
  end: 65
nil_if_len_zero: true
field_filters:
  - "^internal_"
field_tags:
  email: email
"#;

    #[test]
    fn test_defaults() {
        let config = FakerConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.random_string_length, 25);
        assert_eq!(config.random_size, 100);
        assert_eq!(config.number_boundary, NumberBoundary { start: 0, end: 100 });
        assert!(!config.nil_if_len_zero);
        assert!(!config.test_rand_zero);
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_yaml() {
        let config = FakerConfig::from_yaml(SAMPLE_YAML).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.random_string_length, 10);
        assert_eq!(config.random_size, 5);
        assert_eq!(config.number_boundary, NumberBoundary { start: 18, end: 65 });
        assert!(config.nil_if_len_zero);
        assert_eq!(config.field_filters, vec!["^internal_".to_string()]);
        assert_eq!(config.field_tags.get("email").map(String::as_str), Some("email"));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = FakerConfig::from_yaml("random_size: 3\n").unwrap();
        assert_eq!(config.random_size, 3);
        assert_eq!(config.random_string_length, DEFAULT_STRING_LENGTH);
    }

    #[test]
    fn test_parse_toml_and_json() {
        let toml = r#"
seed = 7
test_rand_zero = true

[number_boundary]
start = -5
end = 5
"#;
        let config = FakerConfig::from_toml(toml).unwrap();
        assert_eq!(config.seed, Some(7));
        assert!(config.test_rand_zero);
        assert_eq!(config.number_boundary, NumberBoundary { start: -5, end: 5 });

        let json = r#"{"random_string_length": 4, "field_tags": {"name": "first_name"}}"#;
        let config = FakerConfig::from_json(json).unwrap();
        assert_eq!(config.random_string_length, 4);
        assert_eq!(
            config.field_tags.get("name").map(String::as_str),
            Some("first_name")
        );
    }

    #[test]
    fn test_validation_errors() {
        assert!(matches!(
            FakerConfig::from_yaml("random_size: -1"),
            Err(ConfigError::NegativeSize {
                setting: "random_size",
                value: -1
            })
        ));
        assert!(matches!(
            FakerConfig::from_yaml("random_string_length: -3"),
            Err(ConfigError::NegativeSize { .. })
        ));
        assert!(matches!(
            FakerConfig::from_yaml("number_boundary: {start: 10, end: 1}"),
            Err(ConfigError::InvalidBoundary { start: 10, end: 1 })
        ));
        assert!(matches!(
            FakerConfig::from_yaml("field_filters: ['(']"),
            Err(ConfigError::InvalidFilter { .. })
        ));
    }

    #[test]
    fn test_from_file_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(SAMPLE_YAML.as_bytes()).unwrap();
        let config = FakerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.seed, Some(42));

        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"{"seed": 9}"#).unwrap();
        assert_eq!(FakerConfig::from_file(file.path()).unwrap().seed, Some(9));

        let mut file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        file.write_all(b"seed=1").unwrap();
        assert!(matches!(
            FakerConfig::from_file(file.path()),
            Err(ConfigError::UnknownExtension(ext)) if ext == "ini"
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            FakerConfig::from_file("/nonexistent/fakegen.yaml"),
            Err(ConfigError::Io(_))
        ));
    }
}
