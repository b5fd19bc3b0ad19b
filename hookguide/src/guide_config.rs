//! Guide configuration from hookguide.toml

use crate::guide_model::markers::{self, Markers};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the configuration file looked up beside a guide
pub const CONFIG_FILE_NAME: &str = "hookguide.toml";

/// Main guide configuration from hookguide.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideConfig {
    /// Title used when the guide has no title heading of its own
    pub title: Option<String>,

    /// Marker phrase overrides
    pub markers: MarkerConfig,
}

/// Marker phrase lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Heading phrases that start a skipped region
    pub skip: Vec<String>,

    /// Phrases that make a level-1 heading a Part heading
    pub parts: Vec<String>,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        let defaults = Markers::default();
        Self {
            skip: defaults.skip,
            parts: defaults.parts,
        }
    }
}

impl GuideConfig {
    /// Load configuration from a hookguide.toml file
    ///
    /// # Parameters
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(GuideConfig)` - Successfully loaded configuration
    /// * `Err(GuideConfigError)` - Error reading or parsing the configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GuideConfigError> {
        let content = fs::read_to_string(&path).map_err(GuideConfigError::IoError)?;

        let config: GuideConfig =
            toml::from_str(&content).map_err(GuideConfigError::ParseError)?;

        Ok(config)
    }

    /// Load the configuration beside `guide`, or defaults if there is none
    ///
    /// A config file that exists but fails to load is still an error.
    pub fn discover(guide: &Path) -> Result<Self, GuideConfigError> {
        let dir = if guide.is_dir() {
            Some(guide)
        } else {
            guide.parent()
        };

        match dir.map(|d| d.join(CONFIG_FILE_NAME)) {
            Some(path) if path.is_file() => {
                log::info!("Using configuration {}", path.display());
                Self::load(path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Save configuration to a hookguide.toml file
    ///
    /// # Parameters
    /// * `path` - Path where the configuration file will be written
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved configuration
    /// * `Err(GuideConfigError)` - Error serializing or writing the configuration file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), GuideConfigError> {
        let content = toml::to_string_pretty(self).map_err(GuideConfigError::SerializeError)?;

        fs::write(&path, content).map_err(GuideConfigError::IoError)?;

        Ok(())
    }

    /// Build the parser marker vocabulary from this configuration
    pub fn markers(&self) -> Markers {
        Markers {
            skip: self.markers.skip.clone(),
            parts: self.markers.parts.clone(),
            default_title: self
                .title
                .clone()
                .unwrap_or_else(|| markers::DEFAULT_TITLE.to_string()),
        }
    }
}

/// Errors that can occur when loading or saving guide configuration
#[derive(Debug)]
#[allow(clippy::enum_variant_names)]
pub enum GuideConfigError {
    /// IO error when reading or writing file
    IoError(std::io::Error),

    /// Error parsing TOML
    ParseError(toml::de::Error),

    /// Error serializing to TOML
    SerializeError(toml::ser::Error),
}

impl std::fmt::Display for GuideConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuideConfigError::IoError(e) => write!(f, "IO error: {}", e),
            GuideConfigError::ParseError(e) => write!(f, "TOML parse error: {}", e),
            GuideConfigError::SerializeError(e) => write!(f, "TOML serialize error: {}", e),
        }
    }
}

impl std::error::Error for GuideConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guide_config_roundtrip() {
        let config = GuideConfig {
            title: Some("Docker Desktop Notes".to_string()),
            markers: MarkerConfig {
                skip: vec!["Contents".to_string()],
                parts: vec!["Chapter".to_string()],
            },
        };

        // Serialize to TOML
        let toml_str = toml::to_string_pretty(&config).unwrap();

        // Deserialize back
        let parsed: GuideConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_parse_partial_toml_uses_defaults() {
        let toml_content = r#"
title = "NestJS Lifecycle"

[markers]
parts = ["Part 1", "Part 2", "Part 3"]
"#;

        let config: GuideConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.title.as_deref(), Some("NestJS Lifecycle"));
        assert_eq!(config.markers.parts.len(), 3);
        assert_eq!(config.markers.skip, Markers::default().skip);
    }

    #[test]
    fn test_empty_toml_matches_default_markers() {
        let config: GuideConfig = toml::from_str("").unwrap();

        assert_eq!(config.markers(), Markers::default());
    }

    #[test]
    fn test_markers_use_configured_title() {
        let config = GuideConfig {
            title: Some("Custom".to_string()),
            ..GuideConfig::default()
        };

        assert_eq!(config.markers().default_title, "Custom");
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("hookguide-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE_NAME);

        let config = GuideConfig::default();
        config.save(&path).unwrap();
        let loaded = GuideConfig::load(&path).unwrap();
        let discovered = GuideConfig::discover(&dir).unwrap();

        assert_eq!(loaded, config);
        assert_eq!(discovered, config);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = GuideConfig::load("/nonexistent/hookguide.toml");

        assert!(matches!(result, Err(GuideConfigError::IoError(_))));
    }
}
