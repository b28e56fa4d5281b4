//! Configuration for the folio terminal portfolio.
//!
//! Settings are read from a TOML file. Every field has a default, so an absent
//! file or a partial one is fine; only a malformed file is an error.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use folio_core::{AccentColor, BackgroundSettings, SectionId};
use serde::Deserialize;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "FOLIO_CONFIG";

const CONFIG_FILE: &str = "config.toml";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub profile: ProfileSettings,
    pub background: BackgroundSettings,
    pub ui: UiSettings,
}

/// Contact details shown in the hero and contact sections.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProfileSettings {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub resume: Option<String>,
}

/// Presentation settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub accent: AccentColor,
    pub start_section: SectionId,
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load configuration from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load configuration from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }
}

/// Resolve the config file path: `$FOLIO_CONFIG`, then the platform config dir.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Platform data directory, used for the log file.
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "folio")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.background.object_count, 25);
        assert!(config.background.clamp_emissive);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml(
            r#"
            [profile]
            email = "someone@example.com"

            [background]
            seed = 42
            fps = 60

            [ui]
            accent = "cyan"
            start_section = "projects"
            "#,
        )
        .unwrap();

        assert_eq!(config.profile.email.as_deref(), Some("someone@example.com"));
        assert!(config.profile.phone.is_none());
        assert_eq!(config.background.seed, Some(42));
        assert_eq!(config.background.fps, 60);
        assert_eq!(config.background.trail_length, 8);
        assert_eq!(config.ui.accent, AccentColor::Cyan);
        assert_eq!(config.ui.start_section, SectionId::Projects);
    }

    #[test]
    fn test_invalid_value_is_error() {
        assert!(Config::from_toml("[ui]\naccent = \"plaid\"").is_err());
        assert!(Config::from_toml("[background]\nfps = \"fast\"").is_err());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("folio-config-test-does-not-exist.toml");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let path =
            std::env::temp_dir().join(format!("folio-config-test-{}.toml", std::process::id()));
        std::fs::write(&path, "[background\nfps = 1").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("invalid config file"));
        let _ = std::fs::remove_file(&path);
    }
}
