//! Configuration system
//!
//! File-backed configuration with TOML and RON support, plus the
//! declarative scene-set description consumed by
//! [`SceneManager::from_config`](crate::manager::SceneManager::from_config).

use serde::{Deserialize, Serialize};

/// Configuration trait
///
/// Types implementing this trait gain file round-tripping in TOML or RON,
/// selected by file extension.
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Semantically invalid configuration
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Declarative description of the scene set a manager starts with.
///
/// Scenes are registered in declaration order, so their ids follow the
/// declaration sequence (0, 1, 2, ...). At most one scene may be flagged
/// active.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StageConfig {
    /// Scenes to register, in order.
    #[serde(default)]
    pub scenes: Vec<SceneDecl>,
}

/// One scene declaration inside a [`StageConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneDecl {
    /// Scene name.
    pub name: String,

    /// Whether this scene becomes the active scene after registration.
    #[serde(default)]
    pub active: bool,
}

impl Config for StageConfig {}

impl StageConfig {
    /// Check the declaration set for semantic errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let active = self.scenes.iter().filter(|decl| decl.active).count();
        if active > 1 {
            return Err(ConfigError::Invalid(format!(
                "{active} scenes are marked active, expected at most one"
            )));
        }
        Ok(())
    }
}
