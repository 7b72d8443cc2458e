//! Configuration for the bar NPC registry.
//!
//! Loadable from `cantina.toml`; every field has a default so an empty file
//! is a valid configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CantinaConfig {
    /// Registry behavior.
    #[serde(default)]
    pub bar: BarConfig,
    /// Player-facing alert texts.
    #[serde(default)]
    pub messages: MessagesConfig,
}

impl CantinaConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `CantinaError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        toml::from_str(toml_str).map_err(|e| crate::CantinaError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Registry behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarConfig {
    /// Number of missions the player may run at once. Approaching a giver
    /// at this count is refused.
    #[serde(default = "default_max_active_missions")]
    pub max_active_missions: usize,
    /// Capacity reserved when the registry first allocates.
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            max_active_missions: default_max_active_missions(),
            initial_capacity: default_initial_capacity(),
        }
    }
}

/// Player-facing alert texts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesConfig {
    /// Shown when a giver is approached with every mission slot taken.
    #[serde(default = "default_too_many_missions")]
    pub too_many_missions: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            too_many_missions: default_too_many_missions(),
        }
    }
}

fn default_max_active_missions() -> usize {
    12
}

fn default_initial_capacity() -> usize {
    8
}

fn default_too_many_missions() -> String {
    "You have too many active missions.".to_string()
}
