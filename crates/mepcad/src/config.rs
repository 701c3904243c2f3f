//! Sleeve configuration.

use mepcad_sizing::RectClearance;
use serde::Deserialize;

use crate::error::{CommandError, Result};

/// Configuration for sleeve placement commands.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SleeveConfig {
    /// Clearance policy for rectangular openings.
    pub rect: RectClearance,
}

impl Default for SleeveConfig {
    fn default() -> Self {
        Self {
            rect: RectClearance::default(),
        }
    }
}

impl SleeveConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CommandError::Config(e.to_string()))
    }
}
