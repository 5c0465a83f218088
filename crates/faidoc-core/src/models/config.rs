//! Configuration structures for document intake.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{FaidocError, Result};

/// Main configuration for the faidoc pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaidocConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Run field validators over extracted values and report failures as
    /// issues.
    pub validate_fields: bool,

    /// Minimum confidence (0-100) to accept an extracted field. Values
    /// below the threshold are treated as not extracted; 0 disables the
    /// check.
    pub min_confidence: u8,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            validate_fields: true,
            min_confidence: 0,
        }
    }
}

impl FaidocConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| FaidocError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| FaidocError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
