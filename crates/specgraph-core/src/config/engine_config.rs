//! Tunables for the validation and suggestion subsystems.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Configuration for the engine. Every field has a usable default; the
/// caller parses TOML it loaded itself — the engine performs no I/O.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Weight of a literal ID mention in content. Default: 0.5.
    pub id_mention_weight: f64,
    /// Weight of a title substring/token overlap. Default: 0.3.
    pub title_overlap_weight: f64,
    /// Weight of a shared tag. Default: 0.2.
    pub shared_tag_weight: f64,
    /// Maximum number of suggestions returned per spec. Default: 8.
    pub suggestion_cap: usize,
    /// Minimum title token overlap ratio to count as similar. Default: 0.5.
    pub title_overlap_threshold: f64,
    /// Content shorter than this (after trim) is flagged. Default: 50.
    pub min_content_length: usize,
    /// Section headers every spec is expected to carry.
    pub required_sections: Vec<String>,
    /// Header of the section whose list items must be checkboxes.
    pub criteria_section: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            id_mention_weight: 0.5,
            title_overlap_weight: 0.3,
            shared_tag_weight: 0.2,
            suggestion_cap: 8,
            title_overlap_threshold: 0.5,
            min_content_length: 50,
            required_sections: vec![
                "## Overview".to_string(),
                "## Acceptance Criteria".to_string(),
            ],
            criteria_section: "## Acceptance Criteria".to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse a config from a TOML string and validate its ranges.
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all tunables are within their documented ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("id_mention_weight", self.id_mention_weight),
            ("title_overlap_weight", self.title_overlap_weight),
            ("shared_tag_weight", self.shared_tag_weight),
            ("title_overlap_threshold", self.title_overlap_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfRange {
                    field: name,
                    value,
                });
            }
        }
        if self.suggestion_cap == 0 {
            return Err(ConfigError::ZeroCap);
        }
        Ok(())
    }
}
