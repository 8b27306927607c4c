//! Configuration for the extraction pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BizcardError, Result};

/// Tunables for the heuristic field classifiers.
///
/// The defaults reflect the geometry of a typical business card: branding
/// and person lines cluster in the top lines, the postal address at the
/// bottom. Keyword dictionaries are compiled in and not configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Lines scanned from the top for name, designation, and company.
    pub top_window: usize,

    /// Maximum words accepted in a person name.
    pub max_name_words: usize,

    /// Minimum length of a single line accepted as an address.
    pub min_address_line_len: usize,

    /// Lines scanned from the bottom when joining multi-line addresses.
    pub address_window: usize,

    /// Maximum consecutive lines joined into one address candidate.
    pub address_join_lines: usize,

    /// Minimum digits in an accepted phone number.
    pub min_phone_digits: usize,

    /// Maximum digits in an accepted phone number.
    pub max_phone_digits: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            top_window: 8,
            max_name_words: 4,
            min_address_line_len: 15,
            address_window: 6,
            address_join_lines: 3,
            min_phone_digits: 7,
            max_phone_digits: 15,
        }
    }
}

impl ParserConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check that the scan windows and bounds are usable.
    pub fn validate(&self) -> Result<()> {
        if self.top_window == 0 {
            return Err(BizcardError::Config("top_window must be at least 1".into()));
        }
        if self.max_name_words == 0 {
            return Err(BizcardError::Config("max_name_words must be at least 1".into()));
        }
        if self.address_join_lines < 2 {
            return Err(BizcardError::Config(
                "address_join_lines must be at least 2".into(),
            ));
        }
        if self.min_phone_digits == 0 || self.min_phone_digits > self.max_phone_digits {
            return Err(BizcardError::Config("phone digit bounds are invalid".into()));
        }
        Ok(())
    }
}
