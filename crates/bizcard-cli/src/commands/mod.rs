//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod process;

use std::path::Path;

use bizcard_core::ParserConfig;

/// Load the parser configuration, falling back to defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ParserConfig> {
    match config_path {
        Some(path) => Ok(ParserConfig::from_file(Path::new(path))?),
        None => Ok(ParserConfig::default()),
    }
}
