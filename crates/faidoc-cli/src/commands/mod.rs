//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod process;
pub mod templates;
pub mod validate;

use std::path::Path;

use faidoc_core::FaidocConfig;

/// Load the pipeline configuration from an explicit path, falling back to
/// defaults when none is given.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<FaidocConfig> {
    match config_path {
        Some(path) => Ok(FaidocConfig::from_file(Path::new(path))?),
        None => Ok(FaidocConfig::default()),
    }
}
