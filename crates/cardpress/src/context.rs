//! Global context for CLI commands

use anyhow::{Context as _, Result};
use cardpress_core::config::Config;
use std::env;
use std::path::Path;

/// Global context containing the loaded config
pub struct Context {
    pub config: Config,
    pub verbose: bool,
}

impl Context {
    /// Create a new context by loading the config
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicit config file is missing
    /// - A config file cannot be parsed or holds invalid values
    pub fn new(config_path: Option<&Path>, verbose: bool) -> Result<Self> {
        let current_dir = env::current_dir()?;
        let config = Config::load(config_path, &current_dir).context("Failed to load config")?;

        Ok(Self { config, verbose })
    }
}
