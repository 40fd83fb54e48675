use crate::config::consts;
use crate::error::{CardpressError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// cardpress.toml schema - defaults for every generate run
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub deck: DeckConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeckConfig {
    /// Empty or missing means an automatic "N card(s), P page(s)" title
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default = "default_description")]
    pub description: String,
    /// Substituted into `{{version}}` on every card
    #[serde(default)]
    pub version: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            title: None,
            description: default_description(),
            version: String::new(),
        }
    }
}

fn default_description() -> String {
    consts::DEFAULT_DESCRIPTION.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_cut_lines")]
    pub cut_lines: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            cut_lines: true,
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(consts::output::DEFAULT_DIR)
}

fn default_cut_lines() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Directory overriding the builtin layout files
    #[serde(default)]
    pub dir: Option<PathBuf>,
    #[serde(default = "default_cards_per_page")]
    pub cards_per_page: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            dir: None,
            cards_per_page: consts::layout::DEFAULT_CARDS_PER_PAGE,
        }
    }
}

fn default_cards_per_page() -> usize {
    consts::layout::DEFAULT_CARDS_PER_PAGE
}

impl Config {
    /// Read and validate a config file
    ///
    /// Relative `output.dir` and `layout.dir` are resolved against the
    /// directory holding the file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CardpressError::ConfigParseError(format!("{}: {}", path.display(), e))
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|e| {
            CardpressError::ConfigParseError(format!("{}: {}", path.display(), e))
        })?;

        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        config.validate()?;

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load the explicit config, or `cardpress.toml` in `cwd` if present
    ///
    /// An explicit path must exist; a missing implicit file yields defaults.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let implicit = cwd.join(consts::CONFIG_FILE_NAME);
        if implicit.is_file() {
            Self::from_file(&implicit)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject values generation cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.layout.cards_per_page == 0 {
            return Err(CardpressError::ConfigInvalidValue {
                field: "layout.cards_per_page".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    fn resolve_paths(&mut self, base: &Path) {
        if self.output.dir.is_relative() {
            self.output.dir = base.join(&self.output.dir);
        }
        if let Some(dir) = &self.layout.dir {
            if dir.is_relative() {
                self.layout.dir = Some(base.join(dir));
            }
        }
    }
}
