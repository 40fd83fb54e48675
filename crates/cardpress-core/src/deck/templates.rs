//! Card template source - the default template plus cached per-row overrides

use crate::error::{CardpressError, Result};
use crate::record::DataRecord;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read a card template, trimming surrounding whitespace
pub fn read_template(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CardpressError::TemplateNotFound {
            path: path.to_path_buf(),
        },
        _ => CardpressError::IoError(e),
    })?;

    Ok(content.trim().to_string())
}

/// Supplies the card template for each record
#[derive(Debug)]
pub struct TemplateSource {
    default_path: PathBuf,
    default: String,
    data_dir: PathBuf,
    overrides: HashMap<PathBuf, String>,
}

impl TemplateSource {
    /// Load the default template
    ///
    /// Relative `@template` paths are later resolved against `data_path`'s directory.
    pub fn load(default_path: &Path, data_path: &Path) -> Result<Self> {
        let default = read_template(default_path)?;
        debug!(path = %default_path.display(), "loaded default template");

        Ok(Self {
            default_path: default_path.to_path_buf(),
            default,
            data_dir: data_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
            overrides: HashMap::new(),
        })
    }

    /// True when the default template has no content after trimming
    pub fn is_empty(&self) -> bool {
        self.default.is_empty()
    }

    /// Path an `@template` value refers to
    pub fn resolve_override(&self, raw: &str) -> PathBuf {
        let path = Path::new(raw);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }

    /// Template for `record`: its override if set, otherwise the default
    ///
    /// Each override file is read once and then served from the cache.
    pub fn template_for(&mut self, record: &DataRecord) -> Result<&str> {
        let Some(raw) = record.template_override() else {
            return Ok(self.default.as_str());
        };

        let path = self.resolve_override(raw);
        if path == self.default_path {
            return Ok(self.default.as_str());
        }

        if !self.overrides.contains_key(&path) {
            let template = read_template(&path)?;
            debug!(path = %path.display(), "loaded template override");
            self.overrides.insert(path.clone(), template);
        }

        Ok(self.overrides[&path].as_str())
    }

    /// Number of distinct override templates loaded so far
    pub fn overrides_loaded(&self) -> usize {
        self.overrides.len()
    }
}
