//! Layout resolution for page assembly

use crate::config::consts::{layout as layout_consts, output as output_consts};
use crate::error::{CardpressError, Result};
use std::path::Path;
use tracing::debug;

/// The page-level templates wrapped around rendered cards
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// index.html - document shell holding `{{title}}`, `{{description}}`, `{{pages}}`
    pub index: String,
    /// page.html - one printed page holding `{{cards}}`, `{{style}}`, `{{cards_total}}`
    pub page: String,
    /// card.html - one card holding `{{content}}`
    pub card: String,
    /// index.css - copied verbatim next to the index
    pub stylesheet: String,
}

impl Layout {
    /// Create a layout from its four parts
    pub fn new(
        index: impl Into<String>,
        page: impl Into<String>,
        card: impl Into<String>,
        stylesheet: impl Into<String>,
    ) -> Self {
        Self {
            index: index.into(),
            page: page.into(),
            card: card.into(),
            stylesheet: stylesheet.into(),
        }
    }
}

/// Resolve the layout to generate with
///
/// Resolution order:
/// 1. Each file present in `dir` (`index.html`, `page.html`, `card.html`, `index.css`)
/// 2. The builtin counterpart for every file `dir` does not provide
///
/// Returns error if `dir` is given but does not exist.
pub fn resolve_layout(dir: Option<&Path>) -> Result<Layout> {
    let builtin = super::builtin_layout::builtin_layout();

    let Some(dir) = dir else {
        debug!("using builtin layout");
        return Ok(builtin);
    };

    if !dir.is_dir() {
        return Err(CardpressError::LayoutNotFound {
            path: dir.to_path_buf(),
        });
    }

    load_layout_from_dir(dir, builtin)
}

/// Load layout files from a directory on top of `base`
fn load_layout_from_dir(dir: &Path, base: Layout) -> Result<Layout> {
    Ok(Layout {
        index: read_layout_file(dir, output_consts::INDEX_FILE)?.unwrap_or(base.index),
        page: read_layout_file(dir, layout_consts::PAGE_FILE)?.unwrap_or(base.page),
        card: read_layout_file(dir, layout_consts::CARD_FILE)?.unwrap_or(base.card),
        stylesheet: read_layout_file(dir, output_consts::STYLESHEET_FILE)?
            .unwrap_or(base.stylesheet),
    })
}

/// Read `dir/name` if it exists
fn read_layout_file(dir: &Path, name: &str) -> Result<Option<String>> {
    let path = dir.join(name);
    if !path.is_file() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path).map_err(|e| {
        CardpressError::LayoutInvalid(format!("Failed to read {}: {}", path.display(), e))
    })?;

    debug!(path = %path.display(), "layout file overrides builtin");
    Ok(Some(content))
}
