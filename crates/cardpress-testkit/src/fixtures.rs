//! Deck fixtures for testing
//!
//! Writes data files, card templates and layout overrides into a
//! temporary directory so tests can point the generator at real paths.

use std::path::{Path, PathBuf};

/// Write `contents` to `root/relative`, creating parent directories
///
/// # Panics
///
/// Panics if the directory or file cannot be written.
pub fn write_file(root: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create {}: {}", parent.display(), e));
    }
    std::fs::write(&path, contents)
        .unwrap_or_else(|e| panic!("Failed to write {}: {}", path.display(), e));
    path
}

/// A data file plus default card template laid out under one root
#[derive(Debug, Clone)]
pub struct DeckFixture {
    /// Path to the CSV data file
    pub data: PathBuf,
    /// Path to the default card template
    pub template: PathBuf,
}

impl DeckFixture {
    /// Write `cards.csv` and `card.html` into `root`
    pub fn new(root: &Path, csv: &str, template: &str) -> Self {
        Self {
            data: write_file(root, "cards.csv", csv),
            template: write_file(root, "card.html", template),
        }
    }

    /// A three-row deck with a name and a title column
    pub fn sample(root: &Path) -> Self {
        Self::new(
            root,
            "name,title\nAce,Spades\nKing,Hearts\nQueen,Clubs\n",
            "<h1>{{name}}</h1><p>{{title}}</p>",
        )
    }

    /// Directory holding the data file
    pub fn root(&self) -> &Path {
        self.data.parent().unwrap_or_else(|| Path::new("."))
    }
}
