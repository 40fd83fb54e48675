//! Constants shared across the crate

/// Name used in generated titles and descriptions
pub const PROGRAM_NAME: &str = "cardpress";

/// Config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "cardpress.toml";

/// Output settings
pub mod output {
    /// Directory the generated pages are written to
    pub const DEFAULT_DIR: &str = "generated";

    /// Generated page index
    pub const INDEX_FILE: &str = "index.html";

    /// Stylesheet copied next to the index
    pub const STYLESHEET_FILE: &str = "index.css";
}

/// Page layout settings
pub mod layout {
    /// Cards per printed page (a 3x3 grid)
    pub const DEFAULT_CARDS_PER_PAGE: usize = 9;

    /// Page wrapper template file
    pub const PAGE_FILE: &str = "page.html";

    /// Card wrapper template file
    pub const CARD_FILE: &str = "card.html";

    /// Value of `{{style}}` when cut lines are disabled
    pub const HIDDEN_CUT_LINES_STYLE: &str = r#"style="display: none""#;
}

/// Default deck description
pub const DEFAULT_DESCRIPTION: &str = "Pages generated by cardpress";
