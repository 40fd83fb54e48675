//! Builtin layout definition

use super::layout::Layout;

/// Layout compiled into the binary, used when no layout directory is given
pub fn builtin_layout() -> Layout {
    Layout::new(
        include_str!("../../builtin_layout/index.html"),
        include_str!("../../builtin_layout/page.html"),
        include_str!("../../builtin_layout/card.html"),
        include_str!("../../builtin_layout/index.css"),
    )
}
