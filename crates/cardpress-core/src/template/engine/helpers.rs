//! Helper functions for template rendering

/// Opening delimiter of a placeholder
pub(crate) const OPEN: &str = "{{";

/// Closing delimiter of a placeholder
pub(crate) const CLOSE: &str = "}}";

/// Byte range of a `{{...}}` span within a string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    /// Offset of the opening `{{`
    pub start: usize,
    /// Offset just past the closing `}}`
    pub end: usize,
}

impl Span {
    /// Text between the delimiters
    pub fn inner<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start + OPEN.len()..self.end - CLOSE.len()]
    }
}

/// Find the first span at or after `from`
///
/// The span opens at the first `{{` and closes at the first `}}` after it,
/// so it may contain newlines and never contains `}}`.
pub(crate) fn find_span(text: &str, from: usize) -> Option<Span> {
    let start = from + text[from..].find(OPEN)?;
    let body = start + OPEN.len();
    let close = body + text[body..].find(CLOSE)?;

    Some(Span {
        start,
        end: close + CLOSE.len(),
    })
}
