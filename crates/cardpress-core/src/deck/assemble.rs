//! Page assembly - wraps rendered cards into cards and pages

use super::layout::Layout;
use crate::config::consts::layout::HIDDEN_CUT_LINES_STYLE;
use crate::template::substitute;
use tracing::debug;

/// Pages produced by [`DeckAssembler::finish`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledDeck {
    /// Concatenated page markup for `{{pages}}`
    pub pages: String,
    /// Number of cards across all pages
    pub card_count: usize,
    /// Number of pages
    pub page_count: usize,
}

/// Groups card content into fixed-size pages
#[derive(Debug)]
pub struct DeckAssembler<'a> {
    page: String,
    card: &'a str,
    cards_per_page: usize,
    current: String,
    cards_on_page: usize,
    card_count: usize,
    pages: Vec<String>,
}

impl<'a> DeckAssembler<'a> {
    /// Create an assembler; `{{style}}` on the page template is resolved here
    pub fn new(layout: &'a Layout, cards_per_page: usize, cut_lines: bool) -> Self {
        let style = if cut_lines { "" } else { HIDDEN_CUT_LINES_STYLE };

        Self {
            page: substitute(&layout.page, "style", style),
            card: &layout.card,
            cards_per_page: cards_per_page.max(1),
            current: String::new(),
            cards_on_page: 0,
            card_count: 0,
            pages: Vec::new(),
        }
    }

    /// Add one card's rendered content, closing the page when it is full
    pub fn push_card(&mut self, content: &str) {
        self.current.push_str(&substitute(self.card, "content", content));
        self.cards_on_page += 1;
        self.card_count += 1;

        if self.cards_on_page == self.cards_per_page {
            self.close_page();
        }
    }

    /// Cards pushed so far
    pub fn card_count(&self) -> usize {
        self.card_count
    }

    fn close_page(&mut self) {
        let cards = std::mem::take(&mut self.current);
        self.pages.push(substitute(&self.page, "cards", &cards));
        self.cards_on_page = 0;
        debug!(page = self.pages.len(), "closed page");
    }

    /// Close any partial page and fill in `{{cards_total}}`
    pub fn finish(mut self) -> AssembledDeck {
        if self.cards_on_page > 0 {
            self.close_page();
        }

        let pages = substitute(
            &self.pages.concat(),
            "cards_total",
            &self.card_count.to_string(),
        );

        AssembledDeck {
            pages,
            card_count: self.card_count,
            page_count: self.pages.len(),
        }
    }
}
