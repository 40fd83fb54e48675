//! Deck generation - from CSV rows and a card template to printable pages
//!
//! The template engine renders single cards; this module supplies the rows,
//! picks the template per row, groups cards into pages and writes the output.

mod assemble;
mod builtin_layout;
mod generate;
mod layout;
mod templates;

pub use assemble::{AssembledDeck, DeckAssembler};
pub use builtin_layout::builtin_layout;
pub use generate::{generate_deck, preview_card, DeckRequest, DeckSummary, GenerateOutcome};
pub use layout::{resolve_layout, Layout};
pub use templates::{read_template, TemplateSource};
