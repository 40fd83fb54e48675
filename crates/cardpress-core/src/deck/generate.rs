//! Deck generation - renders every card and writes the printable pages
//!
//! # Steps
//! 1. Load the default card template (an empty template is a no-op)
//! 2. Read the data rows and resolve the layout
//! 3. Render `@count` copies of each row, substituting `{{card_index}}` and `{{version}}`
//! 4. Assemble pages and fill in the index
//! 5. Write `index.html` and `index.css` into the output directory

use super::assemble::DeckAssembler;
use super::layout::{resolve_layout, Layout};
use super::templates::TemplateSource;
use crate::config::consts::{self, output as output_consts};
use crate::config::Config;
use crate::error::{CardpressError, Result};
use crate::record::{read_records, DataRecord};
use crate::template::{substitute, TemplateEngine};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Everything one generate run needs
#[derive(Debug, Clone, PartialEq)]
pub struct DeckRequest {
    /// CSV file with a header row
    pub data: PathBuf,
    /// Default card template
    pub template: PathBuf,
    /// Index title; `None` or empty means an automatic one
    pub title: Option<String>,
    pub description: String,
    /// Substituted into `{{version}}` on every card
    pub version: String,
    pub cut_lines: bool,
    pub output_dir: PathBuf,
    /// Directory overriding builtin layout files
    pub layout_dir: Option<PathBuf>,
    pub cards_per_page: usize,
}

impl DeckRequest {
    /// Request with default settings
    pub fn new(data: impl Into<PathBuf>, template: impl Into<PathBuf>) -> Self {
        Self::from_config(&Config::default(), data, template)
    }

    /// Request seeded from a loaded config
    pub fn from_config(
        config: &Config,
        data: impl Into<PathBuf>,
        template: impl Into<PathBuf>,
    ) -> Self {
        Self {
            data: data.into(),
            template: template.into(),
            title: config.deck.title.clone(),
            description: config.deck.description.clone(),
            version: config.deck.version.clone(),
            cut_lines: config.output.cut_lines,
            output_dir: config.output.dir.clone(),
            layout_dir: config.layout.dir.clone(),
            cards_per_page: config.layout.cards_per_page,
        }
    }

    /// Title to put on the index
    fn title_for(&self, cards: usize, pages: usize) -> String {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => format!(
                "{}: {} card(s), {} page(s)",
                consts::PROGRAM_NAME,
                cards,
                pages
            ),
        }
    }
}

/// Result of a successful generate run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckSummary {
    pub cards: usize,
    pub pages: usize,
    /// Path of the written index.html
    pub index_path: PathBuf,
}

/// What a generate run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The default template was empty; nothing was written
    EmptyTemplate,
    /// Pages were written
    Generated(DeckSummary),
}

/// Generate the printable deck described by `request`
///
/// # Errors
///
/// Returns an error if any input cannot be read, a card fails to render
/// (row number included), or the output cannot be written.
pub fn generate_deck(request: &DeckRequest) -> Result<GenerateOutcome> {
    let mut templates = TemplateSource::load(&request.template, &request.data)?;
    if templates.is_empty() {
        warn!(
            path = %request.template.display(),
            "template is empty, no cards will be generated"
        );
        return Ok(GenerateOutcome::EmptyTemplate);
    }

    let records = read_records(&request.data)?;
    let layout = resolve_layout(request.layout_dir.as_deref())?;

    let engine = TemplateEngine::new();
    let mut assembler = DeckAssembler::new(&layout, request.cards_per_page, request.cut_lines);

    for (idx, record) in records.iter().enumerate() {
        let row = idx + 1;
        let count = record.repeat_count();
        if count == 0 {
            warn!(row, "row generates no cards");
            continue;
        }

        for _ in 0..count {
            let template = templates.template_for(record)?;
            let card_index = assembler.card_count() + 1;
            let content =
                render_card(&engine, template, record, card_index, &request.version, row)?;
            assembler.push_card(&content);
        }
    }

    let deck = assembler.finish();
    let index = render_index(&layout, request, &deck.pages, deck.card_count, deck.page_count);

    let index_path = write_output(&request.output_dir, &layout, &index)?;
    debug!(
        cards = deck.card_count,
        pages = deck.page_count,
        path = %index_path.display(),
        "deck written"
    );

    Ok(GenerateOutcome::Generated(DeckSummary {
        cards: deck.card_count,
        pages: deck.page_count,
        index_path,
    }))
}

/// Render the content of the first card generated from data row `row` (1-based)
///
/// Uses `row` as the card index. Nothing is written.
pub fn preview_card(request: &DeckRequest, row: usize) -> Result<String> {
    let mut templates = TemplateSource::load(&request.template, &request.data)?;
    let records = read_records(&request.data)?;

    let record = row
        .checked_sub(1)
        .and_then(|idx| records.get(idx))
        .ok_or(CardpressError::RowOutOfRange {
            row,
            rows: records.len(),
        })?;

    let template = templates.template_for(record)?;
    render_card(
        &TemplateEngine::new(),
        template,
        record,
        row,
        &request.version,
        row,
    )
}

/// Render one card instance and fill in the per-card keywords
fn render_card(
    engine: &TemplateEngine,
    template: &str,
    record: &DataRecord,
    card_index: usize,
    version: &str,
    row: usize,
) -> Result<String> {
    let content = engine
        .render(template, record)
        .map_err(|source| CardpressError::Render { row, source })?;

    let content = substitute(&content, "card_index", &card_index.to_string());
    Ok(substitute(&content, "version", version))
}

/// Fill in the index shell
fn render_index(
    layout: &Layout,
    request: &DeckRequest,
    pages: &str,
    cards: usize,
    page_count: usize,
) -> String {
    let index = substitute(&layout.index, "title", &request.title_for(cards, page_count));
    let index = substitute(&index, "description", &request.description);
    substitute(&index, "pages", pages)
}

/// Write index.html and index.css, returning the index path
///
/// The directory is created if absent; other files in it are left alone.
fn write_output(dir: &Path, layout: &Layout, index: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let index_path = dir.join(output_consts::INDEX_FILE);
    write_atomic(&index_path, index)?;
    write_atomic(&dir.join(output_consts::STYLESHEET_FILE), &layout.stylesheet)?;

    Ok(index_path)
}

/// Write through a temp file in the same directory, then rename into place
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.persist(path).map_err(|e| CardpressError::IoError(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardpress_testkit::{temp_dir_in_workspace, write_file, DeckFixture};

    fn request_for(fixture: &DeckFixture) -> DeckRequest {
        let mut request = DeckRequest::new(&fixture.data, &fixture.template);
        request.output_dir = fixture.root().join("generated");
        request
    }

    fn generated(outcome: GenerateOutcome) -> DeckSummary {
        match outcome {
            GenerateOutcome::Generated(summary) => summary,
            GenerateOutcome::EmptyTemplate => panic!("Expected Generated outcome"),
        }
    }

    #[test]
    fn test_generate_sample_deck() {
        let temp = temp_dir_in_workspace();
        let fixture = DeckFixture::sample(temp.path());
        let request = request_for(&fixture);

        let summary = generated(generate_deck(&request).unwrap());
        assert_eq!(summary.cards, 3);
        assert_eq!(summary.pages, 1);
        assert_eq!(summary.index_path, temp.path().join("generated/index.html"));

        let index = fs::read_to_string(&summary.index_path).unwrap();
        assert!(index.contains("<h1>Ace</h1><p>Spades</p>"));
        assert!(index.contains("<h1>Queen</h1><p>Clubs</p>"));
        assert!(index.contains("<title>cardpress: 3 card(s), 1 page(s)</title>"));
        assert!(index.contains("Pages generated by cardpress"));
        assert!(index.contains("3 card(s) in total"));
        assert!(!index.contains("{{"));

        assert!(temp.path().join("generated/index.css").is_file());
    }

    #[test]
    fn test_generate_splits_pages() {
        let temp = temp_dir_in_workspace();
        let fixture = DeckFixture::new(temp.path(), "name,@count\nA,10\n", "{{name}}");
        let summary = generated(generate_deck(&request_for(&fixture)).unwrap());
        assert_eq!(summary.cards, 10);
        assert_eq!(summary.pages, 2);
    }

    #[test]
    fn test_generate_repeat_counts() {
        let temp = temp_dir_in_workspace();
        let fixture = DeckFixture::new(
            temp.path(),
            "name,@count\nThree,3\nNone,-1\nDefault,lots\nZero,0\nBlank,\n",
            "{{name}}",
        );

        let summary = generated(generate_deck(&request_for(&fixture)).unwrap());
        assert_eq!(summary.cards, 5);

        let index = fs::read_to_string(summary.index_path).unwrap();
        assert_eq!(index.matches(">Three<").count(), 3);
        assert!(!index.contains(">None<"));
        assert!(!index.contains(">Zero<"));
        assert_eq!(index.matches(">Default<").count(), 1);
        assert_eq!(index.matches(">Blank<").count(), 1);
    }

    #[test]
    fn test_generate_card_index_and_version() {
        let temp = temp_dir_in_workspace();
        let fixture = DeckFixture::new(
            temp.path(),
            "name,@count\nA,2\nB,1\n",
            "#{{card_index}} {{name}} {{version}}",
        );
        let mut request = request_for(&fixture);
        request.version = "v1.2".to_string();

        let summary = generated(generate_deck(&request).unwrap());
        let index = fs::read_to_string(summary.index_path).unwrap();
        assert!(index.contains("#1 A v1.2"));
        assert!(index.contains("#2 A v1.2"));
        assert!(index.contains("#3 B v1.2"));
    }

    #[test]
    fn test_generate_template_override() {
        let temp = temp_dir_in_workspace();
        write_file(temp.path(), "back.html", "BACK of {{name}}");
        let fixture = DeckFixture::new(
            temp.path(),
            "name,@template\nAce,\nKing,back.html\n",
            "FRONT of {{name}}",
        );

        let summary = generated(generate_deck(&request_for(&fixture)).unwrap());
        let index = fs::read_to_string(summary.index_path).unwrap();
        assert!(index.contains("FRONT of Ace"));
        assert!(index.contains("BACK of King"));
    }

    #[test]
    fn test_generate_images_in_values() {
        let temp = temp_dir_in_workspace();
        let fixture = DeckFixture::new(
            temp.path(),
            "name,art\nAce,{{cards/ace.png:32x32}}\n",
            "Name: {{name}}, Art: {{art}}",
        );

        let summary = generated(generate_deck(&request_for(&fixture)).unwrap());
        let index = fs::read_to_string(summary.index_path).unwrap();
        assert!(index.contains(
            r#"Name: Ace, Art: <img src="cards/ace.png" width="32" height="32">"#
        ));
    }

    #[test]
    fn test_generate_empty_template_writes_nothing() {
        let temp = temp_dir_in_workspace();
        let fixture = DeckFixture::new(temp.path(), "name\nAce\n", "   \n");
        let request = request_for(&fixture);

        let outcome = generate_deck(&request).unwrap();
        assert_eq!(outcome, GenerateOutcome::EmptyTemplate);
        assert!(!request.output_dir.exists());
    }

    #[test]
    fn test_generate_custom_title_and_cut_lines() {
        let temp = temp_dir_in_workspace();
        let fixture = DeckFixture::sample(temp.path());
        let mut request = request_for(&fixture);
        request.title = Some("My Deck".to_string());
        request.description = "For testing".to_string();
        request.cut_lines = false;

        let summary = generated(generate_deck(&request).unwrap());
        let index = fs::read_to_string(summary.index_path).unwrap();
        assert!(index.contains("<title>My Deck</title>"));
        assert!(index.contains("For testing"));
        assert!(index.contains(r#"style="display: none""#));
    }

    #[test]
    fn test_generate_empty_title_falls_back() {
        let temp = temp_dir_in_workspace();
        let fixture = DeckFixture::sample(temp.path());
        let mut request = request_for(&fixture);
        request.title = Some(String::new());

        let summary = generated(generate_deck(&request).unwrap());
        let index = fs::read_to_string(summary.index_path).unwrap();
        assert!(index.contains("cardpress: 3 card(s), 1 page(s)"));
    }

    #[test]
    fn test_generate_custom_layout() {
        let temp = temp_dir_in_workspace();
        let fixture = DeckFixture::sample(temp.path());
        write_file(temp.path(), "layout/index.html", "{{title}}|{{pages}}");
        write_file(temp.path(), "layout/page.html", "({{cards}})");
        write_file(temp.path(), "layout/card.html", "[{{content}}]");
        write_file(temp.path(), "layout/index.css", "/* custom */");

        let mut request = request_for(&fixture);
        request.template = write_file(temp.path(), "short.html", "{{name}}");
        request.layout_dir = Some(temp.path().join("layout"));
        request.cards_per_page = 2;
        request.title = Some("T".to_string());

        let summary = generated(generate_deck(&request).unwrap());
        let index = fs::read_to_string(&summary.index_path).unwrap();
        assert_eq!(index, "T|([Ace][King])([Queen])");

        let css = fs::read_to_string(temp.path().join("generated/index.css")).unwrap();
        assert_eq!(css, "/* custom */");
    }

    #[test]
    fn test_generate_keeps_other_output_files() {
        let temp = temp_dir_in_workspace();
        let fixture = DeckFixture::sample(temp.path());
        let keep = write_file(temp.path(), "generated/art/ace.png", "png");

        generate_deck(&request_for(&fixture)).unwrap();
        assert!(keep.is_file());
    }

    #[test]
    fn test_generate_render_error_reports_row() {
        let temp = temp_dir_in_workspace();
        let fixture = DeckFixture::new(
            temp.path(),
            "name,art\nAce,{{a.png}}\nKing,{{k.png:bigxbig}}\n",
            "{{name}} {{art}}",
        );

        match generate_deck(&request_for(&fixture)) {
            Err(CardpressError::Render { row, .. }) => assert_eq!(row, 2),
            other => panic!("Expected Render error, got {:?}", other),
        }
    }

    #[test]
    fn test_generate_missing_data() {
        let temp = temp_dir_in_workspace();
        let template = write_file(temp.path(), "card.html", "{{name}}");
        let request = DeckRequest::new(temp.path().join("missing.csv"), template);

        assert!(matches!(
            generate_deck(&request),
            Err(CardpressError::DataNotFound { .. })
        ));
    }

    #[test]
    fn test_generate_missing_template() {
        let temp = temp_dir_in_workspace();
        let data = write_file(temp.path(), "cards.csv", "name\nAce\n");
        let request = DeckRequest::new(data, temp.path().join("missing.html"));

        assert!(matches!(
            generate_deck(&request),
            Err(CardpressError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn test_preview_card() {
        let temp = temp_dir_in_workspace();
        let fixture = DeckFixture::new(
            temp.path(),
            "name,@count\nAce,3\nKing,1\n",
            "#{{card_index}} {{name}} {{version}}",
        );
        let mut request = request_for(&fixture);
        request.version = "beta".to_string();

        assert_eq!(preview_card(&request, 2).unwrap(), "#2 King beta");
        assert!(!request.output_dir.exists());
    }

    #[test]
    fn test_preview_row_out_of_range() {
        let temp = temp_dir_in_workspace();
        let fixture = DeckFixture::sample(temp.path());
        let request = request_for(&fixture);

        for row in [0, 4] {
            match preview_card(&request, row) {
                Err(CardpressError::RowOutOfRange { rows, .. }) => assert_eq!(rows, 3),
                other => panic!("Expected RowOutOfRange, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_request_from_config() {
        let mut config = Config::default();
        config.deck.version = "v9".to_string();
        config.layout.cards_per_page = 4;

        let request = DeckRequest::from_config(&config, "d.csv", "t.html");
        assert_eq!(request.version, "v9");
        assert_eq!(request.cards_per_page, 4);
        assert_eq!(request.output_dir, PathBuf::from("generated"));
        assert!(request.cut_lines);
    }
}
