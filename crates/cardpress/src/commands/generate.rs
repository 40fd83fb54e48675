//! Generate command - render every card and write the printable pages

use crate::cli::GenerateArgs;
use crate::context::Context;
use anyhow::Result;
use cardpress_core::deck::{generate_deck, DeckRequest, GenerateOutcome};
use colored::Colorize;
use std::path::Path;

/// Generate the deck described by `args`
///
/// Command-line flags take precedence over the config file.
pub fn run(args: GenerateArgs, config_path: Option<&Path>, verbose: bool) -> Result<()> {
    let ctx = Context::new(config_path, verbose)?;
    let request = build_request(&ctx, args);

    if ctx.verbose {
        println!(
            "{} Generating cards from '{}' with template '{}'",
            "→".cyan(),
            request.data.display(),
            request.template.display()
        );
    }

    match generate_deck(&request)? {
        GenerateOutcome::EmptyTemplate => {
            println!(
                "{} The provided template appears to be empty. No cards will be generated.",
                "!".yellow()
            );
        }
        GenerateOutcome::Generated(summary) => {
            println!(
                "{} Generated {} card(s) on {} page(s). See '{}'",
                "✓".green().bold(),
                summary.cards,
                summary.pages,
                summary.index_path.display()
            );
        }
    }

    Ok(())
}

fn build_request(ctx: &Context, args: GenerateArgs) -> DeckRequest {
    let mut request =
        DeckRequest::from_config(&ctx.config, args.deck.filename, args.deck.template);

    if let Some(title) = args.title {
        request.title = Some(title);
    }
    if let Some(description) = args.description {
        request.description = description;
    }
    if let Some(version) = args.version_identifier {
        request.version = version;
    }
    if args.disable_cut_lines {
        request.cut_lines = false;
    }
    if let Some(output) = args.output {
        request.output_dir = output;
    }
    if let Some(layout) = args.layout {
        request.layout_dir = Some(layout);
    }
    if let Some(cards_per_page) = args.cards_per_page {
        request.cards_per_page = cards_per_page;
    }

    request
}
