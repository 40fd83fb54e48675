//! Preview command - print one rendered card without writing pages

use crate::cli::PreviewArgs;
use crate::context::Context;
use crate::output::print_text;
use anyhow::Result;
use cardpress_core::deck::{preview_card, DeckRequest};
use colored::Colorize;
use std::path::Path;

pub fn run(args: PreviewArgs, config_path: Option<&Path>, verbose: bool) -> Result<()> {
    let ctx = Context::new(config_path, verbose)?;

    let mut request =
        DeckRequest::from_config(&ctx.config, args.deck.filename, args.deck.template);
    if let Some(version) = args.version_identifier {
        request.version = version;
    }

    if ctx.verbose {
        eprintln!("{} Rendering row {}", "→".cyan(), args.row);
    }

    let content = preview_card(&request, args.row)?;
    print_text(&content)?;

    Ok(())
}
