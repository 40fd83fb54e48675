//! CLI command structure using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cardpress")]
#[command(version, about = "Generate printable sheets of cards", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to ./cardpress.toml when present)
    #[arg(long, global = true, env = "CARDPRESS_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate printable pages from card data
    Generate(GenerateArgs),

    /// Print the rendered content of a single card
    Preview(PreviewArgs),
}

/// Inputs shared by every command
#[derive(Args)]
pub struct DeckArgs {
    /// A path to a CSV file containing card data
    #[arg(short = 'f', long)]
    pub filename: PathBuf,

    /// A path to a card template
    #[arg(short, long)]
    pub template: PathBuf,
}

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub deck: DeckArgs,

    /// The title of the generated cards
    #[arg(short = 'T', long)]
    pub title: Option<String>,

    /// The description of the generated cards
    #[arg(short = 'D', long)]
    pub description: Option<String>,

    /// A version identifier put on each card through {{version}}
    #[arg(short = 'V', long)]
    pub version_identifier: Option<String>,

    /// Disable cut guides on the margins of the generated pages
    #[arg(long)]
    pub disable_cut_lines: bool,

    /// Directory the pages are written to
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory with index.html, page.html, card.html or index.css overrides
    #[arg(long)]
    pub layout: Option<PathBuf>,

    /// Maximum number of cards on one page
    #[arg(long, value_parser = parse_cards_per_page)]
    pub cards_per_page: Option<usize>,
}

#[derive(Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub deck: DeckArgs,

    /// Data row to render (1-based, header excluded)
    #[arg(short, long, default_value_t = 1)]
    pub row: usize,

    /// A version identifier put on the card through {{version}}
    #[arg(short = 'V', long)]
    pub version_identifier: Option<String>,
}

fn parse_cards_per_page(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
