//! Configuration - optional `cardpress.toml` with per-deck defaults

pub mod consts;
pub mod model;

pub use model::{Config, DeckConfig, LayoutConfig, OutputConfig};
