// Core modules
pub mod config;
pub mod deck;
pub mod error;
pub mod record;
pub mod template;

// Re-export commonly used types
pub use error::{CardpressError, Result};
