//! Template module - literal placeholder substitution for card templates
//!
//! This module turns a card template plus one data record into card content.
//!
//! ## Syntax
//!
//! - Field placeholders: `{{name}}`, replaced by the record field `name`
//! - Image fields, recognised only inside field *values*:
//!   - `{{images/ace.svg}}` → `<img src="images/ace.svg">`
//!   - `{{images/ace.svg:16x16}}` → `<img src="images/ace.svg" width="16" height="16">`
//!
//! Substitution is literal text replacement in record order, not a grammar.
//! Placeholders without a matching field are left untouched.

pub mod engine;
pub mod error;

pub use engine::{expand_images, placeholder, render, substitute, TemplateEngine};
pub use error::TemplateError;
