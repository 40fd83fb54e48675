//! Template engine implementation

mod helpers;
mod images;

use crate::record::DataRecord;
use crate::template::error::TemplateError;

use helpers::{CLOSE, OPEN};

pub use images::expand_images;

/// Build the literal `{{name}}` token for a field or keyword
pub fn placeholder(name: &str) -> String {
    format!("{OPEN}{name}{CLOSE}")
}

/// Replace every `{{key}}` in `text` with `value`
///
/// No image expansion is applied; used for system keywords such as
/// `card_index` or `cards_total`.
pub fn substitute(text: &str, key: &str, value: &str) -> String {
    text.replace(&placeholder(key), value)
}

/// Template engine for rendering card templates with a data record
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateEngine;

impl TemplateEngine {
    /// Create a new template engine
    pub fn new() -> Self {
        Self
    }

    /// Render a template with the given record
    ///
    /// Content fields are visited in record order. Each value is passed through
    /// [`expand_images`] and then replaces every literal `{{name}}` in the
    /// output so far. Control fields never take part.
    ///
    /// # Errors
    ///
    /// Returns an error if any content field holds a malformed image size,
    /// whether or not its placeholder appears in the template.
    pub fn render(&self, template: &str, record: &DataRecord) -> Result<String, TemplateError> {
        let mut output = template.to_string();

        for (name, value) in record.fields() {
            let value = expand_images(value).map_err(|e| e.in_field(name))?;
            output = substitute(&output, name, &value);
        }

        Ok(output)
    }
}

/// Convenience function to render a template
pub fn render(template: &str, record: &DataRecord) -> Result<String, TemplateError> {
    TemplateEngine::new().render(template, record)
}

#[cfg(test)]
mod tests;
