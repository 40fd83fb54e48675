//! Data records - one input row split into content and control fields
//!
//! Column names starting with [`CONTROL_MARKER`] are control fields. They steer
//! generation (repeat count, template override) and are never rendered.

pub mod source;

pub use source::{read_records, read_records_from_reader};

/// Marker character that distinguishes control columns from content columns
pub const CONTROL_MARKER: char = '@';

/// A control column recognised by the generator
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControlField {
    /// `@count` - how many copies of the card to generate
    Count,
    /// `@template` - per-row card template override
    Template,
    /// Any other `@`-prefixed column, kept but ignored
    Other(String),
}

impl ControlField {
    /// Classify a control column by its name without the marker
    pub fn from_name(name: &str) -> Self {
        match name {
            "count" => ControlField::Count,
            "template" => ControlField::Template,
            other => ControlField::Other(other.to_string()),
        }
    }
}

/// One row of card data
///
/// Content fields keep their insertion order, which is also the substitution
/// order used by the template engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataRecord {
    fields: Vec<(String, String)>,
    controls: Vec<(ControlField, String)>,
}

impl DataRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column, routing it to the content or control fields by name
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match name.strip_prefix(CONTROL_MARKER) {
            Some(control) => self.controls.push((ControlField::from_name(control), value)),
            None => self.fields.push((name, value)),
        }
    }

    /// Builder form of [`DataRecord::insert`]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Content fields in insertion order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Value of the first content field called `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    /// Value of the first control field of the given kind
    pub fn control(&self, field: &ControlField) -> Option<&str> {
        self.controls
            .iter()
            .find(|(control, _)| control == field)
            .map(|(_, value)| value.as_str())
    }

    /// Number of cards to generate from this row
    ///
    /// Absent, empty or non-numeric counts mean one card; negative counts
    /// mean none.
    pub fn repeat_count(&self) -> usize {
        match self.control(&ControlField::Count) {
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(count) => usize::try_from(count).unwrap_or(0),
                Err(_) => 1,
            },
            None => 1,
        }
    }

    /// Non-empty `@template` value, if any
    pub fn template_override(&self) -> Option<&str> {
        self.control(&ControlField::Template)
            .filter(|path| !path.is_empty())
    }

    /// Number of content fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record has no content fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for DataRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = DataRecord::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}
