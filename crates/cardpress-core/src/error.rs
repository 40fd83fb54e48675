use crate::template::TemplateError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardpressError {
    // Data errors
    #[error("DATA_NOT_FOUND: data file '{path}' not found")]
    DataNotFound { path: PathBuf },

    #[error("DATA_INVALID: {0}")]
    DataInvalid(String),

    #[error("ROW_OUT_OF_RANGE: row {row} requested but the data has {rows} row(s)")]
    RowOutOfRange { row: usize, rows: usize },

    // Template errors
    #[error("TEMPLATE_NOT_FOUND: template '{path}' not found")]
    TemplateNotFound { path: PathBuf },

    #[error("RENDER_FAILED: row {row}")]
    Render { row: usize, source: TemplateError },

    // Layout errors
    #[error("LAYOUT_NOT_FOUND: layout directory '{path}' not found")]
    LayoutNotFound { path: PathBuf },

    #[error("LAYOUT_INVALID: {0}")]
    LayoutInvalid(String),

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CardpressError>;
