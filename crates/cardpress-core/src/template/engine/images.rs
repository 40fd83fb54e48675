//! Image field expansion
//!
//! Rewrites `{{path}}` and `{{path:WIDTHxHEIGHT}}` spans inside a field value
//! into `<img>` tags.

use crate::template::error::TemplateError;
use tracing::trace;

use super::helpers::find_span;

/// Separator between the image path and its size suffix
const SIZE_SEPARATOR: char = ':';

/// Separator between width and height in the size suffix
const DIMENSION_SEPARATOR: char = 'x';

/// An image reference parsed from the inside of a span
#[derive(Debug, Clone, PartialEq, Eq)]
struct ImageRef<'a> {
    path: &'a str,
    size: Option<(u64, u64)>,
}

impl<'a> ImageRef<'a> {
    /// Parse `path`, `path:WxH` or `path:suffix`
    ///
    /// A suffix that does not split into exactly two parts is part of the path.
    /// A negative dimension drops the size but still strips the suffix.
    fn parse(inner: &'a str) -> Result<Self, TemplateError> {
        let whole = ImageRef {
            path: inner,
            size: None,
        };

        let Some(separator) = inner.rfind(SIZE_SEPARATOR) else {
            return Ok(whole);
        };

        let path = &inner[..separator];
        let suffix = &inner[separator + SIZE_SEPARATOR.len_utf8()..];
        let parts: Vec<&str> = suffix.split(DIMENSION_SEPARATOR).collect();

        let [width, height] = parts.as_slice() else {
            return Ok(whole);
        };

        let malformed = |reason| TemplateError::MalformedImageSize {
            field: None,
            span: inner.to_string(),
            reason,
        };
        let width = parse_dimension(width).map_err(malformed)?;
        let height = parse_dimension(height).map_err(malformed)?;

        Ok(ImageRef {
            path,
            size: width.zip(height),
        })
    }

    fn to_tag(&self) -> String {
        match self.size {
            Some((width, height)) => format!(
                r#"<img src="{}" width="{}" height="{}">"#,
                self.path, width, height
            ),
            None => format!(r#"<img src="{}">"#, self.path),
        }
    }
}

/// Parse one dimension; negative values mean "not specified"
///
/// Dimensions must fit in `i64`; larger values are a parse error.
fn parse_dimension(text: &str) -> Result<Option<u64>, std::num::ParseIntError> {
    let value: i64 = text.trim().parse()?;
    Ok(u64::try_from(value).ok())
}

/// Expand every image span in `value` into an `<img>` tag
///
/// Spans are processed left to right. After each replacement scanning resumes
/// at the start of the inserted tag, so a `{{` carried in a path is still
/// matched. Empty spans (`{{}}`) are left as literal text.
///
/// # Errors
///
/// Returns [`TemplateError::MalformedImageSize`] when a two-part size suffix
/// is not numeric.
pub fn expand_images(value: &str) -> Result<String, TemplateError> {
    let mut output = value.to_string();
    let mut cursor = 0;

    while let Some(span) = find_span(&output, cursor) {
        let inner = span.inner(&output);
        if inner.is_empty() {
            cursor = span.end;
            continue;
        }

        let tag = ImageRef::parse(inner)?.to_tag();
        trace!(image = inner, tag = %tag, "expanding image field");

        output.replace_range(span.start..span.end, &tag);
        cursor = span.start;
    }

    Ok(output)
}
