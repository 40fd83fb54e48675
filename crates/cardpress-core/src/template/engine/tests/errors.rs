//! Error handling tests for template engine

use super::*;

#[test]
fn test_error_malformed_size() {
    let result = expand_images("{{a/b.svg:abcxdef}}");
    match result {
        Err(TemplateError::MalformedImageSize { field, span, .. }) => {
            assert_eq!(field, None);
            assert_eq!(span, "a/b.svg:abcxdef");
        }
        _ => panic!("Expected MalformedImageSize error"),
    }
}

#[test]
fn test_error_malformed_height_only() {
    let result = expand_images("{{a.png:16xbig}}");
    assert!(matches!(
        result,
        Err(TemplateError::MalformedImageSize { .. })
    ));
}

#[test]
fn test_error_empty_dimension() {
    let result = expand_images("{{a.png:x}}");
    assert!(matches!(
        result,
        Err(TemplateError::MalformedImageSize { .. })
    ));
}

#[test]
fn test_error_reports_field_name() {
    let record = DataRecord::from_iter([("name", "Ace"), ("art", "{{ace.png:wxh}}")]);
    let result = render("{{name}}", &record);
    match result {
        Err(TemplateError::MalformedImageSize { field, .. }) => {
            assert_eq!(field.as_deref(), Some("art"));
        }
        _ => panic!("Expected MalformedImageSize error"),
    }
}

#[test]
fn test_error_message_mentions_span_and_field() {
    let record = DataRecord::from_iter([("art", "{{ace.png:1xq}}")]);
    let err = render("{{art}}", &record).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("{{ace.png:1xq}}"));
    assert!(message.contains("'art'"));
}

#[test]
fn test_control_field_with_bad_size_is_ignored() {
    let record = DataRecord::from_iter([("@note", "{{a.png:zzxzz}}"), ("name", "Ace")]);
    assert_eq!(render("{{name}}", &record).unwrap(), "Ace");
}
