//! Shared test helpers for template engine tests

use crate::record::DataRecord;

/// A record with plain text values only
pub(super) fn simple_record() -> DataRecord {
    DataRecord::from_iter([("name", "Ace"), ("suit", "Spades"), ("rank", "1")])
}

/// A record mixing content, image and control fields
pub(super) fn card_record() -> DataRecord {
    DataRecord::from_iter([
        ("@count", "2"),
        ("name", "Ace"),
        ("art", "{{cards/ace.png:32x32}}"),
        ("@template", "back.html"),
        ("icon", "{{icons/spade.svg}}"),
    ])
}
