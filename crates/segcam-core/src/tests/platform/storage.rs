use crate::platform::{SEGMENT_MIME_TYPE, SEGMENT_RELATIVE_PATH, SegmentEntry};

use chrono::{TimeZone, Utc};

/// WHAT: Segment entries are named by their creation time in milliseconds
/// WHY: Naming is the only segment index the recorder keeps
#[test]
#[allow(clippy::unwrap_used)]
fn given_timestamp_when_creating_entry_then_named_by_unix_millis() {
    // Given: A fixed creation time
    let created_at = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();

    // When: Building the entry
    let entry = SegmentEntry::at(created_at);

    // Then: Name, MIME type and folder are fixed
    assert_eq!(entry.display_name, "video_1700000000123.mp4");
    assert_eq!(entry.mime_type, SEGMENT_MIME_TYPE);
    assert_eq!(entry.relative_path, SEGMENT_RELATIVE_PATH);
}

/// WHAT: Entries created a millisecond apart get distinct names
/// WHY: Collisions are only possible within the same millisecond
#[test]
#[allow(clippy::unwrap_used)]
fn given_consecutive_milliseconds_when_creating_entries_then_names_differ() {
    // Given: Two instants one millisecond apart
    let first = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
    let second = Utc.timestamp_millis_opt(1_700_000_000_001).unwrap();

    // When/Then: Names differ
    assert_ne!(
        SegmentEntry::at(first).display_name,
        SegmentEntry::at(second).display_name
    );
}
