use crate::format_elapsed;

use std::time::Duration;

/// WHAT: Elapsed time renders as zero-padded HH:MM:SS
/// WHY: The timer label format is fixed
#[test]
fn given_durations_when_formatting_then_hours_minutes_seconds_padded() {
    // Given/When/Then: Boundaries of each field
    assert_eq!(format_elapsed(Duration::ZERO), "00:00:00");
    assert_eq!(format_elapsed(Duration::from_millis(999)), "00:00:00");
    assert_eq!(format_elapsed(Duration::from_secs(1)), "00:00:01");
    assert_eq!(format_elapsed(Duration::from_secs(59)), "00:00:59");
    assert_eq!(format_elapsed(Duration::from_secs(60)), "00:01:00");
    assert_eq!(format_elapsed(Duration::from_secs(3599)), "00:59:59");
    assert_eq!(format_elapsed(Duration::from_secs(3600)), "01:00:00");
}

/// WHAT: Hours keep counting past a day
/// WHY: Long sessions must not wrap back to 00
#[test]
fn given_multi_day_duration_when_formatting_then_hours_not_wrapped() {
    // Given: 100 hours, 2 minutes, 3 seconds
    let elapsed = Duration::from_secs(100 * 3600 + 2 * 60 + 3);

    // When: Formatting
    let text = format_elapsed(elapsed);

    // Then: Hours are printed in full
    assert_eq!(text, "100:02:03");
}
