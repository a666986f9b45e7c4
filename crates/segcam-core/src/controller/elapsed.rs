use std::time::Duration;

/// Render an elapsed duration as `HH:MM:SS`.
///
/// Hours are not wrapped, so a 25 hour session renders as `25:00:00`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        (total / 60) % 60,
        total % 60
    )
}
