//! Duration formatting for sleep and activity displays.

/// Split a minute count into whole hours and remaining minutes
pub fn split_minutes(total_minutes: u32) -> (u32, u32) {
    (total_minutes / 60, total_minutes % 60)
}

/// Format a minute count as `"2h 5m"`, `"2 hours"`, `"45 minutes"` or `"0 hours"`
///
/// Wording is not pluralized: one hour still reads `"1 hours"`.
pub fn format_minutes(total_minutes: u32) -> String {
    match split_minutes(total_minutes) {
        (0, 0) => "0 hours".to_string(),
        (hours, 0) => format!("{} hours", hours),
        (0, minutes) => format!("{} minutes", minutes),
        (hours, minutes) => format!("{}h {}m", hours, minutes),
    }
}
