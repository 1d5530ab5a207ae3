/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Render minutes as `1h 5m`, or `25m` when under an hour.
pub fn format_duration(minutes: f64) -> String {
    let total = minutes.max(0.0).round() as i64;
    let hours = total / 60;
    let mins = total % 60;

    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

/// `1 short stop`, `2 short stops`.
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
