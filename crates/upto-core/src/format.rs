//! Display helpers for hour values.

/// Formats fractional hours as `H:MM` (e.g. `2.5` -> `"2:30"`).
///
/// Minutes come from the fractional part of the hour value. Negative values
/// keep their sign in front (`-4.5` -> `"-4:30"`); non-finite input renders
/// as `"--:--"`.
pub fn format_clock(hours: f64) -> String {
    if !hours.is_finite() {
        return "--:--".to_string();
    }
    if hours < 0.0 {
        return format!("-{}", format_clock(-hours));
    }
    let (h, m) = split_hours(hours);
    format!("{}:{:02}", h, m)
}

/// Formats a duration for humans: `"45 minutes"`, `"3 hours"`, `"2h 30min"`.
///
/// Negative and non-finite values are treated as zero.
pub fn format_duration(hours: f64) -> String {
    let hours = if hours.is_finite() {
        hours.max(0.0)
    } else {
        0.0
    };
    let (h, m) = split_hours(hours);
    if h == 0 {
        format!("{} minutes", m)
    } else if m == 0 {
        format!("{} hour{}", h, if h == 1 { "" } else { "s" })
    } else {
        format!("{}h {}min", h, m)
    }
}

/// Range shown next to a realistic total (0.85x to 1.25x).
pub fn format_time_range(hours: f64) -> String {
    format!(
        "{} - {}",
        format_duration(hours * 0.85),
        format_duration(hours * 1.25)
    )
}

/// Whole hours and rounded minutes; 59.6 minutes carries into the next hour.
fn split_hours(hours: f64) -> (u64, u64) {
    let whole = hours.floor();
    let mut h = whole as u64;
    let mut m = ((hours - whole) * 60.0).round() as u64;
    if m >= 60 {
        h += 1;
        m -= 60;
    }
    (h, m)
}
