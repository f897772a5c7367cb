//! Display helpers for turning calculation results into user-facing text.

/// Target distance band the LED intensity is suited for.
pub fn distance_guide(led_power_percent: u32) -> &'static str {
    match led_power_percent {
        0..=10 => "≤10m targets",
        11..=25 => "10-35m targets",
        26..=50 => "35-60m targets",
        _ => "60-100m targets",
    }
}

/// Interval in the largest unit that keeps it at or above one.
pub fn format_interval(seconds: u32) -> String {
    let seconds = seconds as f64;
    if seconds < 3600.0 {
        format!("{} minutes", seconds / 60.0)
    } else if seconds < 86400.0 {
        format!("{} hours", seconds / 3600.0)
    } else {
        format!("{} days", seconds / 86400.0)
    }
}

/// `"6m 31s"` style duration; minutes truncate, seconds round.
pub fn format_duration(seconds: f64) -> String {
    let mins = (seconds / 60.0).floor();
    let secs = (seconds % 60.0).round();
    format!("{}m {}s", mins, secs)
}

/// Thousands-grouped number with at most three fractional digits.
pub fn format_count(value: f64) -> String {
    let rendered = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let frac = frac_part.trim_end_matches('0');
    let sign = if value < 0.0 && (int_part != "0" || !frac.is_empty()) { "-" } else { "" };
    if frac.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac)
    }
}

/// Share of `part` in `total`, in percent. Zero when there is no total.
pub fn share_percent(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    part / total * 100.0
}
