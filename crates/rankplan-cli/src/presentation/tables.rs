//! Table formatting utilities for CLI output.

use chrono::{DateTime, Utc};

/// Truncates a string to a maximum length in characters, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use rankplan_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Format an optional value for table display, returning a default if None.
pub fn format_optional<T: std::fmt::Display>(value: Option<&T>, default: &str) -> String {
    value.map_or_else(|| default.to_string(), ToString::to_string)
}

/// Calendar date, or full timestamp when the time is not midnight.
pub fn format_date(date: DateTime<Utc>) -> String {
    if date.time() == chrono::NaiveTime::MIN {
        date.format("%Y-%m-%d").to_string()
    } else {
        date.format("%Y-%m-%d %H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate_string("Überstunden-Plan", 8), "Übers...");
        assert_eq!(truncate_string("abc", 3), "abc");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(Some(&5), "--"), "5");
        assert_eq!(format_optional::<String>(None, "--"), "--");
    }

    #[test]
    fn test_format_date() {
        let midnight = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 1, 31, 9, 30, 0).unwrap();
        assert_eq!(format_date(midnight), "2024-01-31");
        assert_eq!(format_date(later), "2024-01-31 09:30");
    }
}
