//! Formatting utilities for money, rates, durations and dates.

/// Format a dollar amount compactly (e.g., "$1.2M", "$45K", "$950").
pub fn format_currency(amount: f64) -> String {
    let abs = amount.abs();
    let sign = if amount < 0.0 { "-" } else { "" };
    if abs >= 1_000_000.0 {
        format!("{sign}${:.1}M", abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{sign}${:.0}K", abs / 1_000.0)
    } else {
        format!("{sign}${abs:.0}")
    }
}

/// Format a dollar amount with thousands separators (e.g., "$125,000").
pub fn format_currency_full(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{sign}${grouped}")
}

/// Format a percentage already expressed on a 0-100 scale.
///
/// Whole numbers print without decimals ("52%"), others with one ("41.7%").
pub fn format_percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}%")
    } else {
        format!("{value:.1}%")
    }
}

/// Format a number of days (e.g., "34d", "41.5d").
pub fn format_days(days: f64) -> String {
    if days.fract() == 0.0 {
        format!("{days:.0}d")
    } else {
        format!("{days:.1}d")
    }
}

/// Format a call length in seconds (e.g., "30m 5s", "1h 02m").
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    let (hours, minutes, secs) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{hours}h {minutes:02}m")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

/// Format an offset into a call as a timestamp (e.g., "04:07", "1:02:03").
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    let (hours, minutes, secs) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

/// Date part of an ISO-8601 timestamp ("2024-02-01T10:00:00Z" -> "2024-02-01").
pub fn format_date(iso: &str) -> &str {
    iso.split_once('T').map_or(iso, |(date, _)| date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(2_450_000.0), "$2.5M");
        assert_eq!(format_currency(48_200.0), "$48K");
        assert_eq!(format_currency(950.0), "$950");
        assert_eq!(format_currency(-12_000.0), "-$12K");
    }

    #[test]
    fn test_format_currency_full() {
        assert_eq!(format_currency_full(125_000.0), "$125,000");
        assert_eq!(format_currency_full(1_234_567.4), "$1,234,567");
        assert_eq!(format_currency_full(999.0), "$999");
        assert_eq!(format_currency_full(0.0), "$0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(52.0), "52%");
        assert_eq!(format_percent(41.66), "41.7%");
    }

    #[test]
    fn test_format_days() {
        assert_eq!(format_days(34.0), "34d");
        assert_eq!(format_days(41.5), "41.5d");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(1805.0), "30m 5s");
        assert_eq!(format_duration(3720.0), "1h 02m");
        assert_eq!(format_duration(42.0), "42s");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(247.9), "04:07");
        assert_eq!(format_timestamp(3723.0), "1:02:03");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-02-01T10:00:00Z"), "2024-02-01");
        assert_eq!(format_date("2024-02-01"), "2024-02-01");
    }
}
