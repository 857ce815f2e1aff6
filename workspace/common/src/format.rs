//! Number and date rendering shared by the CLI report and the browser view.

use chrono::{DateTime, NaiveDateTime};

/// Groups digits in threes, e.g. `48210` -> `48,210`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Percentage with one decimal, e.g. `65.2%`.
pub fn share(percent: f64) -> String {
    format!("{:.1}%", percent)
}

/// Renders the pipeline's `generated_at` stamp. Accepts RFC 3339 and the
/// offset-less ISO form Python's `isoformat()` produces; anything else is
/// shown verbatim.
pub fn timestamp(raw: &str) -> String {
    const DISPLAY: &str = "%Y-%m-%d %H:%M:%S";

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format(DISPLAY).to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format(DISPLAY).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(48210), "48,210");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_share() {
        assert_eq!(share(65.2358), "65.2%");
        assert_eq!(share(0.0), "0.0%");
    }

    #[test]
    fn test_timestamp() {
        assert_eq!(timestamp("2024-12-31T18:45:12.204311"), "2024-12-31 18:45:12");
        assert_eq!(timestamp("2024-12-31T18:45:12"), "2024-12-31 18:45:12");
        assert_eq!(timestamp("2024-12-31T18:45:12+02:00"), "2024-12-31 18:45:12");
        assert_eq!(timestamp("yesterday"), "yesterday");
    }
}
