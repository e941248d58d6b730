//! Key/value scanning over raw ACPI file content.
//!
//! The proc files are loosely formatted (`present rate:     1234 mW`), so the
//! scanner does a plain substring search for the key and takes the first
//! whitespace-delimited token after it. There is no line anchoring: a key that
//! occurs inside another line matches there too.

/// Find `key` in `buf` and return the token that follows it.
///
/// Spaces and tabs right after the key are skipped, then everything up to the
/// next space, tab, CR or LF is captured. An empty capture is still `Some`.
pub fn scan_value(buf: &str, key: &str) -> Option<String> {
    let start = buf.find(key)? + key.len();
    let rest = buf[start..].trim_start_matches([' ', '\t']);
    let end = rest
        .find([' ', '\t', '\r', '\n'])
        .unwrap_or(rest.len());

    Some(rest[..end].to_string())
}

/// Parse the leading base-10 integer of `token`.
///
/// Leading whitespace and one sign are accepted, parsing stops at the first
/// non-digit, and a token with no digits is 0. Out-of-range values saturate.
pub fn parse_int(token: &str) -> i32 {
    let s = token.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = (value * 10 + i64::from(b - b'0')).min(i64::from(i32::MAX) + 1);
    }
    if negative {
        value = -value;
    }

    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_simple_pair() {
        assert_eq!(scan_value("state: on-line\n", "state:"), Some("on-line".to_string()));
    }

    #[test]
    fn test_scan_missing_key() {
        assert_eq!(scan_value("present: yes\n", "alarm:"), None);
        assert_eq!(scan_value("", "alarm:"), None);
    }

    #[test]
    fn test_scan_skips_padding_and_stops_at_unit() {
        let buf = "present:                 yes\nremaining capacity:\t\t3880 mAh\r\n";
        assert_eq!(scan_value(buf, "present:"), Some("yes".to_string()));
        assert_eq!(scan_value(buf, "remaining capacity:"), Some("3880".to_string()));
    }

    #[test]
    fn test_scan_value_at_end_of_buffer() {
        assert_eq!(scan_value("alarm: 100", "alarm:"), Some("100".to_string()));
    }

    #[test]
    fn test_scan_empty_capture() {
        assert_eq!(scan_value("status:\n", "status:"), Some(String::new()));
    }

    #[test]
    fn test_scan_is_not_line_anchored() {
        // "state:" also matches inside "charging state:"
        let buf = "present: yes\ncharging state: discharging\n";
        assert_eq!(scan_value(buf, "state:"), Some("discharging".to_string()));
    }

    #[test]
    fn test_scan_first_occurrence_wins() {
        let buf = "temperature: 45 C\ntemperature: 50 C\n";
        assert_eq!(scan_value(buf, "temperature:"), Some("45".to_string()));
    }

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int("4400"), 4400);
        assert_eq!(parse_int("12mAh"), 12);
        assert_eq!(parse_int("  -15"), -15);
        assert_eq!(parse_int("+7"), 7);
        assert_eq!(parse_int("abc"), 0);
        assert_eq!(parse_int(""), 0);
    }

    #[test]
    fn test_parse_int_saturates() {
        assert_eq!(parse_int("99999999999999"), i32::MAX);
        assert_eq!(parse_int("-99999999999999"), i32::MIN);
    }
}
