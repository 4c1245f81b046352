//! Live input formatting for masked fields

/// Longest phone number the mask can hold (3 + 3 + 4 digits)
pub const PHONE_MAX_DIGITS: usize = 10;

/// Extract the digits of a phone value, keeping at most the first ten.
///
/// Anything typed or pasted past ten digits is dropped.
pub fn phone_digits(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_MAX_DIGITS)
        .collect()
}

/// Format raw phone input as a (partial) `(DDD) DDD-DDDD` mask.
///
/// - fewer than 3 digits pass through unformatted
/// - 3 to 5 digits: `(DDD) D..`
/// - 6 or more: `(DDD) DDD-D...`
pub fn format_phone(raw: &str) -> String {
    let digits = phone_digits(raw);
    match digits.len() {
        0..=2 => digits,
        3..=5 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

/// Prefix a non-empty Venmo handle with `@` unless it already has one
pub fn format_venmo(raw: &str) -> String {
    if raw.is_empty() || raw.starts_with('@') {
        raw.to_string()
    } else {
        format!("@{raw}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::validation::PHONE_PATTERN;

    #[test]
    fn test_full_phone_number() {
        assert_eq!(format_phone("5551234567"), "(555) 123-4567");
    }

    #[test]
    fn test_partial_area_code() {
        assert_eq!(format_phone("5"), "5");
        assert_eq!(format_phone("55"), "55");
    }

    #[test]
    fn test_partial_exchange() {
        assert_eq!(format_phone("555"), "(555) ");
        assert_eq!(format_phone("55512"), "(555) 12");
    }

    #[test]
    fn test_partial_line_number() {
        assert_eq!(format_phone("555123"), "(555) 123-");
        assert_eq!(format_phone("5551234"), "(555) 123-4");
    }

    #[test]
    fn test_extra_digits_truncated() {
        assert_eq!(format_phone("555123456789"), "(555) 123-4567");
        assert_eq!(format_phone("(555) 123-45678"), "(555) 123-4567");
    }

    #[test]
    fn test_strips_non_digits() {
        assert_eq!(format_phone("+1 (555) abc"), "(155) 5");
        assert_eq!(format_phone("abc"), "");
        assert_eq!(format_phone("555.123.4567"), "(555) 123-4567");
    }

    #[test]
    fn test_reformatting_is_stable() {
        for raw in ["5", "555", "55512", "555123", "5551234567"] {
            let once = format_phone(raw);
            assert_eq!(format_phone(&once), once, "input {raw}");
        }
    }

    #[test]
    fn test_long_digit_runs_match_full_mask() {
        let all = "98765432109876543210";
        for len in PHONE_MAX_DIGITS..=all.len() {
            let formatted = format_phone(&all[..len]);
            assert!(PHONE_PATTERN.is_match(&formatted), "{formatted}");
            assert_eq!(phone_digits(&formatted), &all[..PHONE_MAX_DIGITS]);
        }
    }

    #[test]
    fn test_shorter_digit_runs_are_mask_prefixes() {
        let full = format_phone("9876543210");
        let all = "9876543210";
        for len in 0..PHONE_MAX_DIGITS {
            let formatted = format_phone(&all[..len]);
            if len >= 3 {
                assert!(full.starts_with(&formatted), "{formatted}");
            }
            assert!(formatted.chars().all(|c| c.is_ascii_digit() || "() -".contains(c)));
        }
    }

    #[test]
    fn test_venmo_prefix_added() {
        assert_eq!(format_venmo("jane"), "@jane");
    }

    #[test]
    fn test_venmo_prefix_idempotent() {
        assert_eq!(format_venmo("@jane"), "@jane");
        assert_eq!(format_venmo(&format_venmo("jane")), "@jane");
    }

    #[test]
    fn test_venmo_empty_stays_empty() {
        assert_eq!(format_venmo(""), "");
    }
}
