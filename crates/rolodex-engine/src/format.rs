//! Display formatting for raw record fields.
//!
//! Malformed input falls back to something printable instead of failing:
//! a phone number without exactly ten digits comes back as its bare digits,
//! and a date that is not a `YYYY-MM-DD` prefix of a longer timestamp comes
//! back untouched.

use regex::Regex;
use std::sync::LazyLock;

static DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2}).").unwrap());

/// `"(489)-330-2385"` -> `"(489) 330-2385"`
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() != 10 {
        return digits;
    }

    format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
}

/// `"1990-05-03T00:00:00Z"` -> `"05/03/1990"`
pub fn format_date(iso: &str) -> String {
    match DATE_PREFIX.captures(iso) {
        Some(caps) => format!("{}/{}/{}", &caps[2], &caps[3], &caps[1]),
        None => iso.to_string(),
    }
}
