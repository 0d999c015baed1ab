//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the client.

use std::sync::OnceLock;
use chrono::{Datelike, NaiveDate};
use regex::Regex;

/// Parse the leading integer of a form value the way browsers do:
/// surrounding whitespace is skipped, an optional sign is accepted and
/// parsing stops at the first non-digit. `None` when no digit is found.
pub fn parse_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.chars().next() {
        Some('-') => (true, &trimmed[1..]),
        Some('+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    let value = digits.parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

/// Parse an integer form value, falling back to `default` when it is not numeric
pub fn parse_int_or(text: &str, default: i64) -> i64 {
    parse_int(text).unwrap_or(default)
}

/// Turn an empty form value into `None`
pub fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn phone_noise() -> &'static Regex {
    static PHONE_NOISE: OnceLock<Regex> = OnceLock::new();
    PHONE_NOISE.get_or_init(|| Regex::new(r"[\s()\-]").expect("static regex"))
}

/// Build a `tel:` link, dropping spaces, parentheses and dashes
pub fn tel_link(phone: &str) -> String {
    format!("tel:{}", phone_noise().replace_all(phone, ""))
}

/// Strip a leading `@` from a Telegram username
pub fn telegram_username(username: &str) -> String {
    username.trim().trim_start_matches('@').to_string()
}

/// Build a public Telegram profile link
pub fn telegram_link(username: &str) -> String {
    format!("https://t.me/{}", telegram_username(username))
}

/// Authorization codes are exactly six characters once trimmed
pub fn is_valid_code_length(code: &str) -> bool {
    code.trim().chars().count() == 6
}

/// CSS class for the remaining-lessons balance of a subscription
pub fn balance_class(remaining: i64) -> &'static str {
    if remaining <= 0 {
        "zero"
    } else if remaining <= 1 {
        "low"
    } else if remaining <= 3 {
        "medium"
    } else {
        "normal"
    }
}

/// CSS class for an attendance percentage
pub fn percentage_class(percentage: f64) -> &'static str {
    if percentage >= 80.0 {
        "high"
    } else if percentage >= 60.0 {
        "medium"
    } else {
        "low"
    }
}

/// Format an ISO date (`YYYY-MM-DD`, optionally followed by a time) as `DD.MM.YYYY`;
/// unparseable input is returned unchanged
pub fn format_ru_date(date: &str) -> String {
    let day_part = date.get(..10).unwrap_or(date);
    match NaiveDate::parse_from_str(day_part, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%d.%m.%Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Group thousands with spaces: `12500` -> `12 500`
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Full years between a `YYYY-MM-DD` birth date and `today`
pub fn age_on(birth_date: &str, today: NaiveDate) -> Option<i32> {
    let born = NaiveDate::parse_from_str(birth_date.trim(), "%Y-%m-%d").ok()?;
    let mut age = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        age -= 1;
    }
    Some(age)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("15"), Some(15));
        assert_eq!(parse_int("  15%"), Some(15));
        assert_eq!(parse_int("-3"), Some(-3));
        assert_eq!(parse_int("12.9"), Some(12));
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int_or("", 0), 0);
    }

    #[test]
    fn test_links() {
        assert_eq!(tel_link("+7 (902) 923-71-93"), "tel:+79029237193");
        assert_eq!(telegram_link("@Taiky_admin"), "https://t.me/Taiky_admin");
        assert_eq!(telegram_link("Taiky_admin"), "https://t.me/Taiky_admin");
    }

    #[test]
    fn test_auth_code_checks() {
        assert!(is_valid_code_length(" 123456 "));
        assert!(!is_valid_code_length("12345"));
    }

    #[test]
    fn test_balance_and_percentage_classes() {
        assert_eq!(balance_class(0), "zero");
        assert_eq!(balance_class(1), "low");
        assert_eq!(balance_class(3), "medium");
        assert_eq!(balance_class(8), "normal");
        assert_eq!(percentage_class(80.0), "high");
        assert_eq!(percentage_class(60.0), "medium");
        assert_eq!(percentage_class(59.9), "low");
    }

    #[test]
    fn test_format_ru_date() {
        assert_eq!(format_ru_date("2024-03-05"), "05.03.2024");
        assert_eq!(format_ru_date("2024-03-05T10:00:00"), "05.03.2024");
        assert_eq!(format_ru_date("soon"), "soon");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(500), "500");
        assert_eq!(format_thousands(12500), "12 500");
        assert_eq!(format_thousands(1234567), "1 234 567");
    }

    #[test]
    fn test_age_on() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(age_on("2016-06-01", today), Some(8));
        assert_eq!(age_on("2016-06-02", today), Some(7));
        assert_eq!(age_on("not a date", today), None);
    }

    proptest! {
        #[test]
        fn parse_int_matches_std_for_plain_numbers(n in -1_000_000i64..1_000_000) {
            prop_assert_eq!(parse_int(&n.to_string()), Some(n));
        }

        #[test]
        fn parse_int_ignores_trailing_garbage(n in 0i64..100_000, tail in "[a-z%]{0,4}") {
            prop_assert_eq!(parse_int(&format!("{}{}", n, tail)), Some(n));
        }
    }
}
