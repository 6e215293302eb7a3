//! Lenient rating parsing.
//!
//! The form only checks presence, so rating text is read from its leading
//! numeric prefix and anything unreadable becomes `NaN`.

use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|\d+\.?\d*(?:[eE][+-]?\d+)?|\.\d+(?:[eE][+-]?\d+)?)")
        .expect("valid numeric prefix regex")
});

/// Parses the leading numeric prefix of `text`.
///
/// Leading whitespace is skipped. Returns `f64::NAN` when no prefix exists.
pub fn parse_rating(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let Some(prefix) = NUMERIC_PREFIX_RE.find(trimmed) else {
        return f64::NAN;
    };
    match prefix.as_str().trim_start_matches('+') {
        "Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        number => number.parse::<f64>().unwrap_or(f64::NAN),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_rating;

    #[test]
    fn parses_plain_and_prefixed_numbers() {
        assert_eq!(parse_rating("4.7"), 4.7);
        assert_eq!(parse_rating("  3"), 3.0);
        assert_eq!(parse_rating("4.5 stars"), 4.5);
        assert_eq!(parse_rating(".5"), 0.5);
        assert_eq!(parse_rating("5."), 5.0);
        assert_eq!(parse_rating("1e1x"), 10.0);
        assert_eq!(parse_rating("-2"), -2.0);
    }

    #[test]
    fn unreadable_text_is_nan() {
        assert!(parse_rating("great").is_nan());
        assert!(parse_rating("").is_nan());
        assert!(parse_rating(".").is_nan());
    }

    #[test]
    fn infinity_keyword_is_accepted() {
        assert_eq!(parse_rating("Infinity"), f64::INFINITY);
        assert_eq!(parse_rating("-Infinity!"), f64::NEG_INFINITY);
    }
}
