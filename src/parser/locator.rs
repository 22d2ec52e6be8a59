use regex::{Captures, Regex};
use std::sync::LazyLock;

/// House number at the start: "12 Main St", "No. 12a/3 Elm Street"
static LEADING_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:no\.?)?\s*(?P<token>\d+[a-z]*(?:/\d+[a-z]*)?)\s*")
        .expect("valid leading number regex")
});

/// House number at the end: "Main St 12", "Main St no. 12 b", "ул. Ленина д. 5"
///
/// The `no`/`д` abbreviation may not follow a letter ("Casino 5"). The character
/// before it is matched too, so the region starts at `abbr` when present.
static TRAILING_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:(?:^|\P{L})(?P<abbr>(?:no|д)\.?))?\s*(?P<token>\d+\s*[a-z]*(?:/\d+[a-z]*)?)\s*$",
    )
    .expect("valid trailing number regex")
});

/// Byte range into the scanned string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Slice `text` by this span
    ///
    /// Spans produced by the locator always fall on char boundaries of the
    /// string they were located in.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// Which rule located the number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Leading,
    Trailing,
}

/// A located house number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberMatch {
    /// Everything cut out of the street: abbreviation, number and padding
    pub region: Span,
    /// The house number itself
    pub token: Span,
}

impl NumberMatch {
    fn from_captures(captures: &Captures<'_>) -> Option<Self> {
        let whole = captures.get(0)?;
        let token = captures.name("token")?;
        let start = captures
            .name("abbr")
            .map_or(whole.start(), |abbr| abbr.start());
        Some(Self {
            region: Span::new(start, whole.end()),
            token: Span::new(token.start(), token.end()),
        })
    }
}

/// Find a house number anchored at the start of `text`
pub fn locate_leading(text: &str) -> Option<NumberMatch> {
    LEADING_NUMBER_REGEX
        .captures(text)
        .and_then(|captures| NumberMatch::from_captures(&captures))
}

/// Find a house number anchored at the end of `text`
///
/// The leftmost match wins, so the region swallows any whitespace and
/// `no`/`д` abbreviation sitting in front of the digits.
pub fn locate_trailing(text: &str) -> Option<NumberMatch> {
    TRAILING_NUMBER_REGEX
        .captures(text)
        .and_then(|captures| NumberMatch::from_captures(&captures))
}

/// Apply both rules in priority order; a leading match is final
pub fn locate(text: &str) -> Option<(Rule, NumberMatch)> {
    if let Some(found) = locate_leading(text) {
        return Some((Rule::Leading, found));
    }
    locate_trailing(text).map(|found| (Rule::Trailing, found))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_plain_number() {
        let found = locate_leading("123 Kaiserin Augusta Str").unwrap();
        assert_eq!(found.region, Span::new(0, 4));
        assert_eq!(found.token, Span::new(0, 3));
    }

    #[test]
    fn test_leading_with_abbreviation_and_subunit() {
        let text = "No. 12a/3 Elm Street";
        let found = locate_leading(text).unwrap();
        assert_eq!(found.token.slice(text), "12a/3");
        assert_eq!(found.region.slice(text), "No. 12a/3 ");
    }

    #[test]
    fn test_leading_requires_digits_at_start() {
        assert!(locate_leading("Kaiserin Augusta Str 123").is_none());
        assert!(locate_leading("Norwood Road 5").is_none());
        assert!(locate_leading("").is_none());
    }

    #[test]
    fn test_leading_digits_only() {
        let found = locate_leading("42").unwrap();
        assert_eq!(found.region, Span::new(0, 2));
        assert_eq!(found.token, Span::new(0, 2));
    }

    #[test]
    fn test_trailing_plain_number() {
        let text = "Kaiserin Augusta Str 123";
        let found = locate_trailing(text).unwrap();
        assert_eq!(found.token.slice(text), "123");
        assert_eq!(found.region.slice(text), " 123");
    }

    #[test]
    fn test_trailing_letter_suffix_after_space() {
        let text = "Hauptstraße 12 b";
        let found = locate_trailing(text).unwrap();
        assert_eq!(found.token.slice(text), "12 b");
    }

    #[test]
    fn test_trailing_cyrillic_abbreviation() {
        let text = "ул. Ленина д. 5";
        let found = locate_trailing(text).unwrap();
        assert_eq!(found.region.slice(text), "д. 5");
        assert_eq!(found.token.slice(text), "5");
    }

    #[test]
    fn test_trailing_abbreviation_must_start_a_word() {
        let text = "Casino 5";
        let found = locate_trailing(text).unwrap();
        assert_eq!(found.region.slice(text), " 5");
    }

    #[test]
    fn test_trailing_abbreviation_after_digit() {
        let text = "Ленина 5д 3";
        let found = locate_trailing(text).unwrap();
        assert_eq!(found.region.slice(text), "д 3");
        assert_eq!(found.token.slice(text), "3");

        let text = "Elm Street 12no. 4";
        let found = locate_trailing(text).unwrap();
        assert_eq!(found.region.slice(text), "no. 4");
    }

    #[test]
    fn test_trailing_abbreviation_at_string_start() {
        let text = "д. 7";
        let found = locate_trailing(text).unwrap();
        assert_eq!(found.region, Span::new(0, text.len()));
        assert_eq!(found.token.slice(text), "7");
    }

    #[test]
    fn test_trailing_not_at_end() {
        assert!(locate_trailing("5th Avenue").is_none());
        assert!(locate_trailing("Main Street").is_none());
    }

    #[test]
    fn test_leading_rule_has_priority() {
        let text = "12 Main St 34";
        let (rule, found) = locate(text).unwrap();
        assert_eq!(rule, Rule::Leading);
        assert_eq!(found.token.slice(text), "12");
    }

    #[test]
    fn test_locate_falls_back_to_trailing() {
        let (rule, _) = locate("Main St 34").unwrap();
        assert_eq!(rule, Rule::Trailing);
        assert!(locate("Main Street").is_none());
    }
}
