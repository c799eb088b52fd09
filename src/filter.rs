//! §4.3 Filter chain: predicates that veto otherwise-valid candidate
//! [`Extract`]s before they reach deduplication.

use regex::Regex;

use crate::extract::Extract;
use crate::pattern::Category;

/// A single veto predicate. Returning `true` discards the extract.
pub trait Filter {
    fn filter(&self, extract: &Extract, processed_text: &str) -> bool;
}

/// Runs every filter in order and reports whether the extract survives.
/// An extract survives only if every filter returns `false`; filters do not
/// short-circuit each other's evaluation (mirrors the original pipeline,
/// which always runs the full chain), but as soon as one filter rejects, the
/// net result is already decided.
pub fn survives(extract: &Extract, processed_text: &str, filters: &[Box<dyn Filter>]) -> bool {
    !filters.iter().any(|f| f.filter(extract, processed_text))
}

/// Rejects a match immediately adjacent to additional digit or decimal
/// characters outside the match — prevents `12345` from producing a spurious
/// 4-digit year match inside a longer run of digits.
pub struct NumexpFilter;

impl Filter for NumexpFilter {
    fn filter(&self, extract: &Extract, processed_text: &str) -> bool {
        let chars: Vec<char> = processed_text.chars().collect();
        let is_num_char = |c: char| c.is_ascii_digit() || c == '.';

        let before_extends = extract.span.start > 0
            && chars
                .get(extract.span.start - 1)
                .is_some_and(|&c| is_num_char(c));
        let after_extends = chars
            .get(extract.span.end)
            .is_some_and(|&c| is_num_char(c));

        before_extends || after_extends
    }
}

/// Rejects matches whose leading numeric component is itself only a suffix of
/// a longer number already present in the text, e.g. a pattern matching `345`
/// inside `12345` where the full number `12345` is not itself a year-shaped
/// pattern but nonetheless should not be split at an arbitrary boundary.
pub struct PartialNumFilter;

impl Filter for PartialNumFilter {
    fn filter(&self, extract: &Extract, processed_text: &str) -> bool {
        let leading_digits = extract
            .text
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .count();
        if leading_digits == 0 {
            return false;
        }

        let chars: Vec<char> = processed_text.chars().collect();
        extract.span.start > 0
            && chars
                .get(extract.span.start - 1)
                .is_some_and(|c| c.is_ascii_digit())
    }
}

lazy_static::lazy_static! {
    static ref BARE_DECIMAL: Regex = Regex::new(r"^\d+\.\d+$").unwrap();
}

/// Rejects `Abstime` matches whose surface form is a bare decimal (e.g.
/// `0.5`), which would otherwise be misread as "0年5月". `Duration` matches
/// are exempt since decimal durations (`0.5日間`) are legitimate.
pub struct DecimalFilter;

impl Filter for DecimalFilter {
    fn filter(&self, extract: &Extract, _processed_text: &str) -> bool {
        extract.category == Category::Abstime && BARE_DECIMAL.is_match(&extract.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::PatternId;
    use crate::tag::Span;

    fn extract_for(category: Category, text: &str, start: usize, end: usize) -> Extract {
        Extract {
            pattern_id: PatternId(0),
            category,
            span: Span::new(start, end),
            text: text.to_string(),
        }
    }

    #[test]
    fn numexp_filter_rejects_digits_touching_either_boundary() {
        let filter = NumexpFilter;
        // "2345" inside "12345" — extra digit "1" immediately before the match.
        let extract = extract_for(Category::Abstime, "2345", 1, 5);
        assert!(filter.filter(&extract, "12345"));
    }

    #[test]
    fn numexp_filter_allows_isolated_numbers() {
        let filter = NumexpFilter;
        let extract = extract_for(Category::Abstime, "2021", 0, 4);
        assert!(!filter.filter(&extract, "2021年"));
    }

    #[test]
    fn partial_num_filter_rejects_numeric_suffix_of_longer_number() {
        let filter = PartialNumFilter;
        let extract = extract_for(Category::Duration, "345", 2, 5);
        assert!(filter.filter(&extract, "12345"));
    }

    #[test]
    fn decimal_filter_rejects_bare_decimal_abstime_only() {
        let filter = DecimalFilter;
        let abstime = extract_for(Category::Abstime, "0.5", 0, 3);
        let duration = extract_for(Category::Duration, "0.5", 0, 3);
        assert!(filter.filter(&abstime, "0.5"));
        assert!(!filter.filter(&duration, "0.5"));
    }

    #[test]
    fn decimal_filter_allows_non_decimal_abstime() {
        let filter = DecimalFilter;
        let extract = extract_for(Category::Abstime, "2021", 0, 4);
        assert!(!filter.filter(&extract, "2021年"));
    }
}
