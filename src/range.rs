//! §4.5 Range annotator: marks adjacent `X 〈range-token〉 Y` tag pairs with
//! `range_start`/`range_end`.

use std::collections::HashMap;

use crate::tag::{Timex, TimexKind};
use crate::util::detect_range_expression_before;

/// Range tokens recognized at this stage. Restricted relative to the
/// abbreviation expander's token set (§4.6) — notably no bare comma or
/// reading-point, since those separate elided-unit lists (`1、2分`), not
/// ranges.
const RANGE_TOKENS: &[&str] = &["から翌", "から同", "から", "〜", "~", "-", "ー"];

/// For every spanned, non-`Duration` tag preceded by a recognized range
/// token, checks whether the character just before the token also belongs to
/// a tag of the same [`TimexKind`]. When it does, marks the earlier tag
/// `range_start` and the later one `range_end`.
///
/// A `Duration` can never be a range endpoint (§4.5): a span of time has no
/// single instant to anchor a "start" or "end" to.
pub fn annotate_ranges(tags: &mut [Timex], processed_text: &str) {
    let mut offset_to_tag: HashMap<usize, usize> = HashMap::new();
    for (index, tag) in tags.iter().enumerate() {
        if let Some(span) = tag.span {
            for offset in span.start..span.end {
                offset_to_tag.insert(offset, index);
            }
        }
    }

    let mut to_mark: Vec<(usize, usize)> = Vec::new();

    for (index, tag) in tags.iter().enumerate() {
        if matches!(tag.kind, TimexKind::Duration) {
            continue;
        }
        let Some(span) = tag.span else { continue };

        let Some(range_token) =
            detect_range_expression_before(processed_text, span.start, RANGE_TOKENS)
        else {
            continue;
        };

        let token_len = range_token.chars().count();
        if span.start < token_len + 1 {
            continue;
        }
        let possible_predecessor_end = span.start - token_len - 1;

        let Some(&predecessor_index) = offset_to_tag.get(&possible_predecessor_end) else {
            continue;
        };
        if predecessor_index == index {
            continue;
        }
        if tags[predecessor_index].kind != tag.kind {
            continue;
        }

        to_mark.push((predecessor_index, index));
    }

    for (start_index, end_index) in to_mark {
        tags[start_index].range_start = true;
        tags[end_index].range_end = true;
    }

    log::trace!("range annotation marked {} pair(s)", {
        let marked = tags.iter().filter(|t| t.range_start).count();
        marked
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::Span;

    fn dated_tag(value: &str, text: &str, start: usize, end: usize) -> Timex {
        Timex::new(TimexKind::Date, value, text).with_span(Span::new(start, end))
    }

    #[test]
    fn marks_a_simple_wave_dash_range() {
        // "1901年〜2000年"
        let mut tags = vec![
            dated_tag("1901-XX-XX", "1901年", 0, 5),
            dated_tag("2000-XX-XX", "2000年", 6, 11),
        ];
        annotate_ranges(&mut tags, "1901年〜2000年");
        assert!(tags[0].range_start);
        assert!(tags[1].range_end);
    }

    #[test]
    fn does_not_mark_tags_of_different_kinds() {
        let mut tags = vec![
            dated_tag("1901-XX-XX", "1901年", 0, 5),
            Timex::new(TimexKind::Time, "T09-XX-XX", "9時").with_span(Span::new(6, 8)),
        ];
        annotate_ranges(&mut tags, "1901年〜9時");
        assert!(!tags[0].range_start);
        assert!(!tags[1].range_end);
    }

    #[test]
    fn does_not_mark_duration_endpoints() {
        // "1日から翌日" — DATE から DURATION, neither side should be marked.
        let mut tags = vec![
            dated_tag("XXXX-XX-01", "1日", 0, 2),
            Timex::new(TimexKind::Duration, "P1D", "翌日").with_span(Span::new(4, 6)),
        ];
        annotate_ranges(&mut tags, "1日から翌日");
        assert!(!tags[0].range_start);
        assert!(!tags[1].range_end);
    }

    #[test]
    fn leaves_unrelated_tags_untouched() {
        let mut tags = vec![dated_tag("2021-07-18", "2021年7月18日", 0, 10)];
        annotate_ranges(&mut tags, "2021年7月18日");
        assert!(!tags[0].range_start);
        assert!(!tags[0].range_end);
    }
}
