//! §4.6 Abbreviation expander: recovers elided unit suffixes in constructs
//! like `1〜2日`, `1、2分`, `1から2日前`, where the leading numeral has no unit
//! of its own and borrows the unit from the fully-written neighbor tag.

use lazy_static::lazy_static;
use regex::Regex;

use crate::pattern::Pattern;
use crate::tag::Timex;
use crate::util::detect_range_expression_before;

/// The broader token set used here versus the range annotator (§4.5):
/// includes the plain comma and Japanese reading-point, which separate
/// elided-unit lists (`1、2分`) but are not themselves range connectives.
const ABBREV_TOKENS: &[&str] = &["から", "〜", "~", "-", ",", "、"];

lazy_static! {
    static ref TRAILING_SPLIT: Regex = Regex::new(r"^([0-9.]+)(.+)$").unwrap();
}

fn is_numeric_run_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | ':' | '：' | '/')
}

/// Returns the char-offset span of the maximal run of `is_numeric_run_char`
/// characters ending exactly at `end` (exclusive), or `None` if `end` is not
/// itself the end of such a run.
fn trailing_numeric_run(chars: &[char], end: usize) -> Option<(usize, usize)> {
    if end == 0 || !is_numeric_run_char(chars[end - 1]) {
        return None;
    }
    let mut start = end;
    while start > 0 && is_numeric_run_char(chars[start - 1]) {
        start -= 1;
    }
    Some((start, end))
}

/// Returns `tags` with a synthetic tag appended for every elided numeral it
/// can recover. Must run strictly after the range annotator (§4.5): marking
/// ranges first keeps this stage from mistaking an elided-suffix pair for a
/// true range, and lets both stages use simple, un-entangled rules.
pub fn expand_abbreviations(tags: &[Timex], processed_text: &str, patterns: &[Pattern]) -> Vec<Timex> {
    let chars: Vec<char> = processed_text.chars().collect();
    let mut synthesized = Vec::new();

    for tag in tags {
        let Some(span) = tag.span else { continue };
        let Some(pattern_id) = tag.pattern else { continue };

        let Some(range_token) =
            detect_range_expression_before(processed_text, span.start, ABBREV_TOKENS)
        else {
            continue;
        };

        let token_len = range_token.chars().count();
        if span.start < token_len + 1 {
            continue;
        }
        let numeric_end = span.start - token_len;

        let Some((numeric_start, numeric_end)) = trailing_numeric_run(&chars, numeric_end) else {
            continue;
        };
        let numeric_run: String = chars[numeric_start..numeric_end].iter().collect();

        let Some(split) = TRAILING_SPLIT.captures(&tag.text) else {
            continue;
        };
        let unit_suffix = &split[2];

        let abbrev_full_text = format!("{numeric_run}{unit_suffix}");
        let pattern = &patterns[pattern_id.0];

        let Some(captures) = pattern.regex.captures(&abbrev_full_text) else {
            continue;
        };
        let whole_match = captures.get(0).expect("capture group 0 always matches");
        if whole_match.start() != 0 || whole_match.end() != abbrev_full_text.len() {
            continue;
        }

        let mut abbrev_timex = (pattern.parse_func)(&captures, pattern);
        abbrev_timex.text = numeric_run;
        abbrev_timex.span = Some(crate::tag::Span::new(numeric_start, numeric_end));
        abbrev_timex.pattern = Some(pattern_id);
        synthesized.push(abbrev_timex);
    }

    log::trace!("abbreviation expansion synthesized {} tag(s)", synthesized.len());

    let mut result = tags.to_vec();
    result.append(&mut synthesized);
    result
}
