//! Shared substring-inspection helpers used by the range annotator (§4.5) and
//! the abbreviation expander (§4.6). Both stages need to answer the same
//! question — "does the text just before this tag end in a range token?" —
//! against two different token sets, so the lookup lives here once.

/// If the text ending at `before` (exclusive) ends with one of `tokens`,
/// returns the longest matching token. Tokens are tried longest-first so that
/// a compound form like `から翌` is preferred over its `から` prefix.
///
/// `text` and `before` are both in **char** units, matching the rest of the
/// pipeline.
pub fn detect_range_expression_before(text: &str, before: usize, tokens: &[&str]) -> Option<String> {
    let prefix: String = text.chars().take(before).collect();

    let mut candidates: Vec<&&str> = tokens.iter().collect();
    candidates.sort_by_key(|t| std::cmp::Reverse(t.chars().count()));

    candidates
        .into_iter()
        .find(|token| prefix.ends_with(*token))
        .map(|token| token.to_string())
}
