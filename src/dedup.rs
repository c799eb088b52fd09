//! §4.4 Coverage-based deduplication: resolves overlapping candidate
//! [`Extract`]s down to a non-overlapping set, one bucket per [`Category`].

use std::collections::HashMap;

use crate::extract::Extract;
use crate::pattern::Category;

/// Picks a non-overlapping subset of `extracts` and groups survivors by
/// category, in the order they were accepted.
///
/// Extracts are considered in `(span.start asc, -length, category priority)`
/// order (§4.4): earlier starts win, longer matches beat shorter ones at the
/// same start (a 4-digit year beats a 2-digit day), and the fixed category
/// priority (`Category::priority`) breaks any remaining tie. The first
/// extract in that order whose span is entirely uncovered claims it; every
/// later extract that would touch an already-covered character is discarded.
pub fn dedup(mut extracts: Vec<Extract>, text_len: usize) -> HashMap<Category, Vec<Extract>> {
    extracts.sort_by(|a, b| {
        a.span
            .start
            .cmp(&b.span.start)
            .then_with(|| b.span.len().cmp(&a.span.len()))
            .then_with(|| a.category.priority().cmp(&b.category.priority()))
    });

    let mut covered = vec![false; text_len];
    let mut survivors: HashMap<Category, Vec<Extract>> = HashMap::new();

    for extract in extracts {
        let range = extract.span.start..extract.span.end;
        if covered[range.clone()].iter().any(|&c| c) {
            continue;
        }
        for covered_char in &mut covered[range] {
            *covered_char = true;
        }
        survivors.entry(extract.category).or_default().push(extract);
    }

    log::trace!(
        "deduplication kept {} survivor(s)",
        survivors.values().map(Vec::len).sum::<usize>()
    );

    survivors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::PatternId;
    use crate::tag::Span;

    fn extract_for(category: Category, start: usize, end: usize) -> Extract {
        Extract {
            pattern_id: PatternId(0),
            category,
            span: Span::new(start, end),
            text: "x".repeat(end - start),
        }
    }

    #[test]
    fn longer_match_at_same_start_wins() {
        let extracts = vec![
            extract_for(Category::Abstime, 0, 2),
            extract_for(Category::Abstime, 0, 4),
        ];
        let survivors = dedup(extracts, 4);
        let kept = &survivors[&Category::Abstime];
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].span, Span::new(0, 4));
    }

    #[test]
    fn earlier_start_wins_over_a_later_overlapping_match() {
        let extracts = vec![
            extract_for(Category::Abstime, 0, 3),
            extract_for(Category::Abstime, 1, 5),
        ];
        let survivors = dedup(extracts, 5);
        let kept = &survivors[&Category::Abstime];
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].span, Span::new(0, 3));
    }

    #[test]
    fn category_priority_breaks_ties_on_identical_spans() {
        let extracts = vec![
            extract_for(Category::Set, 0, 2),
            extract_for(Category::Abstime, 0, 2),
        ];
        let survivors = dedup(extracts, 2);
        assert!(survivors.contains_key(&Category::Abstime));
        assert!(!survivors.contains_key(&Category::Set));
    }

    #[test]
    fn non_overlapping_matches_are_both_kept() {
        let extracts = vec![
            extract_for(Category::Abstime, 0, 2),
            extract_for(Category::Duration, 2, 4),
        ];
        let survivors = dedup(extracts, 4);
        assert_eq!(survivors[&Category::Abstime].len(), 1);
        assert_eq!(survivors[&Category::Duration].len(), 1);
    }
}
