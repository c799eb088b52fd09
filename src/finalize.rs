//! §4.7 Finalizer: sorts tags into document order, assigns stable `tid`s, and
//! stamps the orchestrator's reference instant onto every tag.

use chrono::NaiveDateTime;

use crate::tag::Timex;

/// Sorts `tags` by `span.start` (spanless tags sort to position 0, via a
/// stable sort so relative order among ties is preserved), assigns
/// `tid = "t" + index` in that order, and attaches `reference` to every tag
/// when one is configured.
pub fn finalize(tags: &mut [Timex], reference: Option<NaiveDateTime>) {
    tags.sort_by_key(|tag| tag.span.map(|span| span.start).unwrap_or(0));

    for (index, tag) in tags.iter_mut().enumerate() {
        tag.tid = format!("t{index}");
        if let Some(reference) = reference {
            tag.reference = Some(reference);
        }
    }

    log::trace!("finalized {} tag(s)", tags.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::{Span, TimexKind};

    fn tag_at(start: usize, end: usize) -> Timex {
        Timex::new(TimexKind::Date, "XXXX-XX-XX", "x").with_span(Span::new(start, end))
    }

    #[test]
    fn assigns_contiguous_tids_in_ascending_span_order() {
        let mut tags = vec![tag_at(5, 6), tag_at(0, 1), tag_at(2, 3)];
        finalize(&mut tags, None);
        let tids: Vec<_> = tags.iter().map(|t| t.tid.as_str()).collect();
        assert_eq!(tids, vec!["t0", "t1", "t2"]);
        assert_eq!(tags[0].span, Some(Span::new(0, 1)));
    }

    #[test]
    fn spanless_tags_sort_to_the_front() {
        let mut tags = vec![tag_at(3, 4), Timex::new(TimexKind::Duration, "PT1H", "")];
        finalize(&mut tags, None);
        assert_eq!(tags[0].tid, "t0");
        assert_eq!(tags[0].span, None);
        assert_eq!(tags[1].tid, "t1");
    }

    #[test]
    fn attaches_the_configured_reference_to_every_tag() {
        let reference = NaiveDateTime::parse_from_str("2021-07-18 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let mut tags = vec![tag_at(0, 1), tag_at(1, 2)];
        finalize(&mut tags, Some(reference));
        assert!(tags.iter().all(|t| t.reference == Some(reference)));
    }

    #[test]
    fn finalizing_twice_is_idempotent() {
        let mut tags = vec![tag_at(5, 6), tag_at(0, 1)];
        finalize(&mut tags, None);
        let first_pass: Vec<_> = tags.iter().map(|t| t.tid.clone()).collect();
        finalize(&mut tags, None);
        let second_pass: Vec<_> = tags.iter().map(|t| t.tid.clone()).collect();
        assert_eq!(first_pass, second_pass);
    }
}
