//! Extracts normalized temporal expressions (TIMEX) from Japanese text.
//!
//! [`TimexParser::parse`] runs the eight-stage pipeline described in the
//! crate's design notes: number normalization, candidate extraction (§4.2),
//! filtering (§4.3), coverage-based deduplication (§4.4), per-pattern
//! parsing, range annotation (§4.5), abbreviation expansion (§4.6), and
//! finalization (§4.7). The four built-in taggers and the default filter
//! chain cover a representative slice of absolute dates/times, durations,
//! reference-relative durations, and recurring expressions; a caller can
//! override any collaborator, or add a fifth `Custom` category, through
//! [`TimexParserBuilder`].
//!
//! ```
//! use ja_timex::TimexParser;
//!
//! let mut parser = TimexParser::new();
//! let tags = parser.parse("2021年7月18日に放送予定です");
//! assert_eq!(tags.len(), 1);
//! assert_eq!(tags[0].value, "2021-07-18");
//! ```

mod abbrev;
mod dedup;
pub mod extract;
pub mod filter;
mod finalize;
mod number_normalizer;
pub mod pattern;
mod range;
pub mod tag;
pub mod tagger;
mod util;

use chrono::NaiveDateTime;

pub use filter::{DecimalFilter, Filter, NumexpFilter, PartialNumFilter};
pub use number_normalizer::NumberNormalizer;
pub use pattern::{Category, Pattern, PatternId};
pub use tag::{Modifier, Quant, Span, Timex, TimexKind};
pub use tagger::{AbstimeTagger, DurationTagger, ReltimeTagger, SetTagger, Tagger};

use extract::extract;
use filter::survives;

/// Builds a [`TimexParser`], letting a caller override any collaborator
/// enumerated in §4.1 before assembling the parser's immutable pattern
/// arena. `TimexParser::new()` is shorthand for `TimexParser::builder().build()`.
pub struct TimexParserBuilder {
    number_normalizer: NumberNormalizer,
    abstime_tagger: Box<dyn Tagger>,
    duration_tagger: Box<dyn Tagger>,
    reltime_tagger: Box<dyn Tagger>,
    set_tagger: Box<dyn Tagger>,
    custom_tagger: Option<Box<dyn Tagger>>,
    pattern_filters: Vec<Box<dyn Filter>>,
    reference: Option<NaiveDateTime>,
    ignore_kansuji: bool,
}

impl Default for TimexParserBuilder {
    fn default() -> Self {
        TimexParserBuilder {
            number_normalizer: NumberNormalizer::new(),
            abstime_tagger: Box::new(AbstimeTagger::new()),
            duration_tagger: Box::new(DurationTagger::new()),
            reltime_tagger: Box::new(ReltimeTagger::new()),
            set_tagger: Box::new(SetTagger::new()),
            custom_tagger: None,
            pattern_filters: vec![
                Box::new(NumexpFilter),
                Box::new(PartialNumFilter),
                Box::new(DecimalFilter),
            ],
            reference: None,
            ignore_kansuji: false,
        }
    }
}

impl TimexParserBuilder {
    pub fn number_normalizer(mut self, number_normalizer: NumberNormalizer) -> Self {
        self.number_normalizer = number_normalizer;
        self
    }

    pub fn abstime_tagger<T: Tagger + 'static>(mut self, tagger: T) -> Self {
        self.abstime_tagger = Box::new(tagger);
        self
    }

    pub fn duration_tagger<T: Tagger + 'static>(mut self, tagger: T) -> Self {
        self.duration_tagger = Box::new(tagger);
        self
    }

    pub fn reltime_tagger<T: Tagger + 'static>(mut self, tagger: T) -> Self {
        self.reltime_tagger = Box::new(tagger);
        self
    }

    pub fn set_tagger<T: Tagger + 'static>(mut self, tagger: T) -> Self {
        self.set_tagger = Box::new(tagger);
        self
    }

    /// Registers a fifth category, `Category::Custom`, processed *before*
    /// the four built-ins in extraction order (§4.1). `tagger`'s patterns
    /// should themselves be built with `Category::Custom`.
    pub fn custom_tagger<T: Tagger + 'static>(mut self, tagger: T) -> Self {
        self.custom_tagger = Some(Box::new(tagger));
        self
    }

    pub fn pattern_filters(mut self, pattern_filters: Vec<Box<dyn Filter>>) -> Self {
        self.pattern_filters = pattern_filters;
        self
    }

    pub fn reference(mut self, reference: NaiveDateTime) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Forwarded to the number-normalizer (§4.8): when `true`, kanji-numeral
    /// folding is skipped (era folding is unaffected).
    pub fn ignore_kansuji(mut self, ignore_kansuji: bool) -> Self {
        self.ignore_kansuji = ignore_kansuji;
        self
    }

    /// Assembles the parser's pattern arena in extraction order — custom
    /// first when registered, then abstime, duration, reltime, set (§4.2) —
    /// and consumes the builder.
    pub fn build(mut self) -> TimexParser {
        self.number_normalizer.set_ignore_kansuji(self.ignore_kansuji);

        let mut patterns = Vec::new();
        if let Some(custom) = self.custom_tagger.as_ref() {
            patterns.extend(custom.patterns().iter().cloned());
        }
        patterns.extend(self.abstime_tagger.patterns().iter().cloned());
        patterns.extend(self.duration_tagger.patterns().iter().cloned());
        patterns.extend(self.reltime_tagger.patterns().iter().cloned());
        patterns.extend(self.set_tagger.patterns().iter().cloned());

        log::debug!(
            "timex parser built with {} pattern(s) across {} tagger(s)",
            patterns.len(),
            if self.custom_tagger.is_some() { 5 } else { 4 }
        );

        TimexParser {
            patterns,
            filters: self.pattern_filters,
            number_normalizer: self.number_normalizer,
            reference: self.reference,
            last_processed_text: String::new(),
        }
    }
}

/// The pipeline orchestrator (§4.1): a compiled, immutable pattern arena plus
/// the filter chain, number normalizer, and optional reference instant a
/// caller configured. Not thread-safe for concurrent `parse` calls on the
/// same instance — see §5 — since `parse` overwrites `last_processed_text`.
pub struct TimexParser {
    patterns: Vec<Pattern>,
    filters: Vec<Box<dyn Filter>>,
    number_normalizer: NumberNormalizer,
    reference: Option<NaiveDateTime>,
    last_processed_text: String,
}

impl TimexParser {
    /// Builds a parser with every collaborator defaulted, equivalent to
    /// `TimexParser::builder().build()`.
    pub fn new() -> Self {
        TimexParserBuilder::default().build()
    }

    pub fn builder() -> TimexParserBuilder {
        TimexParserBuilder::default()
    }

    /// Runs the full pipeline (§2) over `raw` and returns its TIMEX tags in
    /// ascending span order. Pure given the parser's fixed configuration:
    /// performs no I/O, and the same input always yields the same output
    /// (§5 Ordering guarantees).
    pub fn parse(&mut self, raw: &str) -> Vec<Timex> {
        self.last_processed_text = self.number_normalizer.normalize(raw);
        let processed_text = self.last_processed_text.clone();
        let text_len = processed_text.chars().count();

        let extracts = extract(&self.patterns, &processed_text);

        let survivors: Vec<_> = extracts
            .into_iter()
            .filter(|candidate| survives(candidate, &processed_text, &self.filters))
            .collect();
        log::debug!("parse: {} candidate(s) survived the filter chain", survivors.len());

        let buckets = dedup::dedup(survivors, text_len);

        let mut tags = self.build_tags(buckets);
        range::annotate_ranges(&mut tags, &processed_text);
        let mut tags = abbrev::expand_abbreviations(&tags, &processed_text, &self.patterns);
        finalize::finalize(&mut tags, self.reference);

        log::debug!("parse: produced {} tag(s)", tags.len());
        tags
    }

    /// The normalized text produced by the most recent [`parse`](Self::parse)
    /// call. Not guaranteed meaningful under concurrent calls on the same
    /// instance (§5).
    pub fn last_processed_text(&self) -> &str {
        &self.last_processed_text
    }

    /// Turns deduplicated, per-category [`Extract`](extract::Extract)s into
    /// provisional [`Timex`] tags by re-deriving each extract's captures from
    /// its originating pattern and invoking that pattern's parse callback.
    ///
    /// A pattern's static `modifier`/`quant` (if any) only backfills a tag
    /// that its parse callback left unset, since most built-in parse
    /// callbacks compute those fields themselves from captured suffix words.
    fn build_tags(
        &self,
        buckets: std::collections::HashMap<Category, Vec<extract::Extract>>,
    ) -> Vec<Timex> {
        let mut tags = Vec::new();

        for extracts in buckets.into_values() {
            for candidate in extracts {
                let pattern = &self.patterns[candidate.pattern_id.0];
                let captures = pattern
                    .regex
                    .captures(&candidate.text)
                    .expect("an extract's text was produced by this same pattern's regex");

                let mut timex = (pattern.parse_func)(&captures, pattern);

                let visible_start = candidate.span.start + pattern.content_offset;
                let visible_text: String = candidate
                    .text
                    .chars()
                    .skip(pattern.content_offset)
                    .collect();

                timex.span = Some(Span::new(visible_start, candidate.span.end));
                timex.text = visible_text;
                timex.pattern = Some(candidate.pattern_id);
                if timex.modifier.is_none() {
                    timex.modifier = pattern.modifier;
                }
                if timex.quant.is_none() {
                    timex.quant = pattern.quant;
                }

                tags.push(timex);
            }
        }

        tags
    }
}

impl Default for TimexParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_value(tags: &[Timex]) -> Vec<(&'static str, &str)> {
        tags.iter().map(|t| (t.kind.as_str(), t.value.as_str())).collect()
    }

    #[test]
    fn full_date_is_a_single_tag() {
        let mut parser = TimexParser::new();
        let tags = parser.parse("2021年7月18日");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].kind.as_str(), "DATE");
        assert_eq!(tags[0].value, "2021-07-18");
    }

    #[test]
    fn a_partial_date_after_an_unrelated_number_leaves_the_year_unknown() {
        let mut parser = TimexParser::new();
        let tags = parser.parse("2021回目の7月18日");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].value, "XXXX-07-18");
    }

    #[test]
    fn morning_time_keeps_its_am_context_in_the_surface_text() {
        let mut parser = TimexParser::new();
        let tags = parser.parse("朝9時スタートです。");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].kind.as_str(), "TIME");
        assert_eq!(tags[0].value, "T09-XX-XX");
        assert_eq!(tags[0].text, "朝9時");
    }

    #[test]
    fn now_anchored_half_hour_duration_excludes_the_anchor_from_its_text() {
        let mut parser = TimexParser::new();
        let tags = parser.parse("今から1時間半後に始めます");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].kind.as_str(), "DURATION");
        assert_eq!(tags[0].value, "PT1.5H");
        assert_eq!(tags[0].text, "1時間半後");
    }

    #[test]
    fn a_wave_dash_year_range_marks_both_endpoints() {
        let mut parser = TimexParser::new();
        let tags = parser.parse("1901年〜2000年");
        assert_eq!(tags.len(), 2);
        assert!(tags[0].range_start);
        assert!(!tags[0].range_end);
        assert!(tags[1].range_end);
        assert!(!tags[1].range_start);
        assert_eq!(tags[0].text, "1901年");
        assert_eq!(tags[1].text, "2000年");
    }

    #[test]
    fn an_elided_duration_prefix_is_recovered_without_range_flags() {
        let mut parser = TimexParser::new();
        let tags = parser.parse("1〜2日間");
        assert_eq!(kind_value(&tags), vec![("DURATION", "P1D"), ("DURATION", "P2D")]);
        assert_eq!(tags[0].text, "1");
        assert_eq!(tags[1].text, "2日間");
        assert!(tags.iter().all(|t| !t.range_start && !t.range_end));
    }

    #[test]
    fn an_elided_before_duration_carries_the_modifier_to_both_tags() {
        let mut parser = TimexParser::new();
        let tags = parser.parse("1から2日前");
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].text, "1");
        assert_eq!(tags[1].text, "2日前");
        assert!(tags.iter().all(|t| t.modifier == Some(Modifier::Before)));
    }

    #[test]
    fn kara_between_different_kinds_does_not_produce_a_range() {
        let mut parser = TimexParser::new();
        let tags = parser.parse("彼は2008年4月から週に3回ジョギングを1時間行ってきた");
        assert_eq!(tags.len(), 3);
        let tids: Vec<_> = tags.iter().map(|t| t.tid.as_str()).collect();
        assert_eq!(tids, vec!["t0", "t1", "t2"]);
        assert!(tags.iter().all(|t| !t.range_start && !t.range_end));
    }

    #[test]
    fn a_bare_decimal_yields_no_tags() {
        let mut parser = TimexParser::new();
        assert!(parser.parse("0.5").is_empty());
    }

    #[test]
    fn a_decimal_duration_is_not_vetoed_by_the_decimal_filter() {
        let mut parser = TimexParser::new();
        let tags = parser.parse("0.5日間");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].kind.as_str(), "DURATION");
        assert_eq!(tags[0].value, "P0.5D");
    }

    #[test]
    fn reference_is_attached_to_every_tag_when_configured() {
        let reference = NaiveDateTime::parse_from_str("2021-07-18 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let mut parser = TimexParser::builder().reference(reference).build();
        let tags = parser.parse("2021年7月18日");
        assert_eq!(tags[0].reference, Some(reference));
    }

    #[test]
    fn ignore_kansuji_leaves_kanji_numerals_unfolded() {
        let mut parser = TimexParser::builder().ignore_kansuji(true).build();
        // With kansuji folding off, "二日" never reaches DurationTagger's
        // all-digit `日` pattern, so no tag is produced.
        assert!(parser.parse("二日").is_empty());
    }

    #[test]
    fn last_processed_text_reflects_the_most_recent_parse_call() {
        let mut parser = TimexParser::new();
        parser.parse("令和3年7月18日");
        assert_eq!(parser.last_processed_text(), "2021年7月18日");
    }
}
