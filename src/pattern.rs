//! [`Pattern`]s are the unit of work handed from a [`Tagger`](crate::tagger::Tagger)
//! to the pipeline: a compiled regex paired with the callback that turns a
//! match into a [`Timex`](crate::tag::Timex).

use regex::{Captures, Regex};

use crate::tag::{Modifier, Quant, Timex};

/// Which family of temporal expression a pattern belongs to.
///
/// Declaration order doubles as the default extraction order (§4.2): custom
/// patterns, when registered, run first; [`Category::priority`] gives the
/// separate tie-break order used by deduplication (§4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Custom,
    Abstime,
    Duration,
    Reltime,
    Set,
}

impl Category {
    /// Lower wins ties in the coverage-based deduplicator. Built-in categories
    /// are ranked `Abstime < Duration < Reltime < Set` as required by §4.4;
    /// `Custom` is intentionally lowest so a caller-registered tagger never
    /// silently shadows a built-in on an exact tie.
    pub fn priority(&self) -> u8 {
        match self {
            Category::Abstime => 0,
            Category::Duration => 1,
            Category::Reltime => 2,
            Category::Set => 3,
            Category::Custom => 4,
        }
    }
}

/// Maps a successful regex match to the [`Timex`] it represents.
///
/// Parse callbacks are ordinary function pointers rather than closures so
/// that a [`Pattern`] stays `Clone` and can be freely copied into the parser's
/// pattern arena and referenced by index from synthesized abbreviation tags
/// (§4.6).
pub type ParseFn = fn(&Captures, &Pattern) -> Timex;

/// An immutable unit of recognition: a compiled regex, the category it feeds,
/// the callback that constructs a [`Timex`] from a match, and any modifier or
/// quantifier the pattern always contributes (e.g. "〜前" patterns always
/// carry `Modifier::Before`).
#[derive(Clone)]
pub struct Pattern {
    pub category: Category,
    pub regex: Regex,
    pub parse_func: ParseFn,
    pub modifier: Option<Modifier>,
    pub quant: Option<Quant>,
    /// Leading characters of a match to drop from the tag's externally
    /// visible `span`/`text` (§9 "lookbehind-driven reconstruction").
    ///
    /// `regex` has no look-behind, so a pattern that must only fire in a
    /// fixed context (e.g. ReltimeTagger's `今から` anchor) matches that
    /// context literally and relies on the orchestrator to trim it back off
    /// after the match, rather than reporting the anchor as part of the
    /// temporal expression's surface text.
    pub content_offset: usize,
}

impl Pattern {
    pub fn new(category: Category, regex: Regex, parse_func: ParseFn) -> Self {
        Pattern {
            category,
            regex,
            parse_func,
            modifier: None,
            quant: None,
            content_offset: 0,
        }
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = Some(modifier);
        self
    }

    pub fn with_quant(mut self, quant: Quant) -> Self {
        self.quant = Some(quant);
        self
    }

    pub fn with_content_offset(mut self, content_offset: usize) -> Self {
        self.content_offset = content_offset;
        self
    }
}

/// An index into the parser's pattern arena (`Vec<Pattern>`).
///
/// [`Timex::pattern`](crate::tag::Timex::pattern) carries one of these rather
/// than a borrowed `&Pattern` so that the returned `Vec<Timex>` does not have
/// to borrow from the parser (see DESIGN.md, "Back-reference from TIMEX to
/// Pattern").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatternId(pub usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_priority_matches_required_tie_break_order() {
        assert!(Category::Abstime.priority() < Category::Duration.priority());
        assert!(Category::Duration.priority() < Category::Reltime.priority());
        assert!(Category::Reltime.priority() < Category::Set.priority());
        assert!(Category::Set.priority() < Category::Custom.priority());
    }
}
