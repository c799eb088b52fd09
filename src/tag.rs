//! The externally visible temporal tag ([`Timex`]) and its supporting types.

use chrono::NaiveDateTime;

use crate::pattern::PatternId;

/// A half-open character range `[start, end)` into the normalized text.
///
/// Offsets are counted in `char`s, not bytes, so that they stay meaningful for
/// multi-byte Japanese text regardless of which regex engine produced the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Creates a new span. Panics if `start >= end`, since an empty or inverted
    /// span can never correspond to an actual match.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start < end, "span start must be before end");
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

/// The broad shape of a temporal expression, derived from the category of the
/// pattern that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimexKind {
    Date,
    Time,
    Duration,
    Set,
}

impl TimexKind {
    /// The value used in the `type` field of the TIMEX wire format.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimexKind::Date => "DATE",
            TimexKind::Time => "TIME",
            TimexKind::Duration => "DURATION",
            TimexKind::Set => "SET",
        }
    }
}

/// A modifier attached to a [`Timex`], narrowing or qualifying its `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Before,
    After,
    EqualOrLess,
    EqualOrMore,
    Approx,
    Start,
    Mid,
    End,
    OnOrBefore,
    OnOrAfter,
}

impl Modifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Before => "BEFORE",
            Modifier::After => "AFTER",
            Modifier::EqualOrLess => "EQUAL_OR_LESS",
            Modifier::EqualOrMore => "EQUAL_OR_MORE",
            Modifier::Approx => "APPROX",
            Modifier::Start => "START",
            Modifier::Mid => "MID",
            Modifier::End => "END",
            Modifier::OnOrBefore => "ON_OR_BEFORE",
            Modifier::OnOrAfter => "ON_OR_AFTER",
        }
    }
}

/// A recurrence quantifier attached to `SET`-kind tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quant {
    Every,
}

impl Quant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quant::Every => "EVERY",
        }
    }
}

/// A normalized temporal expression extracted from text.
///
/// See the crate-level documentation for the value-format conventions used in
/// `value` for each [`TimexKind`].
#[derive(Debug, Clone, PartialEq)]
pub struct Timex {
    pub tid: String,
    pub kind: TimexKind,
    pub value: String,
    pub text: String,
    pub span: Option<Span>,
    pub modifier: Option<Modifier>,
    pub quant: Option<Quant>,
    pub freq: Option<f64>,
    pub range_start: bool,
    pub range_end: bool,
    pub reference: Option<NaiveDateTime>,
    pub pattern: Option<PatternId>,
}

impl Timex {
    /// Builds a bare tag with no span, modifier, or pattern back-reference.
    /// Most parse callbacks start from this and fill in `span`/`pattern`
    /// themselves since those depend on the regex match.
    pub fn new(kind: TimexKind, value: impl Into<String>, text: impl Into<String>) -> Self {
        Timex {
            tid: String::new(),
            kind,
            value: value.into(),
            text: text.into(),
            span: None,
            modifier: None,
            quant: None,
            freq: None,
            range_start: false,
            range_end: false,
            reference: None,
            pattern: None,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = Some(modifier);
        self
    }

    pub fn with_quant(mut self, quant: Quant) -> Self {
        self.quant = Some(quant);
        self
    }

    pub fn with_freq(mut self, freq: f64) -> Self {
        self.freq = Some(freq);
        self
    }

    pub fn with_pattern(mut self, pattern: PatternId) -> Self {
        self.pattern = Some(pattern);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timex_kind_as_str_matches_wire_format() {
        assert_eq!(TimexKind::Date.as_str(), "DATE");
        assert_eq!(TimexKind::Time.as_str(), "TIME");
        assert_eq!(TimexKind::Duration.as_str(), "DURATION");
        assert_eq!(TimexKind::Set.as_str(), "SET");
    }

    #[test]
    fn modifier_as_str_is_screaming_snake_case() {
        assert_eq!(Modifier::EqualOrLess.as_str(), "EQUAL_OR_LESS");
        assert_eq!(Modifier::OnOrAfter.as_str(), "ON_OR_AFTER");
    }

    #[test]
    fn new_timex_has_no_span_or_flags_set() {
        let timex = Timex::new(TimexKind::Date, "2021-07-18", "2021年7月18日");
        assert_eq!(timex.span, None);
        assert!(!timex.range_start);
        assert!(!timex.range_end);
    }
}
