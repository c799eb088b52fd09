//! §4.2 Extractor: runs every registered pattern's regex over the normalized
//! text and collects every match as a candidate [`Extract`], before any
//! filtering or deduplication happens.

use crate::pattern::{Category, Pattern, PatternId};
use crate::tag::Span;

/// A candidate match, not yet filtered or deduplicated against its
/// overlapping siblings.
#[derive(Debug, Clone)]
pub struct Extract {
    pub pattern_id: PatternId,
    pub category: Category,
    pub span: Span,
    pub text: String,
}

/// Runs every pattern's regex over `processed_text` and returns one
/// [`Extract`] per non-overlapping match the regex engine finds for that
/// pattern. Patterns are tried in arena order, which the parser builds as
/// custom-first, then abstime, duration, reltime, set (§4.2) — the extractor
/// itself does not re-order anything.
///
/// The same character range may appear in more than one `Extract` here: one
/// pattern's match can fully contain, overlap, or coincide with another's.
/// Resolving that is the deduplicator's job (§4.4), not this stage's.
pub fn extract(patterns: &[Pattern], processed_text: &str) -> Vec<Extract> {
    let char_offsets = ByteToChar::new(processed_text);
    let mut extracts = Vec::new();

    for (index, pattern) in patterns.iter().enumerate() {
        let pattern_id = PatternId(index);
        for m in pattern.regex.find_iter(processed_text) {
            let start = char_offsets.char_index(m.start());
            let end = char_offsets.char_index(m.end());
            extracts.push(Extract {
                pattern_id,
                category: pattern.category,
                span: Span::new(start, end),
                text: m.as_str().to_string(),
            });
        }
    }

    log::trace!(
        "extracted {} candidate(s) from {} pattern(s)",
        extracts.len(),
        patterns.len()
    );

    extracts
}

/// Converts byte offsets (what `regex::Regex` reports) to char offsets (what
/// the rest of the pipeline works in) in amortized O(1) per lookup after an
/// O(n) build, instead of re-scanning the string for every match.
struct ByteToChar {
    byte_to_char: Vec<usize>,
}

impl ByteToChar {
    fn new(text: &str) -> Self {
        let mut byte_to_char = vec![0usize; text.len() + 1];
        let mut char_index = 0;
        for (byte_index, ch) in text.char_indices() {
            byte_to_char[byte_index] = char_index;
            char_index += 1;
            let _ = ch;
        }
        byte_to_char[text.len()] = char_index;
        ByteToChar { byte_to_char }
    }

    fn char_index(&self, byte_index: usize) -> usize {
        self.byte_to_char[byte_index]
    }
}
