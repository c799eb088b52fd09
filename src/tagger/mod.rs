//! §4.9 Taggers: the four built-in pattern families, plus the trait a caller
//! implements to register a fifth, custom one (§4.1).

mod abstime;
mod duration;
mod reltime;
mod set;

pub use abstime::AbstimeTagger;
pub use duration::DurationTagger;
pub use reltime::ReltimeTagger;
pub use set::SetTagger;

use crate::pattern::Pattern;
use crate::tag::Modifier;

/// A family of related [`Pattern`]s. Built-in taggers build their pattern
/// list once, at construction, and hand back an immutable slice; a
/// caller-supplied custom tagger is free to do the same.
pub trait Tagger {
    fn patterns(&self) -> &[Pattern];
}

/// Maps a captured `前`/`後` word to its [`Modifier`], shared by every
/// tagger whose patterns carry an optional before/after suffix.
pub(crate) fn modifier_from_word(word: Option<&str>) -> Option<Modifier> {
    match word {
        Some("前") => Some(Modifier::Before),
        Some("後") => Some(Modifier::After),
        _ => None,
    }
}

/// Renders a duration amount without a trailing `.0` on whole numbers
/// (`f64`'s `Display` already does this, but the name documents the intent
/// at call sites that build `P`/`PT` value strings).
pub(crate) fn format_amount(amount: f64) -> String {
    format!("{amount}")
}
