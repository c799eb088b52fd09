//! Expressions explicitly anchored on "now" (`今から…`) and multi-week
//! relative offsets. Scoped away from calendar words (`明日`/`今日`/`昨日`):
//! resolving those needs a concrete `reference` instant, which is a
//! semantic-resolution step this crate's Non-goals exclude (see DESIGN.md).
//!
//! `今から` (3 chars) is required context but not part of the temporal
//! expression itself, so its patterns carry `content_offset(3)`: the
//! orchestrator trims those leading chars from the tag's `span`/`text` after
//! parsing, the same correction a look-behind assertion would give for free.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::pattern::{Category, Pattern};
use crate::tag::{Timex, TimexKind};

use super::{format_amount, modifier_from_word, Tagger};

fn parse_now_hours(caps: &Captures, _pattern: &Pattern) -> Timex {
    let base: f64 = caps[1].parse().unwrap();
    let amount = if caps.get(2).is_some() { base + 0.5 } else { base };
    let mut timex = Timex::new(TimexKind::Duration, format!("PT{}H", format_amount(amount)), "");
    if let Some(modifier) = modifier_from_word(caps.get(3).map(|m| m.as_str())) {
        timex = timex.with_modifier(modifier);
    }
    timex
}

fn parse_now_days(caps: &Captures, _pattern: &Pattern) -> Timex {
    let amount: f64 = caps[1].parse().unwrap();
    let mut timex = Timex::new(TimexKind::Duration, format!("P{}D", format_amount(amount)), "");
    if let Some(modifier) = modifier_from_word(caps.get(2).map(|m| m.as_str())) {
        timex = timex.with_modifier(modifier);
    }
    timex
}

fn parse_weeks(caps: &Captures, _pattern: &Pattern) -> Timex {
    let amount: f64 = caps[1].parse().unwrap();
    let mut timex = Timex::new(TimexKind::Duration, format!("P{}W", format_amount(amount)), "");
    if let Some(modifier) = modifier_from_word(caps.get(2).map(|m| m.as_str())) {
        timex = timex.with_modifier(modifier);
    }
    timex
}

lazy_static! {
    static ref NOW_HOURS: Regex = Regex::new(r"今から(\d+(?:\.\d+)?)時間(半)?(前|後)?").unwrap();
    static ref NOW_DAYS: Regex = Regex::new(r"今から(\d+(?:\.\d+)?)日(?:間)?(前|後)?").unwrap();
    static ref WEEKS: Regex = Regex::new(r"(\d+)週間(前|後)").unwrap();
}

/// Relative expressions (§4.9). Every pattern here literally includes its
/// anchoring prefix (`今から`) or a unit (`週間`) that `DurationTagger`'s
/// patterns don't use, so the two taggers never produce identical-span
/// candidates for the deduplicator to arbitrate between.
pub struct ReltimeTagger {
    patterns: Vec<Pattern>,
}

impl ReltimeTagger {
    pub fn new() -> Self {
        ReltimeTagger {
            patterns: vec![
                Pattern::new(Category::Reltime, NOW_HOURS.clone(), parse_now_hours)
                    .with_content_offset(3),
                Pattern::new(Category::Reltime, NOW_DAYS.clone(), parse_now_days)
                    .with_content_offset(3),
                Pattern::new(Category::Reltime, WEEKS.clone(), parse_weeks),
            ],
        }
    }
}

impl Default for ReltimeTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl Tagger for ReltimeTagger {
    fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }
}
