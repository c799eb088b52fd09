//! Spans of time: hours, minutes, and days, with an optional `半` (half-unit)
//! suffix and an optional `前`/`後` (before/after) modifier.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::pattern::{Category, Pattern};
use crate::tag::{Timex, TimexKind};

use super::{format_amount, modifier_from_word, Tagger};

fn parse_hours(caps: &Captures, _pattern: &Pattern) -> Timex {
    let base: f64 = caps[1].parse().unwrap();
    let amount = if caps.get(2).is_some() { base + 0.5 } else { base };
    let mut timex = Timex::new(TimexKind::Duration, format!("PT{}H", format_amount(amount)), "");
    if let Some(modifier) = modifier_from_word(caps.get(3).map(|m| m.as_str())) {
        timex = timex.with_modifier(modifier);
    }
    timex
}

fn parse_minutes(caps: &Captures, _pattern: &Pattern) -> Timex {
    let amount: f64 = caps[1].parse().unwrap();
    let mut timex = Timex::new(TimexKind::Duration, format!("PT{}M", format_amount(amount)), "");
    if let Some(modifier) = modifier_from_word(caps.get(2).map(|m| m.as_str())) {
        timex = timex.with_modifier(modifier);
    }
    timex
}

fn parse_days(caps: &Captures, _pattern: &Pattern) -> Timex {
    let amount: f64 = caps[1].parse().unwrap();
    let mut timex = Timex::new(TimexKind::Duration, format!("P{}D", format_amount(amount)), "");
    if let Some(modifier) = modifier_from_word(caps.get(2).map(|m| m.as_str())) {
        timex = timex.with_modifier(modifier);
    }
    timex
}

lazy_static! {
    static ref HOURS: Regex = Regex::new(r"(\d+(?:\.\d+)?)時間(半)?(前|後)?").unwrap();
    static ref MINUTES: Regex = Regex::new(r"(\d+(?:\.\d+)?)分(前|後)?").unwrap();
    static ref DAYS: Regex = Regex::new(r"(\d+(?:\.\d+)?)日(?:間)?(前|後)?").unwrap();
}

/// Spans of time (§4.9). `DAYS` deliberately makes both `間` and a trailing
/// `前`/`後` optional so the same pattern covers `2日間`, `2日前`, and a bare
/// `2日` without three near-duplicate regexes.
pub struct DurationTagger {
    patterns: Vec<Pattern>,
}

impl DurationTagger {
    pub fn new() -> Self {
        DurationTagger {
            patterns: vec![
                Pattern::new(Category::Duration, HOURS.clone(), parse_hours),
                Pattern::new(Category::Duration, MINUTES.clone(), parse_minutes),
                Pattern::new(Category::Duration, DAYS.clone(), parse_days),
            ],
        }
    }
}

impl Default for DurationTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl Tagger for DurationTagger {
    fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }
}
