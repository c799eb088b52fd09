//! Recurring expressions: `毎週` (every week), frequency phrasing like `週に3回`,
//! and `N日おき` (every N days), the last carrying `quant=Every` per §4.9.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::pattern::{Category, Pattern};
use crate::tag::{Quant, Timex, TimexKind};

use super::Tagger;

fn parse_every_week(_caps: &Captures, _pattern: &Pattern) -> Timex {
    Timex::new(TimexKind::Set, "P1W", "").with_quant(Quant::Every)
}

/// `週に3回` ("3 times a week"): a SET tag whose `value` is the recurring
/// period (`P1W`) and whose `freq` carries the magnitude (3).
fn parse_weekly_frequency(caps: &Captures, _pattern: &Pattern) -> Timex {
    let freq: f64 = caps[1].parse().unwrap();
    Timex::new(TimexKind::Set, "P1W", "").with_freq(freq)
}

fn parse_days_interval(caps: &Captures, _pattern: &Pattern) -> Timex {
    let amount: f64 = caps[1].parse().unwrap();
    Timex::new(TimexKind::Set, format!("P{amount}D"), "").with_quant(Quant::Every)
}

lazy_static! {
    static ref EVERY_WEEK: Regex = Regex::new(r"毎週").unwrap();
    static ref WEEKLY_FREQUENCY: Regex = Regex::new(r"週に(\d+)回").unwrap();
    static ref DAYS_INTERVAL: Regex = Regex::new(r"(\d+)日おき").unwrap();
}

/// Recurring (set) expressions (§4.9). `WEEKLY_FREQUENCY` and `DAYS_INTERVAL`
/// never share a start position with `DurationTagger`'s patterns: the former
/// requires the `週に…回` frame and the latter the `おき` suffix, neither of
/// which `DurationTagger` matches.
pub struct SetTagger {
    patterns: Vec<Pattern>,
}

impl SetTagger {
    pub fn new() -> Self {
        SetTagger {
            patterns: vec![
                Pattern::new(Category::Set, EVERY_WEEK.clone(), parse_every_week),
                Pattern::new(Category::Set, WEEKLY_FREQUENCY.clone(), parse_weekly_frequency),
                Pattern::new(Category::Set, DAYS_INTERVAL.clone(), parse_days_interval),
            ],
        }
    }
}

impl Default for SetTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl Tagger for SetTagger {
    fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_week_has_no_frequency_and_carries_every_quant() {
        let caps = EVERY_WEEK.captures("毎週").unwrap();
        let timex = parse_every_week(&caps, &SetTagger::new().patterns[0]);
        assert_eq!(timex.value, "P1W");
        assert_eq!(timex.quant, Some(Quant::Every));
        assert_eq!(timex.freq, None);
    }

    #[test]
    fn weekly_frequency_reads_the_count_into_freq() {
        let caps = WEEKLY_FREQUENCY.captures("週に3回").unwrap();
        let timex = parse_weekly_frequency(&caps, &SetTagger::new().patterns[1]);
        assert_eq!(timex.value, "P1W");
        assert_eq!(timex.freq, Some(3.0));
        assert_eq!(timex.quant, None);
    }

    #[test]
    fn days_interval_sets_every_quant() {
        let caps = DAYS_INTERVAL.captures("2日おき").unwrap();
        let timex = parse_days_interval(&caps, &SetTagger::new().patterns[2]);
        assert_eq!(timex.value, "P2D");
        assert_eq!(timex.quant, Some(Quant::Every));
    }
}
