//! Absolute dates and times: `YYYY年MM月DD日` and its partial forms, the
//! `M.D` shorthand, and `朝`/`午前`/`夜`/`午後`-qualified clock times.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::pattern::{Category, Pattern};
use crate::tag::{Timex, TimexKind};

use super::Tagger;

fn parse_full_date(caps: &Captures, _pattern: &Pattern) -> Timex {
    let year: u32 = caps[1].parse().unwrap();
    let month: u32 = caps[2].parse().unwrap();
    let day: u32 = caps[3].parse().unwrap();
    Timex::new(TimexKind::Date, format!("{year:04}-{month:02}-{day:02}"), "")
}

fn parse_year_month(caps: &Captures, _pattern: &Pattern) -> Timex {
    let year: u32 = caps[1].parse().unwrap();
    let month: u32 = caps[2].parse().unwrap();
    Timex::new(TimexKind::Date, format!("{year:04}-{month:02}-XX"), "")
}

fn parse_month_day(caps: &Captures, _pattern: &Pattern) -> Timex {
    let month: u32 = caps[1].parse().unwrap();
    let day: u32 = caps[2].parse().unwrap();
    Timex::new(TimexKind::Date, format!("XXXX-{month:02}-{day:02}"), "")
}

fn parse_bare_year(caps: &Captures, _pattern: &Pattern) -> Timex {
    let year: u32 = caps[1].parse().unwrap();
    Timex::new(TimexKind::Date, format!("{year:04}-XX-XX"), "")
}

/// `M.D` shorthand (`7.18` = July 18th). Deliberately the same shape as a
/// bare decimal number — `DecimalFilter` exists specifically to veto this
/// pattern when the surrounding text gives no other evidence it is a date
/// (`0.5` alone, as opposed to `0.5日間`, a duration).
fn parse_dotted_month_day(caps: &Captures, _pattern: &Pattern) -> Timex {
    let month: u32 = caps[1].parse().unwrap();
    let day: u32 = caps[2].parse().unwrap();
    Timex::new(TimexKind::Date, format!("XXXX-{month:02}-{day:02}"), "")
}

fn parse_morning_time(caps: &Captures, _pattern: &Pattern) -> Timex {
    let hour: u32 = caps[2].parse().unwrap();
    let minute = if caps.get(3).is_some() { "30" } else { "XX" };
    Timex::new(TimexKind::Time, format!("T{hour:02}-{minute}-XX"), "")
}

fn parse_evening_time(caps: &Captures, _pattern: &Pattern) -> Timex {
    let hour: u32 = caps[2].parse().unwrap();
    let hour = if hour < 12 { hour + 12 } else { hour };
    let minute = if caps.get(3).is_some() { "30" } else { "XX" };
    Timex::new(TimexKind::Time, format!("T{hour:02}-{minute}-XX"), "")
}

lazy_static! {
    static ref FULL_DATE: Regex = Regex::new(r"(\d{4})年(\d{1,2})月(\d{1,2})日").unwrap();
    static ref YEAR_MONTH: Regex = Regex::new(r"(\d{4})年(\d{1,2})月").unwrap();
    static ref MONTH_DAY: Regex = Regex::new(r"(\d{1,2})月(\d{1,2})日").unwrap();
    static ref BARE_YEAR: Regex = Regex::new(r"(\d{4})年").unwrap();
    static ref DOTTED_MONTH_DAY: Regex = Regex::new(r"(\d{1,2})\.(\d{1,2})").unwrap();
    static ref MORNING_TIME: Regex = Regex::new(r"(朝|午前)(\d{1,2})時(半)?").unwrap();
    static ref EVENING_TIME: Regex = Regex::new(r"(夜|午後)(\d{1,2})時(半)?").unwrap();
}

/// Absolute dates and times (§4.9). Overlapping candidates at the same start
/// (e.g. the bare year inside a full date) are resolved downstream by the
/// coverage deduplicator's longest-match rule — this tagger makes no attempt
/// to avoid producing them itself.
pub struct AbstimeTagger {
    patterns: Vec<Pattern>,
}

impl AbstimeTagger {
    pub fn new() -> Self {
        AbstimeTagger {
            patterns: vec![
                Pattern::new(Category::Abstime, FULL_DATE.clone(), parse_full_date),
                Pattern::new(Category::Abstime, YEAR_MONTH.clone(), parse_year_month),
                Pattern::new(Category::Abstime, MONTH_DAY.clone(), parse_month_day),
                Pattern::new(Category::Abstime, BARE_YEAR.clone(), parse_bare_year),
                Pattern::new(Category::Abstime, DOTTED_MONTH_DAY.clone(), parse_dotted_month_day),
                Pattern::new(Category::Abstime, MORNING_TIME.clone(), parse_morning_time),
                Pattern::new(Category::Abstime, EVENING_TIME.clone(), parse_evening_time),
            ],
        }
    }
}

impl Default for AbstimeTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl Tagger for AbstimeTagger {
    fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }
}
