//! §4.8 NumberNormalizer: folds kanji numerals (漢数字) and era years (元号)
//! into Arabic digits before the text reaches extraction. Every other
//! character, including existing Arabic digits and punctuation, passes
//! through untouched.

use lazy_static::lazy_static;
use phf::phf_map;
use regex::{Captures, Regex};

/// Digit value of each kansuji character that stands for 1-9. 〇/零 (zero) are
/// deliberately absent: a bare zero never appears inside a positional kansuji
/// run in the expressions this crate targets.
static KANSUJI_DIGITS: phf::Map<char, u64> = phf_map! {
    '一' => 1, '二' => 2, '三' => 3, '四' => 4, '五' => 5,
    '六' => 6, '七' => 7, '八' => 8, '九' => 9,
};

/// First calendar year of each supported era (明治元年 = 1868, etc).
static ERA_START_YEAR: phf::Map<&'static str, u32> = phf_map! {
    "明治" => 1868,
    "大正" => 1912,
    "昭和" => 1926,
    "平成" => 1989,
    "令和" => 2019,
};

lazy_static! {
    static ref KANSUJI_RUN: Regex = Regex::new("[一二三四五六七八九十百千]+").unwrap();
    static ref ERA_YEAR: Regex =
        Regex::new("(明治|大正|昭和|平成|令和)(元年|([0-9]+)年)").unwrap();
}

/// Folds a single maximal run of kansuji characters into its decimal value,
/// honoring positional composition (十五 = 15, 二十三 = 23, 三百 = 300).
///
/// `十`/`百`/`千` each close out the preceding digit (defaulting to 1 when
/// none was given, so `十` alone reads as 10, not 0) and add it, scaled, into
/// a running total; a bare digit left over at the end is added last.
fn fold_kansuji_run(run: &str) -> u64 {
    let mut total = 0u64;
    let mut current = 0u64;

    for c in run.chars() {
        match c {
            '十' => {
                total += if current == 0 { 1 } else { current } * 10;
                current = 0;
            }
            '百' => {
                total += if current == 0 { 1 } else { current } * 100;
                current = 0;
            }
            '千' => {
                total += if current == 0 { 1 } else { current } * 1000;
                current = 0;
            }
            digit => {
                current = *KANSUJI_DIGITS.get(&digit).expect("KANSUJI_RUN only matches mapped chars or 十百千");
            }
        }
    }

    total + current
}

/// Folds kanji numerals and era years in Japanese text into Arabic digits.
///
/// Stateless apart from the `ignore_kansuji` toggle; holds no reference to
/// the text it normalizes, so a single instance is reused across `parse`
/// calls.
#[derive(Debug, Clone, Default)]
pub struct NumberNormalizer {
    ignore_kansuji: bool,
}

impl NumberNormalizer {
    pub fn new() -> Self {
        NumberNormalizer::default()
    }

    /// When `ignore`, kanji-numeral folding is skipped; era folding still
    /// runs, since an era year with an un-folded kansuji digit run
    /// (令和三年) would otherwise never match the all-digit `ERA_YEAR` regex
    /// and the era would simply pass through unresolved. Callers who want
    /// literal kansuji preserved end-to-end should avoid era-bearing input
    /// or write a custom tagger instead.
    pub fn set_ignore_kansuji(&mut self, ignore: bool) {
        self.ignore_kansuji = ignore;
    }

    pub fn normalize(&self, text: &str) -> String {
        let folded = if self.ignore_kansuji {
            text.to_string()
        } else {
            KANSUJI_RUN
                .replace_all(text, |caps: &Captures| fold_kansuji_run(&caps[0]).to_string())
                .into_owned()
        };

        ERA_YEAR
            .replace_all(&folded, |caps: &Captures| {
                let era = &caps[1];
                let start = *ERA_START_YEAR
                    .get(era)
                    .expect("ERA_YEAR only matches the four eras in its alternation");
                let era_year: u32 = match caps.get(3) {
                    Some(digits) => digits.as_str().parse().expect("digit group is all ASCII digits"),
                    None => 1, // 元年
                };
                format!("{}年", start + era_year - 1)
            })
            .into_owned()
    }
}
