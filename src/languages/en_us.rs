// src/languages/en_us.rs
//! ```text
//!       en_US
//!   0123456789ab
//! 0 ITZISAPEBBLE
//! 1 ATQUARTERTEN
//! 2 KTWENTYNFIVE
//! 3 HALFBPASTTOF
//! 4 SEVENFIVETWO
//! 5 ONESIXELEVEN
//! 6 TENENINEFOUR
//! 7 EIGHTTWELVES
//! 8 THREEHOCLOCK
//! ```
use super::{next_hour, this_hour, DEFAULT_FILLER_START};
use crate::core::intervals::IntervalTable;
use crate::core::pack::LanguagePack;
use crate::core::types::{LanguageId, Word, WordIndex};
use crate::core::word_table::WordTable;

pub const IT: WordIndex = 13;
pub const IS: WordIndex = 14;
pub const A: WordIndex = 15;
pub const FIVE: WordIndex = 16;
pub const TEN: WordIndex = 17;
pub const QUARTER: WordIndex = 18;
pub const HALF: WordIndex = 19;
pub const TWENTY: WordIndex = 20;
pub const PAST: WordIndex = 21;
pub const TO: WordIndex = 22;
pub const OCLOCK: WordIndex = 23;

const WORDS: &[(WordIndex, Word)] = &[
    (1, Word::new(5, 0, "ONE", "one")),
    (2, Word::new(4, 9, "TWO", "two")),
    (3, Word::new(8, 0, "THREE", "three")),
    (4, Word::new(6, 8, "FOUR", "four")),
    (5, Word::new(4, 5, "FIVE", "five")),
    (6, Word::new(5, 3, "SIX", "six")),
    (7, Word::new(4, 0, "SEVEN", "seven")),
    (8, Word::new(7, 0, "EIGHT", "eight")),
    (9, Word::new(6, 4, "NINE", "nine")),
    (10, Word::new(6, 0, "TEN", "ten")),
    (11, Word::new(5, 6, "ELEVEN", "eleven")),
    (12, Word::new(7, 5, "TWELVE", "twelve")),
    (IT, Word::new(0, 0, "IT", "it")),
    (IS, Word::new(0, 3, "IS", "is")),
    (A, Word::new(1, 0, "A", "a")),
    (FIVE, Word::new(2, 8, "FIVE", "five")),
    (TEN, Word::new(1, 9, "TEN", "ten")),
    (QUARTER, Word::new(1, 2, "QUARTER", "quarter")),
    (HALF, Word::new(3, 0, "HALF", "half")),
    (TWENTY, Word::new(2, 1, "TWENTY", "twenty")),
    (PAST, Word::new(3, 5, "PAST", "past")),
    (TO, Word::new(3, 9, "TO", "to")),
    (OCLOCK, Word::new(8, 6, "OCLOCK", "oclock")),
];

const FILLER: &[Word] = &[
    Word::new(0, 2, "Z", "z"),
    Word::new(0, 5, "APEBBLE", "apebble"),
    Word::new(1, 1, "T", "t"),
    Word::new(2, 0, "K", "k"),
    Word::new(2, 7, "N", "n"),
    Word::new(3, 4, "B", "o"),
    Word::new(3, 11, "F", "f"),
    Word::new(6, 3, "E", "e"),
    Word::new(7, 11, "S", "s"),
    Word::new(8, 5, "H", "h"),
];

pub const INTERVALS: IntervalTable = IntervalTable::new([
    this_hour(&[IT, IS]),
    this_hour(&[OCLOCK]),
    this_hour(&[FIVE, PAST]),
    this_hour(&[TEN, PAST]),
    this_hour(&[A, QUARTER, PAST]),
    this_hour(&[TWENTY, PAST]),
    this_hour(&[TWENTY, FIVE, PAST]),
    this_hour(&[HALF, PAST]),
    next_hour(&[TWENTY, FIVE, TO]),
    next_hour(&[TWENTY, TO]),
    next_hour(&[A, QUARTER, TO]),
    next_hour(&[TEN, TO]),
    next_hour(&[FIVE, TO]),
]);

pub fn pack() -> LanguagePack {
    LanguagePack::new(
        LanguageId::EnUs,
        WordTable::from_layout(WORDS, DEFAULT_FILLER_START, FILLER),
        INTERVALS,
    )
}
